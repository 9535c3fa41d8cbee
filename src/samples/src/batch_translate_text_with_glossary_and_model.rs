// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// [START translate_v3_batch_translate_text_with_glossary_and_model]
use lro::Poller;
use std::fmt::Write as _;
use translate::client::TranslationService;
use translate::model::input_config::Source;
use translate::model::output_config::Destination;
use translate::model::{
    GcsDestination, GcsSource, InputConfig, OutputConfig, TranslateTextGlossaryConfig,
};

/// Batch-translates text from Cloud Storage using both a glossary and a
/// custom AutoML model.
///
/// The batch operation reads every document under `input_uri`, writes the
/// translations under `output_uri_prefix`, and reports aggregate character
/// counts when it completes. Both the glossary and the model are applied
/// to the single target language.
pub async fn sample(
    client: &TranslationService,
    output: &mut dyn std::fmt::Write,
    input_uri: &str,
    output_uri_prefix: &str,
    project_id: &str,
    location: &str,
    source_language: &str,
    target_language: &str,
    model_id: &str,
    glossary_id: &str,
) -> anyhow::Result<()> {
    let parent = format!("projects/{project_id}/locations/{location}");
    let model_path = format!("{parent}/models/{model_id}");
    let glossary_path = format!("{parent}/glossaries/{glossary_id}");

    let input_config = InputConfig::new()
        .set_mime_type("text/plain")
        .set_source(Source::GcsSource(
            GcsSource::new().set_input_uri(input_uri).into(),
        ));
    let output_config = OutputConfig::new().set_destination(Destination::GcsDestination(
        GcsDestination::new()
            .set_output_uri_prefix(output_uri_prefix)
            .into(),
    ));

    let response = client
        .batch_translate_text()
        .set_parent(&parent)
        .set_source_language_code(source_language)
        .set_target_language_codes([target_language])
        .set_models([(target_language, model_path.as_str())])
        .set_input_configs([input_config])
        .set_output_config(output_config)
        .set_glossaries([(
            target_language,
            TranslateTextGlossaryConfig::new().set_glossary(&glossary_path),
        )])
        .poller()
        .until_done()
        .await?;

    writeln!(output, "Total Characters: {}", response.total_characters)?;
    writeln!(
        output,
        "Translated Characters: {}",
        response.translated_characters
    )?;
    Ok(())
}
// [END translate_v3_batch_translate_text_with_glossary_and_model]
