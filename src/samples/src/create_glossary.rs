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

// [START translate_v3_create_glossary]
use lro::Poller;
use std::fmt::Write as _;
use translate::client::TranslationService;
use translate::model::glossary::{LanguageCodePair, Languages};
use translate::model::glossary_input_config::Source;
use translate::model::{GcsSource, Glossary, GlossaryInputConfig};

/// Creates an equivalent-term glossary from a CSV file in Cloud Storage.
///
/// `input_uri` points at a `gs://` CSV where each row pairs a `ja` term
/// with its `en` replacement. The create operation is long-running; this
/// polls it to completion before reporting the new glossary.
pub async fn sample(
    client: &TranslationService,
    output: &mut dyn std::fmt::Write,
    project_id: &str,
    glossary_id: &str,
    input_uri: &str,
) -> anyhow::Result<()> {
    let parent = format!("projects/{project_id}/locations/us-central1");
    let glossary = Glossary::new()
        .set_name(format!("{parent}/glossaries/{glossary_id}"))
        .set_languages(Languages::LanguagePair(
            LanguageCodePair::new()
                .set_source_language_code("ja")
                .set_target_language_code("en")
                .into(),
        ))
        .set_input_config(GlossaryInputConfig::new().set_source(Source::GcsSource(
            GcsSource::new().set_input_uri(input_uri).into(),
        )));

    let created = client
        .create_glossary()
        .set_parent(&parent)
        .set_glossary(glossary)
        .poller()
        .until_done()
        .await?;

    writeln!(output, "Created: {}", created.name)?;
    writeln!(output, "Input Uri: {input_uri}")?;
    Ok(())
}
// [END translate_v3_create_glossary]
