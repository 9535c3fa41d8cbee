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

// [START translate_v3_delete_glossary]
use lro::Poller;
use std::fmt::Write as _;
use translate::client::TranslationService;

/// Deletes a glossary and polls the delete operation to completion.
pub async fn sample(
    client: &TranslationService,
    output: &mut dyn std::fmt::Write,
    project_id: &str,
    glossary_id: &str,
) -> anyhow::Result<()> {
    let deleted = client
        .delete_glossary()
        .set_name(format!(
            "projects/{project_id}/locations/us-central1/glossaries/{glossary_id}"
        ))
        .poller()
        .until_done()
        .await?;

    writeln!(output, "Deleted: {}", deleted.name)?;
    Ok(())
}
// [END translate_v3_delete_glossary]
