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

use rand::{Rng, distr::Alphanumeric};

pub type Result<T> = anyhow::Result<T>;

pub const GLOSSARY_ID_LENGTH: usize = 49;

/// Returns the project id used for the integration tests.
pub fn project_id() -> Result<String> {
    let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
    Ok(project_id)
}

pub fn report_error(e: anyhow::Error) -> anyhow::Error {
    eprintln!("\n\nERROR {e:?}\n");
    tracing::error!("ERROR {e:?}");
    e
}

pub fn random_glossary_id() -> String {
    // Glossary ids must start with a letter, the prefix meets this
    // requirement.
    const PREFIX: &str = "must_start_with_letter_";
    let glossary_id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GLOSSARY_ID_LENGTH - PREFIX.len())
        .map(char::from)
        .collect();
    format!("{PREFIX}{glossary_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glossary_id_starts_with_letter() {
        let id = random_glossary_id();
        assert!(
            id.chars().next().is_some_and(|c| c.is_ascii_alphabetic()),
            "{id}"
        );
    }

    #[test]
    fn glossary_id_has_fixed_length() {
        for _ in 0..32 {
            let id = random_glossary_id();
            assert_eq!(id.len(), GLOSSARY_ID_LENGTH, "{id}");
        }
    }
}
