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

//! Samples for the Cloud Translation API.
//!
//! Each sample is a standalone function taking a client and an output
//! sink. The sink receives the lines a user would see on the console,
//! so callers (and their tests) own the output instead of the process
//! stdout.

pub mod batch_translate_text_with_glossary_and_model;
pub mod create_glossary;
pub mod delete_glossary;
