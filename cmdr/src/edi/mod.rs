/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

// Include.
pub mod app_main;
pub mod clap_config;
pub mod launcher;
pub mod state;
pub mod ui_str;
pub mod ui_templates;

// Reexport.
pub use app_main::*;
pub use clap_config::*;
pub use launcher::*;
pub use state::*;
pub use ui_str::*;
pub use ui_templates::*;
