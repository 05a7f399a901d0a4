/*
 *   Copyright (c) 2024 R3BL LLC
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

// Attach sources.
pub mod calc_str_len;
pub mod formatter;
pub mod friendly_random_id;
pub mod string_helpers;
pub mod temp_dir;

// Re-export.
pub use calc_str_len::*;
pub use formatter::*;
pub use friendly_random_id::*;
pub use string_helpers::*;
pub use temp_dir::*;
