/*
 *   Copyright (c) 2022 R3BL LLC
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

pub mod attribute_args_ext;
pub mod data_ext;
pub mod ident_ext;
pub mod meta_ext;
pub mod nested_meta_ext;
pub mod syn_parser_helpers;
pub mod type_ext;

// Re-export.
pub use attribute_args_ext::*;
pub use data_ext::*;
pub use ident_ext::*;
pub use meta_ext::*;
pub use nested_meta_ext::*;
pub use syn_parser_helpers::*;
pub use type_ext::*;
