/*
 *   Copyright (c) 2022-2025 R3BL LLC
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

// Attach source files.
pub mod caret;
pub mod col_index;
pub mod col_width;
pub mod dim;
pub mod dimens_check_overflows; // Don't re-export.
pub mod pc;
pub mod pos;
pub mod req_size_pc;
pub mod row_height;
pub mod row_index;
pub mod scr_ofs;

// Re-export.
pub use caret::*;
pub use col_index::*;
pub use col_width::*;
pub use dim::*;
pub use pc::*;
pub use pos::*;
pub use req_size_pc::*;
pub use row_height::*;
pub use row_index::*;
pub use scr_ofs::*;
