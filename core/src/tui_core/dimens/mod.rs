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

// Attach source files.
pub mod ch_unit;
pub mod percent;
pub mod position;
pub mod requested_size;
pub mod size;

// Re-export.
pub use ch_unit::*;
pub use percent::*;
pub use position::*;
pub use requested_size::*;
pub use size::*;

// Tests.
mod test_ch_unit;
mod test_dimens;
