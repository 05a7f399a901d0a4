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

// Attach sources.
pub mod crossterm_color_converter;
pub mod hex_color_parser;
pub mod tui_color;
pub mod tui_style_impl;
pub mod tui_style_lite;
pub mod tui_stylesheet;

// Re-export.
pub use crossterm_color_converter::*;
pub use hex_color_parser::*;
pub use tui_color::*;
pub use tui_style_impl::*;
pub use tui_stylesheet::*;
