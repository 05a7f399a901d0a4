/*
 *   Copyright (c) 2025 R3BL LLC
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

#[cfg(test)]
pub mod test_fixtures {
    use std::fmt::Debug;

    use crate::{
        ok, ColWidth, CommonResult, InputEvent, KeyPress, Key,
    };
    use crate::tui::{EventPropagation, FlexBoxId};

    use super::super::{ListItem, ListItemId, ListComponent, BatchAction};

    /// Mock application state for testing
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct TestState {
        pub counter: u32,
    }

    /// Mock application signal for testing
    #[derive(Debug, Clone, Default)]
    pub struct TestSignal;

    /// Simple test item that displays a string
    #[derive(Debug, Clone, PartialEq)]
    pub struct SimpleItem {
        pub id: u64,
        pub text: String,
        pub completed: bool,
    }

    impl SimpleItem {
        pub fn new(id: u64, text: &str) -> Self {
            Self {
                id,
                text: text.to_string(),
                completed: false,
            }
        }
    }

    impl ListItem<TestState, TestSignal> for SimpleItem {
        fn id(&self) -> ListItemId {
            ListItemId::new(self.id)
        }

        fn render_line(
            &mut self,
            _state: &TestState,
            is_focused: bool,
            is_selected: bool,
            _available_width: ColWidth,
        ) -> CommonResult<String> {
            let checkbox = if self.completed { "☑" } else { "☐" };
            let marker = if is_focused { "›" } else { " " };
            let bg = if is_selected { "[*]" } else { "   " };
            ok!(format!("{}{} {} {}", marker, bg, checkbox, self.text))
        }

        fn handle_event(
            &mut self,
            event: InputEvent,
            state: &mut TestState,
        ) -> CommonResult<EventPropagation> {
            ok!(match event {
                InputEvent::Keyboard(KeyPress::Plain {
                    key: Key::Character('t'),
                }) => {
                    self.completed = !self.completed;
                    EventPropagation::ConsumedRender
                }
                InputEvent::Keyboard(KeyPress::Plain {
                    key: Key::Character('i'),
                }) => {
                    state.counter += 1;
                    EventPropagation::ConsumedRender
                }
                _ => EventPropagation::Propagate,
            })
        }
    }

    /// Helper to create a test list component with sample items
    pub fn create_test_list() -> ListComponent<TestState, TestSignal, SimpleItem> {
        let items = vec![
            SimpleItem::new(1, "Item 1"),
            SimpleItem::new(2, "Item 2"),
            SimpleItem::new(3, "Item 3"),
            SimpleItem::new(4, "Item 4"),
            SimpleItem::new(5, "Item 5"),
        ];

        ListComponent::new(FlexBoxId::new(1), items)
    }

    /// Helper to create a batch action for testing
    pub fn create_delete_batch_action() -> BatchAction<TestState, TestSignal, SimpleItem> {
        BatchAction::new(
            KeyPress::Plain {
                key: Key::Character('d'),
            },
            "Delete selected items".to_string(),
            Box::new(|items, selected_indices, _state| {
                for &idx in selected_indices.iter().rev() {
                    items.remove(idx);
                }
                ok!(())
            }),
        )
    }

    /// Helper to create a batch action that marks items as complete
    pub fn create_complete_batch_action() -> BatchAction<TestState, TestSignal, SimpleItem> {
        BatchAction::new(
            KeyPress::Plain {
                key: Key::Character('c'),
            },
            "Complete selected items".to_string(),
            Box::new(|items, selected_indices, _state| {
                for &idx in selected_indices {
                    items[idx].completed = true;
                }
                ok!(())
            }),
        )
    }
}
