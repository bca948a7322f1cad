use crate::event::{Key, Modifiers};

/// Text content and cursor of a single-line input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputData {
    pub text: String,
    /// Byte offset, always on a char boundary.
    pub cursor: usize,
}

/// Outcome of feeding a key to a [`TextInputData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text changed.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Cursor moved, text unchanged.
    Handled,
    /// The key means nothing to a text input.
    Ignored,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        if modifiers.ctrl || modifiers.alt {
            return TextEditResult::Ignored;
        }

        match key {
            Key::Char(c) => {
                self.text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                TextEditResult::Changed
            }
            Key::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    TextEditResult::Changed
                }
                None => TextEditResult::Handled,
            },
            Key::Delete => match self.next_boundary() {
                Some(next) => {
                    self.text.replace_range(self.cursor..next, "");
                    TextEditResult::Changed
                }
                None => TextEditResult::Handled,
            },
            Key::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                TextEditResult::Handled
            }
            Key::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                TextEditResult::Handled
            }
            Key::Home => {
                self.cursor = 0;
                TextEditResult::Handled
            }
            Key::End => {
                self.cursor = self.text.len();
                TextEditResult::Handled
            }
            Key::Enter => TextEditResult::Submitted,
            Key::Tab | Key::Escape | Key::Up | Key::Down => TextEditResult::Ignored,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
