use crossterm::event::KeyCode;
use unicode_width::UnicodeWidthStr;

/// Cursor state for a single-line text input
///
/// The value itself lives in the record; this only tracks where the cursor
/// sits (in chars) so edits can be applied at the right position.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor_to_end(&mut self, value: &str) {
        self.cursor = value.chars().count();
    }

    /// Display column of the cursor, accounting for wide characters
    pub fn cursor_column(&self, value: &str) -> u16 {
        let before: String = value.chars().take(self.cursor).collect();
        before.width() as u16
    }

    /// Apply a key to `value`
    ///
    /// Returns the new value when the text changed, None for cursor-only
    /// movement or ignored keys.
    pub fn handle_key(&mut self, key: KeyCode, value: &str, max_length: Option<usize>) -> Option<String> {
        let len = value.chars().count();
        self.cursor = self.cursor.min(len);

        match key {
            KeyCode::Char(c) => {
                if max_length.is_some_and(|max| len >= max) {
                    return None;
                }
                let mut chars: Vec<char> = value.chars().collect();
                chars.insert(self.cursor, c);
                self.cursor += 1;
                Some(chars.into_iter().collect())
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let mut chars: Vec<char> = value.chars().collect();
                chars.remove(self.cursor - 1);
                self.cursor -= 1;
                Some(chars.into_iter().collect())
            }
            KeyCode::Delete => {
                if self.cursor >= len {
                    return None;
                }
                let mut chars: Vec<char> = value.chars().collect();
                chars.remove(self.cursor);
                Some(chars.into_iter().collect())
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = len;
                None
            }
            _ => None,
        }
    }
}
