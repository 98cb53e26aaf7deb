use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a field accepts. Numeric fields take digits plus one leading '-';
/// letting the minus through keeps the engine's negative-input validation
/// reachable from the keyboard instead of silently masking it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Numeric,
    Text,
}

pub struct LineInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
    kind: InputKind,
}

impl LineInput {
    pub fn new(kind: InputKind) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            kind,
        }
    }

    pub fn with_text(kind: InputKind, text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
            kind,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled rendering.
    /// When cursor is at end of text, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        if self.cursor >= self.text.chars().count() {
            (&self.text, None, "")
        } else {
            let ch = self.text[byte_offset..].chars().next().unwrap();
            let next_byte = byte_offset + ch.len_utf8();
            (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
        }
    }

    /// Apply an editing key. Enter/Esc/Tab are screen-level concerns and are
    /// expected to be intercepted by the caller before reaching here.
    pub fn handle(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.chars().count(),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let byte_offset = self.char_to_byte(self.cursor - 1);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    let byte_offset = self.char_to_byte(self.cursor);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.accepts(ch) {
                    let byte_offset = self.char_to_byte(self.cursor);
                    self.text.insert(byte_offset, ch);
                    self.cursor += 1;
                }
            }
            _ => {}
        }
    }

    fn accepts(&self, ch: char) -> bool {
        match self.kind {
            InputKind::Text => true,
            InputKind::Numeric => {
                ch.is_ascii_digit() || (ch == '-' && self.cursor == 0 && !self.text.contains('-'))
            }
        }
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Delete word before cursor (unix-word-rubout: skip whitespace, then
    /// non-whitespace).
    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        let start = self.char_to_byte(pos);
        let end = self.char_to_byte(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_str(input: &mut LineInput, s: &str) {
        for ch in s.chars() {
            input.handle(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_numeric_field_rejects_letters() {
        let mut input = LineInput::new(InputKind::Numeric);
        type_str(&mut input, "4a0b");
        assert_eq!(input.value(), "40");
    }

    #[test]
    fn test_numeric_field_allows_single_leading_minus() {
        let mut input = LineInput::new(InputKind::Numeric);
        type_str(&mut input, "-5");
        assert_eq!(input.value(), "-5");

        // A second minus, or one typed mid-number, is dropped.
        type_str(&mut input, "-");
        assert_eq!(input.value(), "-5");

        let mut input = LineInput::new(InputKind::Numeric);
        type_str(&mut input, "5-");
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_text_field_accepts_anything() {
        let mut input = LineInput::new(InputKind::Text);
        type_str(&mut input, "Data Structures & Algos 101");
        assert_eq!(input.value(), "Data Structures & Algos 101");
    }

    #[test]
    fn test_backspace_and_cursor_movement() {
        let mut input = LineInput::new(InputKind::Text);
        type_str(&mut input, "abc");
        input.handle(press(KeyCode::Left));
        input.handle(press(KeyCode::Backspace));
        assert_eq!(input.value(), "ac");
        input.handle(press(KeyCode::End));
        input.handle(press(KeyCode::Backspace));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = LineInput::new(InputKind::Numeric);
        type_str(&mut input, "12345");
        input.handle(ctrl('u'));
        assert!(input.is_empty());
    }

    #[test]
    fn test_ctrl_w_deletes_last_word() {
        let mut input = LineInput::new(InputKind::Text);
        type_str(&mut input, "operating systems");
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "operating ");
    }

    #[test]
    fn test_render_parts_at_cursor() {
        let mut input = LineInput::with_text(InputKind::Text, "abc");
        let (before, at, after) = input.render_parts();
        assert_eq!((before, at, after), ("abc", None, ""));

        input.handle(press(KeyCode::Left));
        let (before, at, after) = input.render_parts();
        assert_eq!((before, at, after), ("ab", Some('c'), ""));
    }
}
