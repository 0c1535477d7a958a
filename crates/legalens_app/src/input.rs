/// Single-line text input with a character-indexed cursor.
///
/// The widget owns the edit buffer and reports each change to the core as
/// a full replacement text, so the state machine never deals with cursor
/// positions.
#[derive(Debug, Default)]
pub struct InputBox {
    text: String,
    cursor: usize,
}

impl InputBox {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts at the cursor and returns the updated text.
    pub fn insert(&mut self, ch: char) -> String {
        let at = self.byte_index();
        self.text.insert(at, ch);
        self.cursor += 1;
        self.text.clone()
    }

    /// Removes the character before the cursor, if any.
    pub fn backspace(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.text.remove(at);
        Some(self.text.clone())
    }

    /// Removes the character under the cursor, if any.
    pub fn delete(&mut self) -> Option<String> {
        if self.cursor >= self.text.chars().count() {
            return None;
        }
        let at = self.byte_index();
        self.text.remove(at);
        Some(self.text.clone())
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Empties the buffer and returns the (empty) text.
    pub fn clear(&mut self) -> String {
        self.text.clear();
        self.cursor = 0;
        self.text.clone()
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len())
    }
}
