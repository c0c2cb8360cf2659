use std::str::Chars;

/// Forward-only view over the source characters.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    len: usize,
}

pub const EOF: char = '\0';

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            len: input.len(),
        }
    }

    pub fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF)
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Byte offset of the next unread character.
    pub fn pos(&self) -> usize {
        self.len - self.chars.as_str().len()
    }

    pub fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_eof() && predicate(self.first()) {
            self.bump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn pos_counts_bytes() {
        let mut cursor = Cursor::new("éa");
        cursor.bump();
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.first(), 'a');
    }

    #[test]
    fn eat_while_stops_at_eof() {
        let mut cursor = Cursor::new("   ");
        cursor.eat_while(char::is_whitespace);
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), None);
    }
}
