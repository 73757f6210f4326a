//! Character cursor over an immutable source buffer.
//!
//! The cursor is the only owner of the read offset. It supports one
//! character of lookahead: a character can be consumed and then pushed
//! back, after which it is read again by the next `consume`.

#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    // Set by `consume`, cleared by `pushback`.
    can_push_back: bool,
}

impl Cursor {
    pub fn new(source: &str) -> Cursor {
        Cursor {
            chars: source.chars().collect(),
            pos: 0,
            can_push_back: false,
        }
    }

    /// Returns the character at the current offset without advancing.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Returns the character at the current offset and advances past it.
    ///
    /// At end of input nothing is returned and the offset is unchanged.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        self.can_push_back = true;
        Some(c)
    }

    /// Reverses the last `consume`.
    ///
    /// Must not be called twice without a `consume` in between.
    pub fn pushback(&mut self) {
        debug_assert!(self.can_push_back, "pushback without an intervening consume");

        if self.pos > 0 {
            self.pos -= 1;
        }
        self.can_push_back = false;
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }
}
