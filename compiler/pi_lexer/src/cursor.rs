//! Forward-only cursor over the bytes of one source line.
//!
//! The cursor advances byte-by-byte. Reading past the end yields `0x00`, so
//! classification predicates terminate naturally at EOF; interior null bytes
//! are told apart from EOF by comparing `pos` against `source_len`.

/// Forward-only byte cursor over a source line.
///
/// Offsets are `u32`, matching [`Span`](pi_ir::Span). The caller guarantees
/// the source length fits in `u32`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
    /// Length of `source` in bytes.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Contract
    ///
    /// `source_len == source.len()`. Checked by `Tokenizer::new()`.
    pub(crate) fn new(source: &'a str, source_len: u32) -> Self {
        debug_assert_eq!(
            source.len(),
            source_len as usize,
            "source length must fit in u32"
        );
        Self {
            source,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.pos as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.source_len, "advance past EOF");
        self.pos += 1;
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source substring between two offsets.
    ///
    /// Returns an empty string if the range is out of bounds or not on
    /// character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip a run of whitespace bytes (C-locale `isspace`).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(crate::char_class::is_whitespace);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character, never beyond EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }
}
