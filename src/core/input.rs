use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::BufRead;

/// Whitespace-delimited token reader. Tokens may span any number of lines.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once input is exhausted.
    ///
    /// Lines are decoded lossily: bytes that are not UTF-8 (e.g. CP1251
    /// input) become U+FFFD instead of failing the read.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        let mut line = Vec::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_across_lines() {
        let mut reader = TokenReader::new(Cursor::new("1 Smith\n\n   01-01-1990\t555\n"));
        let mut tokens = Vec::new();
        while let Some(token) = reader.next_token().unwrap() {
            tokens.push(token);
        }
        assert_eq!(tokens, vec!["1", "Smith", "01-01-1990", "555"]);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = TokenReader::new(Cursor::new(""));
        assert_eq!(reader.next_token().unwrap(), None);
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut reader = TokenReader::new(Cursor::new(b"1 \xC8\xE2\xE0\xED\n0\n".to_vec()));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("0"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = TokenReader::new(Cursor::new("0"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("0"));
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
