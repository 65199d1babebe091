use crate::decode::error::{DecodeError, ErrorKind};

/// A bounds-checked read position over an immutable byte buffer.
///
/// Every decoder takes the cursor explicitly and advances it past what it consumed.
/// Reads past the end of the buffer fail with [`ErrorKind::TruncatedInput`] at the
/// current position, leaving the cursor where it was.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_position(bytes, 0)
    }

    pub fn with_position(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.pos)
    }

    pub fn at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Result<u8, DecodeError> {
        self.bytes
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.error(ErrorKind::TruncatedInput))
    }

    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let b = self.peek()?;
        self.pos += 1;
        Ok(b)
    }

    pub fn advance(&mut self, n: usize) -> Result<(), DecodeError> {
        self.read_bytes(n).map(|_| ())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let all: &'a [u8] = self.bytes;
        let bytes = self
            .pos
            .checked_add(n)
            .and_then(|end| all.get(self.pos..end))
            .ok_or_else(|| self.error(ErrorKind::TruncatedInput))?;

        self.pos += n;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// An error of the given kind located at the current position.
    pub fn error(&self, kind: ErrorKind) -> DecodeError {
        DecodeError::new(self.pos, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_position() {
        let mut cursor = Cursor::new(&[1, 2, 3, 4, 5]);
        assert_eq!(cursor.peek().unwrap(), 1);
        assert_eq!(cursor.read_byte().unwrap(), 1);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[2, 3]);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.read_array::<2>().unwrap(), [4, 5]);
        assert!(cursor.at_end());
    }

    #[test]
    fn reading_past_end_is_truncated_input() {
        let mut cursor = Cursor::new(&[0xAA, 0xBB]);
        cursor.advance(1).unwrap();

        let err = cursor.read_bytes(2).unwrap_err();
        assert_eq!(err, DecodeError::new(1, ErrorKind::TruncatedInput));
        // a failed read leaves the position unchanged
        assert_eq!(cursor.position(), 1);

        cursor.advance(1).unwrap();
        assert_eq!(cursor.peek().unwrap_err().offset, 2);
        assert_eq!(cursor.read_byte().unwrap_err().kind, ErrorKind::TruncatedInput);
    }

    #[test]
    fn position_past_end_has_nothing_remaining() {
        let cursor = Cursor::with_position(&[0; 3], 10);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.at_end());
        assert_eq!(cursor.peek().unwrap_err().offset, 10);
    }

    #[test]
    fn empty_read_past_end_is_truncated_input() {
        let mut cursor = Cursor::with_position(&[1, 2, 3], 10);
        assert_eq!(
            cursor.read_bytes(0).unwrap_err(),
            DecodeError::new(10, ErrorKind::TruncatedInput)
        );
        assert_eq!(cursor.position(), 10);

        // at the very end, an empty read still succeeds
        let mut cursor = Cursor::with_position(&[1, 2, 3], 3);
        assert_eq!(cursor.read_bytes(0).unwrap(), &[] as &[u8]);
    }
}
