use std::fmt;

/// A name as it appears in the binary: a length-prefixed byte string.
///
/// Names are supposed to be UTF-8, but the decoder keeps the raw bytes and
/// leaves that check to whoever consumes the module.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Name(pub Vec<u8>);

impl Name {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The name as a string slice, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name")
            .field(&String::from_utf8_lossy(&self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_is_kept_verbatim() {
        let name = Name(vec![0x61, 0xFF, 0x62]);
        assert_eq!(name.as_str(), None);
        assert_eq!(name.as_bytes(), &[0x61, 0xFF, 0x62]);
        assert_eq!(name.to_string(), "a\u{FFFD}b");
    }

    #[test]
    fn debug_shows_text() {
        assert_eq!(format!("{:?}", Name::from("env")), r#"Name("env")"#);
    }
}
