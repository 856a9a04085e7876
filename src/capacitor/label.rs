//! Bounded-length capacitor label.

use std::fmt;
use std::ops::Deref;

/// Maximum label length in bytes.
pub const LABEL_CAPACITY: usize = 29;

/// A short identifying name, at most [`LABEL_CAPACITY`] bytes long.
///
/// Longer input is truncated, never rejected. Truncation happens on a UTF-8
/// character boundary, so a multi-byte character straddling the limit is
/// dropped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Create a label, truncating `name` to [`LABEL_CAPACITY`] bytes.
    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(LABEL_CAPACITY);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self(name[..end].to_string())
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether constructing a label from `name` would truncate it.
    pub fn would_truncate(name: &str) -> bool {
        name.len() > LABEL_CAPACITY
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_kept() {
        let label = Label::new("Electrolytic");
        assert_eq!(label.as_str(), "Electrolytic");
        assert!(!Label::would_truncate("Electrolytic"));
    }

    #[test]
    fn test_long_label_truncated() {
        let name = "Aluminium Electrolytic 105C Long Life";
        let label = Label::new(name);
        assert_eq!(label.len(), LABEL_CAPACITY);
        assert_eq!(label.as_str(), &name[..LABEL_CAPACITY]);
        assert!(Label::would_truncate(name));
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 28 ASCII bytes followed by a two-byte 'µ' spanning bytes 28..30
        let name = format!("{}µF", "x".repeat(28));
        let label = Label::new(&name);
        assert_eq!(label.as_str(), "x".repeat(28));
    }

    #[test]
    fn test_exact_capacity() {
        let name = "y".repeat(LABEL_CAPACITY);
        assert_eq!(Label::new(&name).as_str(), name);
    }
}
