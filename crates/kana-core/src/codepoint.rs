use std::fmt;

/// One decoded unit of text.
///
/// Usually a Unicode scalar value, but a lone surrogate (U+D800..U+DFFF) read
/// from a malformed UTF-16 buffer is carried as-is so it can be written back
/// unchanged. That is why this is not a `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(u32);

impl Codepoint {
    pub const MAX: u32 = 0x10FFFF;

    /// Wrap a raw value. Values above U+10FFFF are clamped to U+FFFD.
    pub const fn new(value: u32) -> Self {
        if value > Self::MAX {
            Self(0xFFFD)
        } else {
            Self(value)
        }
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_surrogate(self) -> bool {
        self.0 >= 0xD800 && self.0 <= 0xDFFF
    }

    /// Whether encoding this codepoint as UTF-16 needs a surrogate pair.
    pub const fn is_astral(self) -> bool {
        self.0 > 0xFFFF
    }

    /// `None` for lone surrogates.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    pub(crate) const fn offset(self, delta: i32) -> Self {
        Self((self.0 as i32 + delta) as u32)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "\u{FFFD}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogates_are_not_chars() {
        let lone = Codepoint::new(0xD83D);
        assert!(lone.is_surrogate());
        assert_eq!(lone.to_char(), None);
        assert_eq!(lone.to_string(), "\u{FFFD}");
    }

    #[test]
    fn out_of_range_is_replaced() {
        assert_eq!(Codepoint::new(0x110000).value(), 0xFFFD);
    }

    #[test]
    fn astral_detection() {
        assert!(Codepoint::from('😺').is_astral());
        assert!(!Codepoint::from('猫').is_astral());
    }
}
