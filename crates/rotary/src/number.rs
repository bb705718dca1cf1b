use derive_more::{AsRef, Deref, Display, From, Into};

/// Backspace presses in a row before the long-press hint shows up.
pub const MIN_BACKSPACE_HINT_TRIGGER: u32 = 3;
/// The hint only shows once the number is this short.
pub const CHARS_LEFT_HINT_TRIGGER: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display, Deref, From, Into, AsRef)]
pub struct PhoneNumber(String);

crate::impl_string_newtype!(PhoneNumber);

impl PhoneNumber {
    /// Keeps only the characters a rotary dial can produce.
    pub fn from_digits(raw: &str) -> Self {
        Self(raw.chars().filter(char::is_ascii_digit).collect())
    }

    /// `tel:` URI for handing the number to the system.
    pub fn to_uri(&self) -> String {
        format!("tel:{}", self.0)
    }
}

/// The number being dialed.
#[derive(Debug, Clone, Default)]
pub struct NumberEntry {
    number: PhoneNumber,
    backspace_counter: u32,
    knows_long_press: bool,
}

impl NumberEntry {
    pub fn new(initial: PhoneNumber) -> Self {
        Self {
            number: initial,
            ..Self::default()
        }
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn push_digit(&mut self, digit: u8) {
        self.backspace_counter = 0;
        self.number.0.push(char::from(b'0' + digit % 10));
    }

    /// Removes the last digit. Returns `true` when the user should be told
    /// that holding backspace clears the whole number.
    pub fn backspace(&mut self) -> bool {
        self.number.0.pop();
        self.backspace_counter += 1;

        !self.knows_long_press
            && self.backspace_counter >= MIN_BACKSPACE_HINT_TRIGGER
            && self.number.len() <= CHARS_LEFT_HINT_TRIGGER
    }

    pub fn clear(&mut self) {
        self.number.0.clear();
        self.knows_long_press = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(digits: &[u8]) -> NumberEntry {
        let mut e = NumberEntry::default();
        digits.iter().for_each(|&d| e.push_digit(d));
        e
    }

    #[test]
    fn test_push_digits() {
        let e = entry(&[0, 1, 7, 9]);
        assert_eq!(e.number().as_str(), "0179");
        assert_eq!(e.number().to_uri(), "tel:0179");
    }

    #[test]
    fn test_from_digits() {
        assert_eq!(PhoneNumber::from_digits("+49 (30) 123-45").as_str(), "493012345");
        assert!(PhoneNumber::from_digits("abc").is_empty());
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut e = NumberEntry::default();
        assert!(!e.backspace());
        assert!(e.number().is_empty());
    }

    #[test]
    fn test_hint_after_repeated_backspace() {
        let mut e = entry(&[1, 2, 3, 4, 5, 6]);
        assert!(!e.backspace()); // 12345
        assert!(!e.backspace()); // 1234
        assert!(e.backspace()); // 123
        assert!(e.backspace()); // 12
    }

    #[test]
    fn test_hint_needs_short_number() {
        let mut e = entry(&[1, 2, 3, 4, 5, 6, 7, 8]);
        for _ in 0..3 {
            assert!(!e.backspace());
        }
        assert_eq!(e.number().as_str(), "12345");
    }

    #[test]
    fn test_digit_resets_counter() {
        let mut e = entry(&[1, 2, 3]);
        e.backspace();
        e.backspace();
        e.push_digit(4);
        assert!(!e.backspace());
        assert!(!e.backspace());
        assert!(e.backspace());
    }

    #[test]
    fn test_long_press_silences_hint() {
        let mut e = entry(&[5, 5, 5]);
        e.clear();
        assert!(e.number().is_empty());

        e.push_digit(1);
        for _ in 0..4 {
            assert!(!e.backspace());
        }
    }
}
