//! src/domain/phone.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("A phone number must contain only digits, with an optional leading '+'")]
    InvalidCharacters,
    #[error("A phone number must have at least 10 digits")]
    TooShort,
}

#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Accepts an optional leading `+` followed by at least ten ASCII
    /// digits, nothing else.
    pub fn parse(s: String) -> Result<Self, Error> {
        let digits = s.strip_prefix('+').unwrap_or(&s);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidCharacters);
        }

        if digits.len() < 10 {
            return Err(Error::TooShort);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
