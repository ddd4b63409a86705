//! src/domain/message.rs
use unicode_segmentation::UnicodeSegmentation;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("A message must be at least 50 characters long")]
    TooShort,
}

/// The "why do you want to join us?" free-text field.
#[derive(Debug, Clone)]
pub struct Motivation(String);

impl Motivation {
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.graphemes(true).count() < 50 {
            return Err(Error::TooShort);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for Motivation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
