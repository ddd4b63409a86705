//! src/domain/skills.rs
use unicode_segmentation::UnicodeSegmentation;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Skills must be at least 5 characters long")]
    TooShort,
}

#[derive(Debug, Clone)]
pub struct Skills(String);

impl Skills {
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.graphemes(true).count() < 5 {
            return Err(Error::TooShort);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for Skills {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
