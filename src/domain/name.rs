//! src/domain/name.rs
use unicode_segmentation::UnicodeSegmentation;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("A name must be at least 2 characters long")]
    TooShort,
}

#[derive(Debug, Clone)]
pub struct ApplicantName(String);

impl ApplicantName {
    pub fn parse(s: String) -> Result<Self, Error> {
        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two
        // characters (`a` and `̊`). `true` selects the extended grapheme
        // definition set, the recommended one.
        if s.graphemes(true).count() < 2 {
            return Err(Error::TooShort);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ApplicantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
