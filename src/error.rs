use std::borrow::Cow;
use thiserror::Error;

/// A parse failure: what went wrong and where
///
/// There is one error kind at this layer. Errors compare and order by
/// `(message, position)`, so two runs of the same parser over the same input
/// produce errors that are equal in every field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("{message} at {position}")]
pub struct ParseError<P> {
    message: Cow<'static, str>,
    position: P,
}

impl<P> ParseError<P> {
    /// Create an error reported at `position`
    ///
    /// ```
    /// use parsicore::{LineColumn, ParseError};
    ///
    /// let error = ParseError::new("expected digit", LineColumn::new(2, 3));
    /// assert_eq!(error.to_string(), "expected digit at 2:3");
    /// ```
    pub fn new(message: impl Into<Cow<'static, str>>, position: P) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    /// Same message, attributed to another position
    pub fn at(self, position: P) -> Self {
        Self {
            message: self.message,
            position,
        }
    }

    /// Split into message and position
    pub fn into_parts(self) -> (Cow<'static, str>, P) {
        (self.message, self.position)
    }
}
