use crate::modules::events::core::errors::EventError;

/// A title that passed the presence check: a string with at least one character.
///
/// Whitespace-only titles are accepted; only absence and the empty string are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTitle(String);

impl EventTitle {
    pub fn parse(raw: Option<String>) -> Result<Self, EventError> {
        match raw {
            Some(title) if !title.is_empty() => Ok(Self(title)),
            _ => Err(EventError::MissingTitle),
        }
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
