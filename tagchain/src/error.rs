use std::io;

/// A requested tag matched no candidate of the searched family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tag {tag:?} for family {family}")]
pub struct UnresolvedTag {
    family: &'static str,
    tag: String,
}

impl UnresolvedTag {
    pub fn new(family: &'static str, tag: impl Into<String>) -> Self {
        Self {
            family,
            tag: tag.into(),
        }
    }

    /// Name of the family that was searched.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The tag that was requested.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Failure while running a [`Chain`](crate::Chain).
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error(transparent)]
    Unresolved(#[from] UnresolvedTag),

    #[error("failed to write chain output: {0}")]
    Io(#[from] io::Error),
}

impl ChainError {
    pub fn unresolved(&self) -> Option<&UnresolvedTag> {
        match self {
            ChainError::Unresolved(err) => Some(err),
            ChainError::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_message_names_family_and_tag() {
        let err = UnresolvedTag::new("B", "B3");
        assert_eq!(err.to_string(), "invalid tag \"B3\" for family B");
        assert_eq!(err.family(), "B");
        assert_eq!(err.tag(), "B3");
    }

    #[test]
    fn chain_error_is_transparent_for_unresolved() {
        let err = ChainError::from(UnresolvedTag::new("C", ""));
        assert_eq!(err.to_string(), "invalid tag \"\" for family C");
        assert_eq!(err.unresolved(), Some(&UnresolvedTag::new("C", "")));
    }

    #[test]
    fn io_errors_are_not_unresolved() {
        let err = ChainError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.unresolved().is_none());
        assert_eq!(err.to_string(), "failed to write chain output: closed");
    }
}
