//! Error types for Arbor core primitives.

use std::fmt;

/// Errors raised by the core primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A host tried to push a value into state it does not control.
    NotControlled {
        /// Name of the state slot, e.g. `"expanded"`.
        name: &'static str,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotControlled { name } => {
                write!(
                    f,
                    "The `{name}` state is uncontrolled. Construct the tree with a controlled \
                     `{name}` value to update it from outside"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_controlled_message() {
        let err = CoreError::NotControlled { name: "selected" };
        let message = err.to_string();
        assert!(message.contains("`selected`"));
        assert!(message.contains("uncontrolled"));
    }
}
