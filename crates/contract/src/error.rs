//! The contract-violation taxonomy shared by the keel crates.

use thiserror::Error;

/// Result of a fallible contract-checked operation.
pub type ContractResult<T> = Result<T, ContractError>;

/// A violated caller contract.
///
/// Every variant carries the human-readable message built at the call site
/// that detected the violation. Which variant is raised, not the message,
/// is the stable part of the contract.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A required value resolved to nothing.
    #[error("{message}")]
    NullArgument { message: String },

    /// An argument failed validation.
    #[error("{message}")]
    IllegalArgument { message: String },

    /// A call was made while the receiver was in the wrong state.
    #[error("{message}")]
    IllegalState { message: String },

    /// An index or range precondition was violated.
    #[error("{message}")]
    IndexOutOfBounds { message: String },
}

impl ContractError {
    /// Create a [`ContractError::NullArgument`].
    pub fn null_argument(message: impl Into<String>) -> Self {
        Self::NullArgument {
            message: message.into(),
        }
    }

    /// Create a [`ContractError::IllegalArgument`].
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
        }
    }

    /// Create a [`ContractError::IllegalState`].
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    /// Create a [`ContractError::IndexOutOfBounds`].
    pub fn index_out_of_bounds(message: impl Into<String>) -> Self {
        Self::IndexOutOfBounds {
            message: message.into(),
        }
    }

    /// The message built where the violation was detected.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NullArgument { message }
            | Self::IllegalArgument { message }
            | Self::IllegalState { message }
            | Self::IndexOutOfBounds { message } => message,
        }
    }
}
