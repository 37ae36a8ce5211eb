//! Error types for dataset construction, training and rendering.

use std::fmt;

/// Result type alias for perceptron operations
pub type PlaResult<T> = Result<T, PlaError>;

/// Error type for perceptron operations
#[derive(Debug, Clone, PartialEq)]
pub enum PlaError {
    /// Dataset, weight vector or row count doesn't have a usable shape
    InvalidInputShape { reason : String },

    /// A bounded training run used up its update budget before converging
    DidNotConverge { updates : usize },

    /// A zero weight component makes the drawn decision boundary undefined
    DegenerateBoundary { component : usize },

    /// The rendering backend failed
    Render(String),
}

impl PlaError {
    pub fn invalid_shape<S : Into<String>>(reason : S) -> PlaError {
        PlaError::InvalidInputShape {
            reason : reason.into()
        }
    }
}

impl fmt::Display for PlaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaError::InvalidInputShape { reason } => {
                write!(f, "Invalid input shape: {}", reason)
            }
            PlaError::DidNotConverge { updates } => {
                write!(
                    f,
                    "Perceptron did not converge within {} updates; the data may not be linearly separable",
                    updates
                )
            }
            PlaError::DegenerateBoundary { component } => {
                write!(
                    f,
                    "Degenerate decision boundary: weight component {} is zero",
                    component
                )
            }
            PlaError::Render(message) => write!(f, "Rendering failed: {}", message),
        }
    }
}

impl std::error::Error for PlaError {}

///Renderers report through `anyhow`. Errors which started out as a [`PlaError`]
///are recovered as such, everything else becomes [`PlaError::Render`].
impl From<anyhow::Error> for PlaError {
    fn from(err : anyhow::Error) -> PlaError {
        match err.downcast::<PlaError>() {
            Ok(pla_err) => pla_err,
            Err(other) => PlaError::Render(format!("{:#}", other))
        }
    }
}
