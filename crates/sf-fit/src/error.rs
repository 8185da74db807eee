//! Error types for the fit stage.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error("Input mismatch: {x_len} x values but {y_len} y values")]
    InputMismatch { x_len: usize, y_len: usize },

    #[error("Insufficient data: {what}")]
    InsufficientData { what: String },

    #[error("Invalid fit configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type FitResult<T> = Result<T, FitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_lengths() {
        let e = FitError::InputMismatch { x_len: 2, y_len: 3 };
        let msg = e.to_string();
        assert!(msg.contains('2') && msg.contains('3'));
    }
}
