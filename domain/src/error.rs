//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("index {index} is out of range (quiz has {len} question(s))")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid quiz JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DomainError {
    /// Check whether this error indicates an invalid index.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DomainError::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let error = DomainError::OutOfRange { index: 3, len: 2 };
        assert_eq!(
            error.to_string(),
            "index 3 is out of range (quiz has 2 question(s))"
        );
    }

    #[test]
    fn out_of_range_check() {
        assert!(DomainError::OutOfRange { index: 0, len: 0 }.is_out_of_range());
        let parse = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
        assert!(!DomainError::Json(parse).is_out_of_range());
    }
}
