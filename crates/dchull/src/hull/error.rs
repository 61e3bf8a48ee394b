use thiserror::Error;

/// Errors reported by hull construction. All are precondition violations on the input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    #[error("invalid input: empty point set (need at least one point)")]
    Empty,

    #[error("invalid input: point {index} has non-finite coordinates ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    #[error("invalid input: point {index} is not strictly after its predecessor in (x, y) order")]
    Unsorted { index: usize },
}

impl HullError {
    /// Every variant is an invalid-input error; retrying with the same input fails again.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            HullError::Empty | HullError::NonFinite { .. } | HullError::Unsorted { .. }
        )
    }
}
