//! Domain error types.
//!
//! A small closed set of lookup failures shared by the catalogue, the router
//! and the request layer.

/// An entity named in a query does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No stop with this name
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// No bus line with this name
    #[error("unknown bus line: {0}")]
    UnknownBusLine(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LookupError::UnknownStop("Marushkino".into());
        assert_eq!(err.to_string(), "unknown stop: Marushkino");

        let err = LookupError::UnknownBusLine("750".into());
        assert_eq!(err.to_string(), "unknown bus line: 750");
    }
}
