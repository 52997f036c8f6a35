/// Result type for record operations.
pub type Result<T, E = RecordError> = core::result::Result<T, E>;

/// Errors raised while reading or writing a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The byte source ended before the record's declared size was read.
    #[error("truncated input: expected {expected} bytes, only {actual} available")]
    TruncatedInput { expected: usize, actual: usize },

    /// The decoded content was rejected by the record's validation hook.
    #[error("record failed validation: {0}")]
    Validation(#[from] ValidationError),

    /// The operation is not implemented for this record type.
    #[error("{operation} is not supported for {record} records")]
    Unsupported {
        operation: &'static str,
        record: &'static str,
    },

    /// The byte source failed for a reason other than running out of data.
    #[error("failed to read record bytes")]
    Io(#[from] std::io::Error),
}

/// Rejections reported by a record's validation hook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The magic marker does not match the expected value.
    #[error(
        "invalid cookie: expected \"{}\", found \"{}\"",
        expected.escape_ascii(),
        found.escape_ascii()
    )]
    InvalidCookie { expected: Vec<u8>, found: Vec<u8> },

    /// A field holds a value the record type does not accept.
    #[error("field `{field}` is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl RecordError {
    /// Whether this error reports a short byte source.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }

    /// The validation failure, if this error carries one.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_message_escapes_bytes() {
        let err = ValidationError::InvalidCookie {
            expected: b"conectix".to_vec(),
            found: b"conect\x00\xff".to_vec(),
        };
        assert_eq!(
            err.to_string(),
            r#"invalid cookie: expected "conectix", found "conect\x00\xff""#
        );
    }

    #[test]
    fn validation_is_reachable_through_record_error() {
        let err = RecordError::from(ValidationError::InvalidField {
            field: "heads",
            reason: "zero".into(),
        });
        assert!(!err.is_truncated());
        assert!(matches!(
            err.validation(),
            Some(ValidationError::InvalidField { field: "heads", .. })
        ));
    }
}
