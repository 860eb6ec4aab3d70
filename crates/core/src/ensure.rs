//! Argument checks run before a request is built.

use crate::error::{Error, Result};

/// Reject an empty or whitespace-only string argument
pub fn not_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(name.to_string()));
    }
    Ok(())
}

/// Reject an empty list argument
pub fn not_empty_slice<T>(values: &[T], name: &str) -> Result<()> {
    if values.is_empty() {
        return Err(Error::InvalidArgument(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_accepts_value() {
        assert!(not_empty("c1f47d9c", "projectId").is_ok());
    }

    #[test]
    fn test_not_empty_rejects_blank() {
        let err = not_empty("", "projectId").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref name) if name == "projectId"));

        assert!(not_empty("   ", "templateId").is_err());
    }

    #[test]
    fn test_not_empty_slice() {
        assert!(not_empty_slice(&["a"], "languageFileIds").is_ok());

        let empty: [String; 0] = [];
        let err = not_empty_slice(&empty, "languageFileIds").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref name) if name == "languageFileIds"));
    }
}
