//! Cheap structural checks run before a request is transmitted.

use crate::error::{ClassifiedError, Result};
use url::Url;

/// Require a non-empty (already trimmed) string.
pub fn require_text(value: &str, label: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ClassifiedError::validation(format!("{} is required", label)));
    }
    Ok(())
}

/// Require a persisted identifier (strictly positive).
pub fn require_id(id: i64, label: &str) -> Result<()> {
    if id <= 0 {
        return Err(ClassifiedError::validation(format!(
            "A valid {} is required",
            label
        )));
    }
    Ok(())
}

/// Require an absolute `http`/`https` URL.
pub fn require_url(value: &str, label: &str) -> Result<()> {
    require_text(value, label)?;
    optional_url(value, label)
}

/// Accept an empty string, otherwise require an absolute `http`/`https` URL.
pub fn optional_url(value: &str, label: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ClassifiedError::validation(format!(
            "{} must be a valid http(s) URL",
            label
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_require_text() {
        assert!(require_text("x", "Title").is_ok());
        let err = require_text("", "Title").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValidationError);
        assert_eq!(err.message, "Title is required");
    }

    #[test]
    fn test_require_id() {
        assert!(require_id(1, "album").is_ok());
        assert!(require_id(0, "album").is_err());
        assert!(require_id(-3, "album").is_err());
    }

    #[test]
    fn test_urls() {
        assert!(require_url("https://cdn.example.com/a.jpg", "Image URL").is_ok());
        assert!(require_url("http://localhost:8080/a.jpg", "Image URL").is_ok());
        assert!(require_url("not-a-url", "Image URL").is_err());
        assert!(require_url("ftp://example.com/a.jpg", "Image URL").is_err());
        assert!(require_url("", "Image URL").is_err());
        assert!(optional_url("", "Thumbnail URL").is_ok());
        assert!(optional_url("javascript:alert(1)", "Thumbnail URL").is_err());
    }
}
