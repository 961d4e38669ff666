use crate::utils::error::{DiscoverError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DiscoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DiscoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DiscoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Composer vendor names: lowercase alphanumerics with `.`, `_` or `-` separators.
pub fn validate_vendor_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let valid = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'));

    if !valid {
        return Err(DiscoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Vendor name may only contain lowercase letters, digits, '.', '_' and '-'"
                .to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("manifest", "composer.json").is_ok());
        assert!(validate_path("manifest", "").is_err());
        assert!(validate_path("manifest", "comp\0oser.json").is_err());
    }

    #[test]
    fn test_validate_vendor_name() {
        assert!(validate_vendor_name("namespace", "drupal").is_ok());
        assert!(validate_vendor_name("namespace", "my-vendor.x_1").is_ok());
        assert!(validate_vendor_name("namespace", "").is_err());
        assert!(validate_vendor_name("namespace", "   ").is_err());
        assert!(validate_vendor_name("namespace", "drupal/core").is_err());
        assert!(validate_vendor_name("namespace", "Drupal").is_err());
    }
}
