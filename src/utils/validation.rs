use crate::utils::error::{BillingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Trims the value and rejects empty/whitespace-only input, returning the
/// trimmed form for storage.
pub fn require_non_empty(field_name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BillingError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

pub fn require_count(field_name: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| BillingError::OutOfRange {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Value must be a non-negative whole number".to_string(),
    })
}

pub fn require_amount(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(BillingError::OutOfRange {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Amount must be a finite, non-negative number".to_string(),
        });
    }
    Ok(value)
}

pub fn require_extension(field_name: &str, path: &str, extension: &str) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) if ext == extension => Ok(()),
        Some(ext) => Err(BillingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Unsupported file extension: {}. Expected: {}", ext, extension),
        }),
        None => Err(BillingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn require_non_empty_config(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BillingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
