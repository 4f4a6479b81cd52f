use crate::utils::error::{KitError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(KitError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_choice(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        })
    }
}

pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(KitError::InvalidConfigValueError {
            field: "start/end".to_string(),
            value: format!("{} > {}", start, end),
            reason: "Start date must not be after end date".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unit_cost(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(KitError::InvalidConfigValueError {
            field: "unit_cost".to_string(),
            value: value.to_string(),
            reason: "Unit cost must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(KitError::InvalidDimensionError {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}
