use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocateDto {
    #[validate(required, custom(function = "validate_latitude"))]
    pub latitude: Option<f64>,
    #[validate(required, custom(function = "validate_longitude"))]
    pub longitude: Option<f64>,
}

impl LocateDto {
    /// Only meaningful after `validate` has passed.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&value) {
        return Err(ValidationError::new("validate_latitude"));
    }

    return Ok(());
}

fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    if !(-180.0..=180.0).contains(&value) {
        return Err(ValidationError::new("validate_longitude"));
    }

    return Ok(());
}
