//! ModelSettings - Model identifier and sampling temperature

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Accepted temperature range (inclusive)
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// Options sent with every model invocation, fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawModelSettings")]
pub struct ModelSettings {
    model: String,
    temperature: f32,
}

impl ModelSettings {
    pub fn new(model: impl Into<String>, temperature: f32) -> Result<Self, DomainError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(DomainError::Validation(
                "Model identifier must not be empty".to_string(),
            ));
        }
        if !TEMPERATURE_RANGE.contains(&temperature) {
            return Err(DomainError::Validation(format!(
                "Temperature {} is outside {:?}",
                temperature, TEMPERATURE_RANGE
            )));
        }
        Ok(Self { model, temperature })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

#[derive(Deserialize)]
struct RawModelSettings {
    model: String,
    temperature: f32,
}

impl TryFrom<RawModelSettings> for ModelSettings {
    type Error = DomainError;

    fn try_from(raw: RawModelSettings) -> Result<Self, Self::Error> {
        Self::new(raw.model, raw.temperature)
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ModelSettings::default();
        assert_eq!(settings.model(), "gpt-4o-mini");
        assert_eq!(settings.temperature(), 0.3);
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        assert!(ModelSettings::new("gpt-4o-mini", -0.1).is_err());
        assert!(ModelSettings::new("gpt-4o-mini", 2.5).is_err());
        assert!(ModelSettings::new("gpt-4o-mini", f32::NAN).is_err());
        assert!(ModelSettings::new("gpt-4o-mini", 2.0).is_ok());
    }

    #[test]
    fn test_rejects_blank_model() {
        assert!(ModelSettings::new("  ", 0.5).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let settings: ModelSettings =
            serde_json::from_str(r#"{"model":"gpt-4o","temperature":0.5}"#).unwrap();
        assert_eq!(settings, ModelSettings::new("gpt-4o", 0.5).unwrap());

        assert!(serde_json::from_str::<ModelSettings>(r#"{"model":"gpt-4o","temperature":3.0}"#)
            .is_err());
        assert!(serde_json::from_str::<ModelSettings>(r#"{"model":" ","temperature":0.5}"#)
            .is_err());
    }
}
