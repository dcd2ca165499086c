//! Runtime-adjustable sampling settings

use aetheria_core::{Error, Parameters};
use tracing::warn;

/// Models the settings surface offers
pub const MODEL_OPTIONS: [&str; 3] = [
    "meta-llama/Llama-Vision-Free",
    "M2-BERT-Retrieval-32k",
    "BAAI-Bge-Base-1p5",
];

/// Sampling settings a user can change between turns
///
/// Every setter validates its input and leaves the current value untouched
/// when it rejects one. Changing the model does not reset the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
}

impl Settings {
    /// Create settings from startup configuration
    ///
    /// A model that is not one of [`MODEL_OPTIONS`] is replaced with the first
    /// option.
    pub fn new(
        model: impl Into<String>,
        temperature: f32,
        max_output_tokens: u32,
        top_p: f32,
    ) -> Result<Self, Error> {
        check_unit_interval("temperature", temperature)?;
        check_unit_interval("top_p", top_p)?;
        check_max_output_tokens(max_output_tokens)?;

        let mut model = model.into();
        if !MODEL_OPTIONS.contains(&model.as_str()) {
            warn!(
                configured = %model,
                fallback = MODEL_OPTIONS[0],
                "configured model is not available, using the default"
            );
            model = MODEL_OPTIONS[0].to_string();
        }

        Ok(Self {
            model,
            temperature,
            max_output_tokens,
            top_p,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }

    pub fn top_p(&self) -> f32 {
        self.top_p
    }

    /// Switch to one of the [`MODEL_OPTIONS`]
    pub fn set_model(&mut self, model: &str) -> Result<(), Error> {
        if !MODEL_OPTIONS.contains(&model) {
            return Err(Error::Validation(format!(
                "model {} is not one of {}",
                model,
                MODEL_OPTIONS.join(", ")
            )));
        }
        self.model = model.to_string();
        Ok(())
    }

    pub fn set_temperature(&mut self, temperature: f32) -> Result<(), Error> {
        check_unit_interval("temperature", temperature)?;
        self.temperature = temperature;
        Ok(())
    }

    pub fn set_max_output_tokens(&mut self, max_output_tokens: u32) -> Result<(), Error> {
        check_max_output_tokens(max_output_tokens)?;
        self.max_output_tokens = max_output_tokens;
        Ok(())
    }

    pub fn set_top_p(&mut self, top_p: f32) -> Result<(), Error> {
        check_unit_interval("top_p", top_p)?;
        self.top_p = top_p;
        Ok(())
    }

    /// The sampling parameters sent with each completion request
    pub fn parameters(&self) -> Parameters {
        Parameters::builder()
            .max_tokens(self.max_output_tokens)
            .temperature(self.temperature)
            .top_p(self.top_p)
            .build()
    }
}

fn check_unit_interval(name: &str, value: f32) -> Result<(), Error> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )))
    }
}

fn check_max_output_tokens(value: u32) -> Result<(), Error> {
    if value >= 1 {
        Ok(())
    } else {
        Err(Error::Validation(
            "max_output_tokens must be at least 1".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings() -> Settings {
        Settings::new(MODEL_OPTIONS[0], 0.7, 512, 1.0).unwrap()
    }

    #[test]
    fn test_new_validates_ranges() {
        let model = MODEL_OPTIONS[1];
        assert!(Settings::new(model, 1.5, 512, 1.0).is_err());
        assert!(Settings::new(model, 0.5, 0, 1.0).is_err());
        assert!(Settings::new(model, 0.5, 512, -0.1).is_err());
        assert!(Settings::new(model, f32::NAN, 512, 1.0).is_err());
    }

    #[test]
    fn test_unlisted_model_falls_back_to_first_option() {
        let settings = Settings::new("gpt-4", 0.7, 512, 1.0).unwrap();
        assert_eq!(settings.model(), MODEL_OPTIONS[0]);

        let settings = Settings::new("  ", 0.7, 512, 1.0).unwrap();
        assert_eq!(settings.model(), MODEL_OPTIONS[0]);

        let settings = Settings::new(MODEL_OPTIONS[2], 0.7, 512, 1.0).unwrap();
        assert_eq!(settings.model(), MODEL_OPTIONS[2]);
    }

    #[test]
    fn test_set_model_uses_allow_list() {
        let mut settings = settings();
        settings.set_model("BAAI-Bge-Base-1p5").unwrap();
        assert_eq!(settings.model(), "BAAI-Bge-Base-1p5");

        let error = settings.set_model("gpt-4").unwrap_err();
        assert!(matches!(error, Error::Validation(_)));
        assert_eq!(settings.model(), "BAAI-Bge-Base-1p5");
    }

    #[test]
    fn test_rejected_writes_leave_values_unchanged() {
        let mut settings = settings();

        assert!(settings.set_temperature(1.01).is_err());
        assert!(settings.set_top_p(-1.0).is_err());
        assert!(settings.set_max_output_tokens(0).is_err());
        assert_eq!(settings, self::settings());

        settings.set_temperature(0.0).unwrap();
        settings.set_top_p(0.25).unwrap();
        settings.set_max_output_tokens(1).unwrap();
        assert_eq!(settings.temperature(), 0.0);
        assert_eq!(settings.top_p(), 0.25);
        assert_eq!(settings.max_output_tokens(), 1);
    }

    #[test]
    fn test_parameters() {
        let params = settings().parameters();
        assert_eq!(params.max_tokens, Some(512));
        assert_eq!(params.temperature, Some(0.7));
        assert_eq!(params.top_p, Some(1.0));
    }
}
