//! Configuration for field inference

use serde::{Deserialize, Serialize};

/// Configuration for one table's inference pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Field names whose string values are embedded JSON documents to be
    /// parsed and flattened into the parent record's field namespace
    pub unpack_fields: Vec<String>,

    /// Maximum number of rows to sample (0 = all)
    pub sample_size: usize,
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for [`InferenceConfig`]
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Add a single unpack field
    pub fn unpack_field(mut self, field: impl Into<String>) -> Self {
        self.config.unpack_fields.push(field.into());
        self
    }

    /// Replace the unpack field list
    pub fn unpack_fields(mut self, fields: Vec<String>) -> Self {
        self.config.unpack_fields = fields;
        self
    }

    /// Set the sample size (0 = all rows)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert!(config.unpack_fields.is_empty());
        assert_eq!(config.sample_size, 0);
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .unpack_field("V")
            .unpack_field("payload")
            .sample_size(100)
            .build();

        assert_eq!(config.unpack_fields, vec!["V", "payload"]);
        assert_eq!(config.sample_size, 100);
    }
}
