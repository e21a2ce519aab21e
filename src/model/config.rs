//! High-level training configuration with builder pattern.
//!
//! [`TreeConfig`] collects the stopping criteria and logging options for
//! tree induction and uses the `bon` crate for builder generation with
//! validation at build time.
//!
//! # Example
//!
//! ```
//! use dtree::TreeConfig;
//! use dtree::training::Verbosity;
//!
//! // All defaults
//! let config = TreeConfig::builder().build().unwrap();
//!
//! // Customize stopping criteria
//! let config = TreeConfig::builder()
//!     .max_depth(6)
//!     .min_split_samples(20)
//!     .purity_threshold(0.9)
//!     .verbosity(Verbosity::Info)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use crate::training::{TreeParams, Verbosity};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,
    #[error("min_split_samples must be at least 2, got {0}")]
    InvalidMinSplitSamples(u32),
    #[error("purity_threshold must be in (0, 1], got {0}")]
    InvalidPurityThreshold(f64),
}

// =============================================================================
// TreeConfig
// =============================================================================

/// High-level configuration for tree training.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct TreeConfig {
    /// Depth cap: every node at this depth is a leaf. Default: 10.
    #[builder(default = 10)]
    pub max_depth: u32,

    /// Nodes with fewer records become leaves. Default: 9.
    #[builder(default = 9)]
    pub min_split_samples: u32,

    /// Nodes whose majority proportion strictly exceeds this become
    /// leaves. Default: 0.95.
    #[builder(default = 0.95)]
    pub purity_threshold: f64,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_split_samples: 9,
            purity_threshold: 0.95,
            verbosity: Verbosity::default(),
        }
    }
}

/// Custom finishing function that validates the config.
impl<S: tree_config_builder::IsComplete> TreeConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `max_depth == 0`
    /// - `min_split_samples < 2`
    /// - `purity_threshold` outside `(0, 1]`
    pub fn build(self) -> Result<TreeConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl TreeConfig {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        if self.min_split_samples < 2 {
            return Err(ConfigError::InvalidMinSplitSamples(self.min_split_samples));
        }
        if !(self.purity_threshold > 0.0 && self.purity_threshold <= 1.0) {
            return Err(ConfigError::InvalidPurityThreshold(self.purity_threshold));
        }
        Ok(())
    }

    /// Stopping criteria for the tree builder.
    pub(crate) fn tree_params(&self) -> TreeParams {
        TreeParams {
            max_depth: self.max_depth,
            min_split_samples: self.min_split_samples,
            purity_threshold: self.purity_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_criteria() {
        let config = TreeConfig::builder().build().unwrap();
        assert_eq!(config.max_depth, 10);
        assert_eq!(config.min_split_samples, 9);
        assert!((config.purity_threshold - 0.95).abs() < 1e-12);
        assert_eq!(config.verbosity, Verbosity::Silent);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = TreeConfig::builder()
            .max_depth(3)
            .min_split_samples(4)
            .purity_threshold(0.8)
            .build()
            .unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.min_split_samples, 4);
        assert!((config.purity_threshold - 0.8).abs() < 1e-12);
    }

    #[test]
    fn rejects_invalid_parameters() {
        let err = TreeConfig::builder().max_depth(0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidMaxDepth);

        let err = TreeConfig::builder().min_split_samples(1).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidMinSplitSamples(1));

        let err = TreeConfig::builder().purity_threshold(0.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidPurityThreshold(0.0));

        let err = TreeConfig::builder().purity_threshold(1.5).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidPurityThreshold(1.5));
    }
}
