//! Configuration for the transform pipeline.
//!
//! Provides the options structure consumed by [`RowTransformer`] along with
//! defaults and validation. Options are assembled from CLI arguments; there
//! is deliberately no configuration-file layer for a surface this small.
//!
//! [`RowTransformer`]: crate::app::services::transformer::RowTransformer

use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Characters that can never act as a field delimiter because they occur
/// inside the timestamp or coordinate fields themselves.
const RESERVED_DELIMITERS: &[char] = &[' ', ':', '-', '+', '.', '"'];

/// Options controlling the per-row transform pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Field delimiter used for both input splitting and output joining
    pub delimiter: char,

    /// Abort on the first row that would degrade instead of emitting it
    /// with empty trailing fields
    pub fail_fast: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            fail_fast: false,
        }
    }
}

impl TransformOptions {
    /// Validate the options for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }

        if self.delimiter.is_ascii_alphanumeric() {
            return Err(Error::configuration(format!(
                "Delimiter '{}' would collide with field content",
                self.delimiter
            )));
        }

        if RESERVED_DELIMITERS.contains(&self.delimiter) {
            return Err(Error::configuration(format!(
                "Delimiter '{}' occurs inside timestamp or coordinate fields",
                self.delimiter
            )));
        }

        Ok(())
    }
}
