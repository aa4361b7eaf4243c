//! Session state configuration

use serde::Deserialize;

use crate::domain::conversation::SessionScope;

use super::error::ValidationError;

/// Session store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// `conversation` keeps one slot per chat, `global` shares one slot
    #[serde(default)]
    pub scope: SessionScope,

    /// Maximum number of conversations remembered
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 {
            return Err(ValidationError::InvalidSessionCapacity);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scope: SessionScope::default(),
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    1000
}
