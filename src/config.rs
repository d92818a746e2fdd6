//! Configuration for graph elements and the spaces that own them

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Element configuration
///
/// Defaults give a pure try-acquire guard (no waiting at all) and a small
/// property capacity reserved on the first write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementConfig {
    /// Bounded wait for guard acquisition in microseconds (0 = never wait)
    pub lock_timeout_micros: u64,
    /// Slots reserved when a property store is first allocated
    pub initial_property_capacity: usize,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            lock_timeout_micros: 0,
            initial_property_capacity: 4,
        }
    }
}

impl ElementConfig {
    /// Parse from JSON; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn lock_timeout(&self) -> Duration {
        Duration::from_micros(self.lock_timeout_micros)
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout_micros = u64::try_from(timeout.as_micros()).unwrap_or(u64::MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ElementConfig::default();
        assert_eq!(config.lock_timeout(), Duration::ZERO);
        assert_eq!(config.initial_property_capacity, 4);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ElementConfig::from_json_str(r#"{"lock_timeout_micros": 250}"#).unwrap();
        assert_eq!(config.lock_timeout(), Duration::from_micros(250));
        assert_eq!(config.initial_property_capacity, 4);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(ElementConfig::from_json_str(r#"{"lock_timeout_micros": "soon"}"#).is_err());
    }

    #[test]
    fn test_with_lock_timeout() {
        let config = ElementConfig::default().with_lock_timeout(Duration::from_millis(2));
        assert_eq!(config.lock_timeout_micros, 2000);
    }
}
