//! Label set attached to every exported air-quality series

use std::sync::Arc;

use crate::awair::DeviceConfig;

/// Ordered `(name, value)` label pairs as encoded by `prometheus-client`
pub type LabelPairs = Vec<(String, String)>;

/// Device identity labels, fixed for the lifetime of the process
///
/// Built once at startup and shared read-only by every poll tick. An empty
/// set means the series are exported without labels.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct DeviceLabels {
    pairs: Arc<LabelPairs>,
}

impl DeviceLabels {
    /// The empty label set
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// `device_uuid` and `ip` taken from the device configuration
    #[must_use]
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self::from_pairs(vec![
            ("device_uuid".to_string(), config.device_uuid.clone()),
            ("ip".to_string(), config.ip.clone()),
        ])
    }

    #[must_use]
    pub fn from_pairs(pairs: LabelPairs) -> Self {
        Self {
            pairs: Arc::new(pairs),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value of the label called `name`, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn pairs(&self) -> &LabelPairs {
        &self.pairs
    }
}
