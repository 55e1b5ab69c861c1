use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// How the store picks the id of a label created by [`add`].
///
/// [`add`]: crate::LabelStore::add
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdAllocation {
    /// One past the highest id currently in the store.
    ///
    /// Removing the label with the highest id lowers the base, so that id
    /// is handed out again by the next `add`. Hosts that keep references to
    /// removed labels may see them resurface under a new label.
    #[default]
    HighestLive,
    /// One past the highest id the store has ever held.
    ///
    /// Removed ids are never reissued.
    Monotonic,
}

/// Configuration for a [`LabelStore`](crate::LabelStore).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StoreConfig {
    /// Id allocation policy for new labels.
    pub id_allocation: IdAllocation,
}

impl StoreConfig {
    /// A configuration that never reissues a removed id.
    pub fn monotonic() -> Self {
        Self {
            id_allocation: IdAllocation::Monotonic,
        }
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> StoreResult<Self> {
        toml::from_str(source).map_err(|e| StoreError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_reuses_highest_live_id() {
        let c = StoreConfig::default();
        assert_eq!(c.id_allocation, IdAllocation::HighestLive);
    }

    #[test]
    fn parses_monotonic_from_toml() {
        let c = StoreConfig::from_toml_str("id-allocation = \"monotonic\"\n").unwrap();
        assert_eq!(c, StoreConfig::monotonic());
    }

    #[test]
    fn empty_toml_is_default() {
        let c = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(c, StoreConfig::default());
    }

    #[test]
    fn unknown_policy_is_a_config_error() {
        let err = StoreConfig::from_toml_str("id-allocation = \"random\"").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }
}
