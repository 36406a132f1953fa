use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// Display settings for the board, stored in settings.yaml.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoardSettings {
    /// Month/weekday table tag ("it" or "en").
    pub locale: String,
    pub currency: String,
    /// Day span used by `show --from` when no --days count is given.
    pub default_days: u64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        BoardSettings {
            locale: "it".to_string(),
            currency: "€".to_string(),
            default_days: 14,
        }
    }
}

impl Persistable for BoardSettings {
    fn filename() -> &'static str {
        "settings.yaml"
    }
    fn is_json() -> bool {
        false
    }
}
