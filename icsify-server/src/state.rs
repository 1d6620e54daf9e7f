use std::sync::Arc;

use icsify_core::config::{IcsifyConfig, is_known_timezone};
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    config: Arc<IcsifyConfig>,
}

impl AppState {
    pub fn new(config: IcsifyConfig) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }

    /// The timezone a request asked for, else the configured default.
    pub fn timezone_for(&self, requested: Option<&str>) -> String {
        let timezone = match requested.map(str::trim).filter(|tz| !tz.is_empty()) {
            Some(tz) => tz.to_string(),
            None => self.config.timezone(),
        };

        if !is_known_timezone(&timezone) {
            warn!(timezone = %timezone, "Unknown timezone, writing it as given");
        }

        timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_timezone_wins() {
        let state = AppState::new(IcsifyConfig {
            default_timezone: Some("Europe/Berlin".to_string()),
            ..Default::default()
        });

        assert_eq!(state.timezone_for(Some("Asia/Tokyo")), "Asia/Tokyo");
        assert_eq!(state.timezone_for(Some("  ")), "Europe/Berlin");
        assert_eq!(state.timezone_for(None), "Europe/Berlin");
    }
}
