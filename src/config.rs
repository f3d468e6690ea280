use chrono_tz::Tz;

use crate::error::{CollectError, Result};

pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Everything one invocation needs, resolved once at startup.
///
/// Only constructible through [`CollectorConfig::new`], so a config always
/// carries a non-empty access key.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    access_key: String,

    timezone: Tz,
}

impl CollectorConfig {
    pub fn new(access_key: impl Into<String>, timezone: Tz) -> Result<Self> {
        let access_key = access_key.into();
        if access_key.trim().is_empty() {
            return Err(CollectError::Configuration(
                "no ACCESS_KEY provided for Nature Remo".to_string(),
            ));
        }

        Ok(Self {
            access_key,
            timezone,
        })
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}
