use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::CollectorConfig;
use crate::db::RoomConditionStore;
use crate::error::Result;
use crate::nature_remo::DeviceSource;
use crate::room_condition::RoomCondition;

/// Result handed back to whatever triggered the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationStatus {
    #[serde(rename = "ExitCode")]
    pub exit_code: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvocationStatus {
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

pub struct Collector<D, S> {
    config: CollectorConfig,
    source: D,
    store: S,
}

impl<D, S> Collector<D, S>
where
    D: DeviceSource,
    S: RoomConditionStore,
{
    pub fn new(config: CollectorConfig, source: D, store: S) -> Self {
        Self {
            config,
            source,
            store,
        }
    }

    /// Fetches, flattens and stores one reading, stopping at the first failure.
    pub async fn collect(&self, now: DateTime<Utc>) -> Result<RoomCondition> {
        let reading = self.source.latest_reading(self.config.access_key()).await?;

        let room_condition =
            RoomCondition::from_reading(Uuid::now_v7(), &reading, now, self.config.timezone());

        self.store.put(&room_condition).await?;

        Ok(room_condition)
    }

    pub async fn invoke(&self) -> InvocationStatus {
        match self.collect(Utc::now()).await {
            Ok(room_condition) => {
                info!(
                    id = %room_condition.id,
                    device = %room_condition.device_name,
                    humid = room_condition.humid,
                    illuminance = room_condition.illuminance,
                    temperature = room_condition.temperature,
                    "collected room condition"
                );
                InvocationStatus::success()
            }
            Err(e) => {
                let message = e.to_string();
                let e = anyhow::Error::from(e);
                error!("failed to collect room condition: {e:#}");
                InvocationStatus::failure(message)
            }
        }
    }
}
