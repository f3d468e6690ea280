use chrono::{DateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::nature_remo::DeviceReading;

/// One poll of the device, flattened for storage.
///
/// Every timestamp is held in the collector's configured zone and serialized
/// as RFC 3339 with seconds precision, e.g. `2023-01-01T09:00:00+09:00`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomCondition {
    pub id: Uuid,

    #[serde(rename = "device_names")]
    pub device_name: String,

    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Tz>,

    pub humid: i32,

    #[serde(serialize_with = "serialize_timestamp")]
    pub humid_created_at: DateTime<Tz>,

    pub illuminance: f64,

    #[serde(serialize_with = "serialize_timestamp")]
    pub illuminance_created_at: DateTime<Tz>,

    pub temperature: f64,

    #[serde(serialize_with = "serialize_timestamp")]
    pub temperature_created_at: DateTime<Tz>,
}

impl RoomCondition {
    pub fn from_reading<Z: TimeZone>(
        id: Uuid,
        reading: &DeviceReading,
        now: DateTime<Z>,
        timezone: Tz,
    ) -> Self {
        Self {
            id,
            device_name: reading.name.clone(),
            created_at: now.with_timezone(&timezone),
            humid: reading.humidity.val,
            humid_created_at: reading.humidity.created_at.with_timezone(&timezone),
            illuminance: reading.illuminance.val,
            illuminance_created_at: reading.illuminance.created_at.with_timezone(&timezone),
            temperature: reading.temperature.val,
            temperature_created_at: reading.temperature.created_at.with_timezone(&timezone),
        }
    }
}

pub fn format_timestamp(at: &DateTime<Tz>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn serialize_timestamp<S: Serializer>(at: &DateTime<Tz>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(at))
}
