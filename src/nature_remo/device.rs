use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One entry of `GET /1/devices`.
///
/// Only `name` and `newest_events` are required; everything else is decoded
/// when present so the full payload can be inspected in logs.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub name: String,

    pub id: Option<String>,

    pub created_at: Option<DateTime<FixedOffset>>,

    pub updated_at: Option<DateTime<FixedOffset>>,

    pub mac_address: Option<String>,

    pub serial_number: Option<String>,

    pub firmware_version: Option<String>,

    pub temperature_offset: Option<i32>,

    pub humidity_offset: Option<i32>,

    #[serde(default)]
    pub users: Vec<User>,

    pub newest_events: NewestEvents,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,

    pub nickname: String,

    #[serde(default)]
    pub superuser: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewestEvents {
    /// Humidity, percent.
    pub hu: SensorEvent<i32>,

    /// Illuminance.
    pub il: SensorEvent<f64>,

    /// Temperature, celsius.
    pub te: SensorEvent<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SensorEvent<T> {
    pub val: T,

    pub created_at: DateTime<FixedOffset>,
}
