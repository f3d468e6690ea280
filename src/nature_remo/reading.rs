use reqwest::StatusCode;

use crate::error::{CollectError, Result};
use crate::nature_remo::{Device, SensorEvent};

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Latest readings of a single device, as reported upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceReading {
    pub name: String,

    pub humidity: SensorEvent<i32>,

    pub illuminance: SensorEvent<f64>,

    pub temperature: SensorEvent<f64>,
}

impl From<Device> for DeviceReading {
    fn from(device: Device) -> Self {
        Self {
            name: device.name,
            humidity: device.newest_events.hu,
            illuminance: device.newest_events.il,
            temperature: device.newest_events.te,
        }
    }
}

pub fn decode_devices(status: StatusCode, body: &[u8]) -> Result<Vec<Device>> {
    if !status.is_success() {
        let body: String = String::from_utf8_lossy(body)
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        return Err(CollectError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_slice(body).map_err(CollectError::Parse)
}

pub fn first_device_reading(devices: Vec<Device>) -> Result<DeviceReading> {
    let Some(device) = devices.into_iter().next() else {
        return Err(CollectError::NoDevice);
    };

    Ok(device.into())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    const REMO_1: &str = r#"[{"name":"Remo-1","newest_events":{"hu":{"val":45,"created_at":"2023-01-01T00:00:00Z"},"il":{"val":120.5,"created_at":"2023-01-01T00:00:00Z"},"te":{"val":21.3,"created_at":"2023-01-01T00:00:00Z"}}}]"#;

    #[test]
    fn decodes_first_device() {
        let devices = decode_devices(StatusCode::OK, REMO_1.as_bytes()).unwrap();
        let reading = first_device_reading(devices).unwrap();

        assert_eq!(reading.name, "Remo-1");
        assert_eq!(reading.humidity.val, 45);
        assert_eq!(reading.illuminance.val, 120.5);
        assert_eq!(reading.temperature.val, 21.3);
        assert_eq!(
            reading.humidity.created_at,
            DateTime::parse_from_rfc3339("2023-01-01T00:00:00Z").unwrap()
        );
    }

    #[test]
    fn uses_only_the_first_device() {
        let body = r#"[
            {"name":"Living","newest_events":{"hu":{"val":40,"created_at":"2023-01-01T00:00:00Z"},"il":{"val":1.0,"created_at":"2023-01-01T00:00:00Z"},"te":{"val":20.0,"created_at":"2023-01-01T00:00:00Z"}}},
            {"name":"Bedroom","newest_events":{"hu":{"val":60,"created_at":"2023-01-01T00:00:00Z"},"il":{"val":2.0,"created_at":"2023-01-01T00:00:00Z"},"te":{"val":18.0,"created_at":"2023-01-01T00:00:00Z"}}}
        ]"#;

        let devices = decode_devices(StatusCode::OK, body.as_bytes()).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(first_device_reading(devices).unwrap().name, "Living");
    }

    #[test]
    fn decodes_full_device_payload() {
        let body = r#"[{
            "name": "Remo",
            "id": "d2b8b9a0-0000-0000-0000-000000000000",
            "created_at": "2020-05-01T10:00:00Z",
            "updated_at": "2020-05-02T10:00:00Z",
            "mac_address": "aa:bb:cc:dd:ee:ff",
            "serial_number": "1W000000000000",
            "firmware_version": "Remo/1.0.77-g808448c",
            "temperature_offset": 0,
            "humidity_offset": 0,
            "users": [{"id": "u1", "nickname": "koyashiro", "superuser": true}],
            "newest_events": {
                "hu": {"val": 52, "created_at": "2023-06-01T03:04:05Z"},
                "il": {"val": 88, "created_at": "2023-06-01T03:04:05Z"},
                "te": {"val": 26.1, "created_at": "2023-06-01T03:04:05Z"}
            }
        }]"#;

        let devices = decode_devices(StatusCode::OK, body.as_bytes()).unwrap();
        let device = &devices[0];
        assert_eq!(device.mac_address.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
        assert_eq!(device.users.len(), 1);
        assert!(device.users[0].superuser);
        assert_eq!(device.newest_events.il.val, 88.0);
    }

    #[test]
    fn empty_device_list_is_an_explicit_error() {
        let devices = decode_devices(StatusCode::OK, b"[]").unwrap();
        assert!(matches!(
            first_device_reading(devices),
            Err(CollectError::NoDevice)
        ));
    }

    #[test]
    fn non_success_status_is_upstream_error() {
        let err = decode_devices(StatusCode::UNAUTHORIZED, br#"{"code":401001}"#).unwrap_err();
        match err {
            CollectError::Upstream { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, r#"{"code":401001}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn upstream_error_body_is_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS * 2);
        let err = decode_devices(StatusCode::BAD_GATEWAY, body.as_bytes()).unwrap_err();
        assert!(
            matches!(err, CollectError::Upstream { body, .. } if body.len() == MAX_ERROR_BODY_CHARS)
        );
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = decode_devices(StatusCode::OK, b"<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, CollectError::Parse(_)));
    }

    #[test]
    fn missing_sensor_is_parse_error() {
        let body = r#"[{"name":"Remo mini","newest_events":{"te":{"val":21.0,"created_at":"2023-01-01T00:00:00Z"}}}]"#;
        let err = decode_devices(StatusCode::OK, body.as_bytes()).unwrap_err();
        assert!(matches!(err, CollectError::Parse(_)));
    }
}
