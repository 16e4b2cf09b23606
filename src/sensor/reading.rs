use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::CollectError;
use crate::sensor::Capability;

/// Value stored in the extended columns of rows from basic devices, so
/// every row of the dataset has all nine columns populated.
pub const SENTINEL: f64 = -1.0;

/// JSON body returned by a sensor endpoint. `id` and `co2` are mandatory
/// for every device; the extended keys only appear on the full-package
/// device. Wire names differ from column names for the renamed fields.
#[derive(Debug, Deserialize)]
pub struct RawReport {
    pub id: i64,

    pub co2: f64,

    pub temp_0: Option<f64>,

    pub temp_1: Option<f64>,

    #[serde(rename = "hum")]
    pub humidity: Option<f64>,

    #[serde(rename = "pm1.0")]
    pub pm1_0: Option<f64>,

    #[serde(rename = "pm2.5")]
    pub pm2_5: Option<f64>,

    #[serde(rename = "pm10.0")]
    pub pm10_0: Option<f64>,
}

/// One normalized row of the `envSense` table.
#[derive(Debug, Clone)]
pub struct Reading {
    /// Assigned by the collector when the fetch completes, never taken
    /// from the device.
    pub timestamp: DateTime<Tz>,

    pub id: i64,

    pub co2: f64,

    pub temp_0: f64,

    pub temp_1: f64,

    pub humidity: f64,

    pub pm1_0: f64,

    pub pm2_5: f64,

    pub pm10_0: f64,
}

impl Reading {
    /// Normalizes a raw report according to the capability its reported id
    /// selects. A full device omitting any extended key is a per-device
    /// failure; a basic device gets the sentinel in the extended columns
    /// without its extended keys being inspected at all.
    pub fn from_report(
        report: &RawReport,
        address: &str,
        timestamp: DateTime<Tz>,
    ) -> Result<Self, CollectError> {
        match Capability::from_reported_id(report.id) {
            Capability::Full => {
                let field = |value: Option<f64>, field: &'static str| {
                    value.ok_or_else(|| CollectError::MissingField {
                        address: address.to_string(),
                        id: report.id,
                        field,
                    })
                };

                Ok(Reading {
                    timestamp,
                    id: report.id,
                    co2: report.co2,
                    temp_0: field(report.temp_0, "temp_0")?,
                    temp_1: field(report.temp_1, "temp_1")?,
                    humidity: field(report.humidity, "hum")?,
                    pm1_0: field(report.pm1_0, "pm1.0")?,
                    pm2_5: field(report.pm2_5, "pm2.5")?,
                    pm10_0: field(report.pm10_0, "pm10.0")?,
                })
            }
            Capability::Basic => Ok(Reading {
                timestamp,
                id: report.id,
                co2: report.co2,
                temp_0: SENTINEL,
                temp_1: SENTINEL,
                humidity: SENTINEL,
                pm1_0: SENTINEL,
                pm2_5: SENTINEL,
                pm10_0: SENTINEL,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn at() -> DateTime<Tz> {
        chrono_tz::UTC
            .with_ymd_and_hms(2022, 11, 21, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn full_device_keeps_extended_values_verbatim() {
        let report: RawReport = serde_json::from_str(
            r#"{"id":1,"co2":410,"temp_0":21.5,"temp_1":21.3,"hum":40.0,"pm1.0":3,"pm2.5":5,"pm10.0":9}"#,
        )
        .unwrap();

        let reading = Reading::from_report(&report, "192.168.0.7", at()).unwrap();

        assert_eq!(reading.id, 1);
        assert_eq!(reading.co2, 410.0);
        assert_eq!(reading.temp_0, 21.5);
        assert_eq!(reading.temp_1, 21.3);
        assert_eq!(reading.humidity, 40.0);
        assert_eq!(reading.pm1_0, 3.0);
        assert_eq!(reading.pm2_5, 5.0);
        assert_eq!(reading.pm10_0, 9.0);
        assert_eq!(reading.timestamp, at());
    }

    #[test]
    fn basic_device_gets_sentinels_even_when_extended_keys_present() {
        let report: RawReport =
            serde_json::from_str(r#"{"id":2,"co2":430,"temp_0":18.0,"hum":55.0}"#).unwrap();

        let reading = Reading::from_report(&report, "192.168.0.13", at()).unwrap();

        assert_eq!(reading.id, 2);
        assert_eq!(reading.co2, 430.0);
        for value in [
            reading.temp_0,
            reading.temp_1,
            reading.humidity,
            reading.pm1_0,
            reading.pm2_5,
            reading.pm10_0,
        ] {
            assert_eq!(value, SENTINEL);
        }
    }

    #[test]
    fn full_device_missing_extended_key_is_an_error() {
        let report: RawReport =
            serde_json::from_str(r#"{"id":1,"co2":410,"temp_0":21.5}"#).unwrap();

        let err = Reading::from_report(&report, "192.168.0.7", at()).unwrap_err();

        assert!(matches!(
            err,
            CollectError::MissingField {
                id: 1,
                field: "temp_1",
                ..
            }
        ));
    }

    #[test]
    fn id_and_co2_are_mandatory_in_the_wire_format() {
        assert!(serde_json::from_str::<RawReport>(r#"{"co2":430}"#).is_err());
        assert!(serde_json::from_str::<RawReport>(r#"{"id":2}"#).is_err());
    }
}
