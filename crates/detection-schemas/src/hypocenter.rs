//! Hypocenter record: an earthquake location and origin time estimate.

use chrono::{DateTime, Utc};
use detection_canonical::fields::{
    decode_required_time, read_optional_f64, read_required_group, MapWriter,
};
use detection_canonical::time::truncate_to_millis;
use detection_canonical::{ConversionError, ConversionReport, JsonMap, Record, Validator};
use serde::Deserialize;

/// JSON key for latitude.
pub const LATITUDE_KEY: &str = "Latitude";
/// JSON key for longitude.
pub const LONGITUDE_KEY: &str = "Longitude";
/// JSON key for depth.
pub const DEPTH_KEY: &str = "Depth";
/// JSON key for origin time.
pub const TIME_KEY: &str = "Time";
/// JSON key for latitude error.
pub const LATITUDE_ERROR_KEY: &str = "LatitudeError";
/// JSON key for longitude error.
pub const LONGITUDE_ERROR_KEY: &str = "LongitudeError";
/// JSON key for depth error.
pub const DEPTH_ERROR_KEY: &str = "DepthError";
/// JSON key for time error.
pub const TIME_ERROR_KEY: &str = "TimeError";

/// Every key in the Hypocenter vocabulary, required keys first.
pub const KEYS: &[&str] = &[
    LATITUDE_KEY,
    LONGITUDE_KEY,
    DEPTH_KEY,
    TIME_KEY,
    LATITUDE_ERROR_KEY,
    LONGITUDE_ERROR_KEY,
    DEPTH_ERROR_KEY,
    TIME_ERROR_KEY,
];

const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
const DEPTH_RANGE: (f64, f64) = (-100.0, 1500.0);

/// Location and origin time of a seismic event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hypocenter {
    /// Degrees, `[-90, 90]`. Required.
    pub latitude: Option<f64>,
    /// Degrees, `[-180, 180]`. Required.
    pub longitude: Option<f64>,
    /// Kilometers, `[-100, 1500]`. Required.
    pub depth: Option<f64>,
    /// Origin time, UTC. Required.
    ///
    /// The wire format carries milliseconds. [`Hypocenter::new`] truncates to
    /// that precision; a finer instant assigned here directly is truncated
    /// on serialization and will not survive a round-trip.
    pub time: Option<DateTime<Utc>>,
    /// Latitude uncertainty in degrees. Optional.
    pub latitude_error: Option<f64>,
    /// Longitude uncertainty in degrees. Optional.
    pub longitude_error: Option<f64>,
    /// Depth uncertainty in kilometers. Optional.
    pub depth_error: Option<f64>,
    /// Origin time uncertainty in seconds. Optional.
    pub time_error: Option<f64>,
}

#[derive(Deserialize)]
struct RequiredGroup<'a> {
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Depth")]
    depth: f64,
    #[serde(rename = "Time")]
    time: &'a str,
}

impl Hypocenter {
    /// Creates a hypocenter with every required field set.
    ///
    /// `time` is truncated to milliseconds.
    pub fn new(latitude: f64, longitude: f64, depth: f64, time: DateTime<Utc>) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            depth: Some(depth),
            time: Some(truncate_to_millis(time)),
            ..Self::default()
        }
    }

    /// Sets the latitude error.
    pub fn with_latitude_error(mut self, value: f64) -> Self {
        self.latitude_error = Some(value);
        self
    }

    /// Sets the longitude error.
    pub fn with_longitude_error(mut self, value: f64) -> Self {
        self.longitude_error = Some(value);
        self
    }

    /// Sets the depth error.
    pub fn with_depth_error(mut self, value: f64) -> Self {
        self.depth_error = Some(value);
        self
    }

    /// Sets the time error.
    pub fn with_time_error(mut self, value: f64) -> Self {
        self.time_error = Some(value);
        self
    }

    fn read_required(
        map: &JsonMap,
    ) -> Result<(RequiredGroup<'_>, DateTime<Utc>, Option<ConversionError>), ConversionError> {
        let group: RequiredGroup<'_> = read_required_group(map, Self::NAME)?;
        let (time, note) = decode_required_time(Self::NAME, TIME_KEY, group.time)?;
        Ok((group, time, note))
    }
}

impl Record for Hypocenter {
    const NAME: &'static str = "Hypocenter";

    fn fill_from_map(&mut self, map: &JsonMap) -> ConversionReport {
        let mut report = ConversionReport::new();

        match Self::read_required(map) {
            Ok((group, time, note)) => {
                self.latitude = Some(group.latitude);
                self.longitude = Some(group.longitude);
                self.depth = Some(group.depth);
                self.time = Some(time);
                if let Some(note) = note {
                    report.push(note);
                }
            }
            Err(err) => {
                tracing::warn!(record = Self::NAME, error = %err, "required group abandoned");
                report.push(err);
            }
        }

        read_optional_f64(map, Self::NAME, LATITUDE_ERROR_KEY, &mut self.latitude_error, &mut report);
        read_optional_f64(map, Self::NAME, LONGITUDE_ERROR_KEY, &mut self.longitude_error, &mut report);
        read_optional_f64(map, Self::NAME, DEPTH_ERROR_KEY, &mut self.depth_error, &mut report);
        read_optional_f64(map, Self::NAME, TIME_ERROR_KEY, &mut self.time_error, &mut report);

        tracing::debug!(record = Self::NAME, status = ?report.status, "populated from map");
        report
    }

    fn to_map_with_report(&self) -> (JsonMap, ConversionReport) {
        let mut writer = MapWriter::new(Self::NAME);
        writer
            .required_f64(LATITUDE_KEY, self.latitude)
            .required_f64(LONGITUDE_KEY, self.longitude)
            .required_f64(DEPTH_KEY, self.depth)
            .required_time(TIME_KEY, self.time.as_ref())
            .optional_f64(LATITUDE_ERROR_KEY, self.latitude_error)
            .optional_f64(LONGITUDE_ERROR_KEY, self.longitude_error)
            .optional_f64(DEPTH_ERROR_KEY, self.depth_error)
            .optional_f64(TIME_ERROR_KEY, self.time_error);
        writer.finish()
    }

    fn errors(&self) -> Vec<String> {
        let (lat_lo, lat_hi) = LATITUDE_RANGE;
        let (lon_lo, lon_hi) = LONGITUDE_RANGE;
        let (depth_lo, depth_hi) = DEPTH_RANGE;
        Validator::new(Self::NAME)
            .in_range(LATITUDE_KEY, self.latitude, lat_lo, lat_hi)
            .in_range(LONGITUDE_KEY, self.longitude, lon_lo, lon_hi)
            .in_range(DEPTH_KEY, self.depth, depth_lo, depth_hi)
            .present(TIME_KEY, self.time.as_ref())
            .finish()
    }
}
