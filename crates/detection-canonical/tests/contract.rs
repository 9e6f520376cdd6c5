use detection_canonical::fields::{read_optional_f64, read_required_group, MapWriter};
use detection_canonical::{
    ConversionError, ConversionReport, ConversionStatus, JsonMap, Record, Validator,
};
use serde::Deserialize;
use serde_json::json;

/// Minimal record used to exercise the provided trait methods.
#[derive(Debug, Clone, Default, PartialEq)]
struct Gauge {
    name: Option<String>,
    weight: Option<f64>,
}

#[derive(Deserialize)]
struct GaugeRequired {
    #[serde(rename = "Name")]
    name: String,
}

impl Record for Gauge {
    const NAME: &'static str = "Gauge";

    fn fill_from_map(&mut self, map: &JsonMap) -> ConversionReport {
        let mut report = ConversionReport::new();
        match read_required_group::<GaugeRequired>(map, Self::NAME) {
            Ok(group) => self.name = Some(group.name),
            Err(err) => report.push(err),
        }
        read_optional_f64(map, Self::NAME, "Weight", &mut self.weight, &mut report);
        report
    }

    fn to_map_with_report(&self) -> (JsonMap, ConversionReport) {
        let mut writer = MapWriter::new(Self::NAME);
        writer
            .required_str("Name", self.name.as_deref())
            .optional_f64("Weight", self.weight);
        writer.finish()
    }

    fn errors(&self) -> Vec<String> {
        Validator::new(Self::NAME)
            .non_empty("Name", self.name.as_deref())
            .finish()
    }
}

#[test]
fn malformed_json_is_reported_not_raised() {
    let mut gauge = Gauge::default();
    let report = gauge.fill_from_json("{\"Name\": ");
    assert!(report.is_invalid());
    assert!(matches!(
        report.diagnostics[0],
        ConversionError::InvalidJson { record: "Gauge", .. }
    ));
    assert_eq!(gauge, Gauge::default());
}

#[test]
fn non_object_json_is_reported() {
    let (gauge, report) = Gauge::from_json("[1, 2, 3]");
    assert_eq!(
        report.diagnostics,
        vec![ConversionError::NotAnObject {
            record: "Gauge",
            found: "array"
        }]
    );
    assert_eq!(gauge, Gauge::default());
}

#[test]
fn optional_fields_survive_a_failed_required_group() {
    let (gauge, report) = Gauge::from_json(r#"{"Weight": 3.5}"#);
    assert_eq!(report.status, ConversionStatus::Invalid);
    assert_eq!(gauge.name, None);
    assert_eq!(gauge.weight, Some(3.5));
    assert_eq!(gauge.errors(), vec!["No Name in Gauge Class.".to_string()]);
}

#[test]
fn json_text_round_trips() {
    let gauge = Gauge {
        name: Some("north".into()),
        weight: Some(0.0),
    };
    let text = gauge.to_json_string();
    let (parsed, report) = Gauge::from_json(&text);
    assert!(report.is_ok());
    assert_eq!(parsed, gauge);
    assert!(parsed.is_valid());
}

#[test]
fn to_map_is_idempotent_and_preserves_absence() {
    let gauge = Gauge {
        name: Some("".into()),
        weight: None,
    };
    let first = gauge.to_map();
    let second = gauge.to_map();
    assert_eq!(first, second);
    assert_eq!(json!(first), json!({"Name": ""}));
    assert!(!gauge.is_valid());
}
