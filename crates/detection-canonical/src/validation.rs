use crate::record::Record;

/// Accumulates validation messages for one record.
///
/// Every check appends and returns; nothing short-circuits. A range or
/// emptiness check on an absent field reports only the absence.
#[derive(Debug)]
pub struct Validator {
    record: &'static str,
    errors: Vec<String>,
}

impl Validator {
    /// Starts an empty error list for `record`.
    pub fn new(record: &'static str) -> Self {
        Self {
            record,
            errors: Vec::new(),
        }
    }

    /// Requires the field to be present.
    pub fn present<T>(&mut self, field: &str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.missing(field);
        }
        self
    }

    /// Requires the field to be present and within `[lo, hi]` (inclusive).
    pub fn in_range(&mut self, field: &str, value: Option<f64>, lo: f64, hi: f64) -> &mut Self {
        match value {
            None => self.missing(field),
            Some(number) if !(lo..=hi).contains(&number) => {
                self.errors.push(format!(
                    "{field} in {} Class not in the range of {lo} to {hi}.",
                    self.record
                ));
            }
            Some(_) => {}
        }
        self
    }

    /// Requires the field to be present and non-empty.
    pub fn non_empty(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value {
            None => self.missing(field),
            Some("") => self.empty(field),
            Some(_) => {}
        }
        self
    }

    /// Requires a discriminator field to equal its fixed literal.
    pub fn literal(&mut self, field: &str, value: Option<&str>, expected: &str) -> &mut Self {
        match value {
            None => self.missing(field),
            Some("") => self.empty(field),
            Some(found) if found != expected => {
                self.errors
                    .push(format!("Non-{expected} {field} in {} Class.", self.record));
            }
            Some(_) => {}
        }
        self
    }

    /// Requires an embedded record to be present and valid.
    pub fn nested<R: Record>(&mut self, field: &str, value: Option<&R>) -> &mut Self {
        match value {
            None => self.missing(field),
            Some(nested) if !nested.is_valid() => {
                self.errors
                    .push(format!("Invalid {field} in {} Class.", self.record));
            }
            Some(_) => {}
        }
        self
    }

    /// Returns the accumulated messages.
    pub fn finish(&mut self) -> Vec<String> {
        std::mem::take(&mut self.errors)
    }

    fn missing(&mut self, field: &str) {
        self.errors
            .push(format!("No {field} in {} Class.", self.record));
    }

    fn empty(&mut self, field: &str) {
        self.errors
            .push(format!("Empty {field} in {} Class.", self.record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        let errors = Validator::new("Hypocenter")
            .in_range("Latitude", Some(-90.0), -90.0, 90.0)
            .in_range("Latitude", Some(90.0), -90.0, 90.0)
            .finish();
        assert!(errors.is_empty());
    }

    #[test]
    fn range_message_formats_whole_bounds_without_decimals() {
        let errors = Validator::new("Hypocenter")
            .in_range("Depth", Some(1500.5), -100.0, 1500.0)
            .finish();
        assert_eq!(
            errors,
            vec!["Depth in Hypocenter Class not in the range of -100 to 1500.".to_string()]
        );
    }

    #[test]
    fn absent_field_skips_range_check() {
        let errors = Validator::new("Hypocenter")
            .in_range("Latitude", None, -90.0, 90.0)
            .finish();
        assert_eq!(errors, vec!["No Latitude in Hypocenter Class.".to_string()]);
    }

    #[test]
    fn nan_is_out_of_range() {
        let errors = Validator::new("Hypocenter")
            .in_range("Longitude", Some(f64::NAN), -180.0, 180.0)
            .finish();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn literal_distinguishes_absent_empty_and_wrong() {
        let errors = Validator::new("Retract")
            .literal("Type", None, "Retract")
            .literal("Type", Some(""), "Retract")
            .literal("Type", Some("Evacuate"), "Retract")
            .literal("Type", Some("Retract"), "Retract")
            .finish();
        assert_eq!(
            errors,
            vec![
                "No Type in Retract Class.".to_string(),
                "Empty Type in Retract Class.".to_string(),
                "Non-Retract Type in Retract Class.".to_string(),
            ]
        );
    }
}
