//! Input values entered into the intake form.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::catalog::{self, Parameter};
use crate::error::MissingParameters;

/// Mapping of catalog parameter → user-entered number.
///
/// A parameter without an entry is "missing". Entries are only ever finite
/// numbers; text that fails to parse removes the entry instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputValues {
    values: HashMap<&'static str, f64>,
}

impl InputValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `param` set to `value`.
    pub fn with_value(&self, param: &Parameter, value: f64) -> Self {
        let mut next = self.clone();
        next.set(param, value);
        next
    }

    /// Return a copy with the field identified by `id` updated from raw text.
    pub fn with_raw(&self, id: &str, raw: &str) -> Self {
        let mut next = self.clone();
        next.set_raw(id, raw);
        next
    }

    pub fn set(&mut self, param: &Parameter, value: f64) {
        if value.is_finite() {
            self.values.insert(param.wire_key(), value);
        } else {
            self.values.remove(param.wire_key());
        }
    }

    /// Update a field from the text typed into it. Unknown ids are ignored
    /// and `false` is returned.
    pub fn set_raw(&mut self, id: &str, raw: &str) -> bool {
        let Some(param) = catalog::find(id) else {
            return false;
        };
        match raw.trim().parse::<f64>() {
            Ok(v) => self.set(param, v),
            Err(_) => self.clear(param),
        }
        true
    }

    pub fn clear(&mut self, param: &Parameter) {
        self.values.remove(param.wire_key());
    }

    pub fn get(&self, param: &Parameter) -> Option<f64> {
        self.values.get(param.wire_key()).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that every catalog parameter has a value.
    pub fn validate(&self) -> Result<(), MissingParameters> {
        let labels: Vec<&'static str> = catalog::parameters()
            .filter(|p| self.get(p).is_none())
            .map(|p| p.label)
            .collect();

        if labels.is_empty() {
            Ok(())
        } else {
            Err(MissingParameters { labels })
        }
    }

    /// Flat JSON object of wire key → number, in catalog order.
    pub fn to_json(&self) -> Value {
        // Serializing a map of f64 cannot fail.
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Serialize for InputValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for param in catalog::parameters() {
            if let Some(v) = self.get(param) {
                map.serialize_entry(param.wire_key(), &v)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    fn complete() -> InputValues {
        catalog::parameters()
            .enumerate()
            .fold(InputValues::new(), |acc, (i, p)| acc.with_value(p, i as f64 + 1.0))
    }

    #[test]
    fn test_empty_values_report_every_label_in_order() {
        let err = InputValues::new().validate().unwrap_err();
        assert_eq!(err.labels.len(), 24);
        assert_eq!(err.labels[0], "Glucose");
        assert_eq!(err.labels[23], "C-reactive Protein");
    }

    #[test]
    fn test_each_missing_key_is_named() {
        for param in catalog::parameters() {
            let mut values = complete();
            values.clear(param);
            let err = values.validate().unwrap_err();
            assert_eq!(err.labels, vec![param.label]);
            assert!(err.to_string().contains(param.label));
        }
    }

    #[test]
    fn test_missing_message_format() {
        let mut values = complete();
        values.clear(find("hdl").unwrap());
        values.clear(find("glucose").unwrap());
        assert_eq!(
            values.validate().unwrap_err().to_string(),
            "Please fill in all parameters. Missing: Glucose, HDL Cholesterol"
        );
    }

    #[test]
    fn test_complete_values_validate() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_unparseable_text_clears_field() {
        let values = InputValues::new().with_raw("bmi", "22.5");
        assert_eq!(values.get(find("bmi").unwrap()), Some(22.5));

        let values = values.with_raw("bmi", "");
        assert_eq!(values.get(find("bmi").unwrap()), None);

        let values = values.with_raw("bmi", "NaN");
        assert!(values.is_empty());
    }

    #[test]
    fn test_zero_is_a_value() {
        let values = InputValues::new().with_raw("troponin", "0");
        assert_eq!(values.get(find("troponin").unwrap()), Some(0.0));
    }

    #[test]
    fn test_with_value_leaves_original_untouched() {
        let before = InputValues::new();
        let after = before.with_value(find("alt").unwrap(), 30.0);
        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut values = InputValues::new();
        assert!(!values.set_raw("spleen", "4"));
        assert!(values.is_empty());
    }

    #[test]
    fn test_json_uses_label_keys() {
        let values = InputValues::new()
            .with_raw("wbc", "6.1")
            .with_raw("heartRate", "72");
        let json = values.to_json();
        assert_eq!(json["White Blood Cells"], 6.1);
        assert_eq!(json["Heart Rate"], 72.0);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
