//! Static catalog of the health parameters collected by the intake form.
//!
//! The prediction service looks features up by their display names, so a
//! parameter's label doubles as its key in the JSON payload. The `id` is only
//! used for HTML form fields.

use serde::Serialize;

/// A single numeric field of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Stable form-field identifier (e.g. "wbc")
    pub id: &'static str,
    /// Display label, also the payload key (e.g. "White Blood Cells")
    pub label: &'static str,
    /// Unit shown next to the label
    pub unit: &'static str,
}

impl Parameter {
    const fn new(id: &'static str, label: &'static str, unit: &'static str) -> Self {
        Self { id, label, unit }
    }

    /// Key under which this parameter is sent to the prediction service.
    pub fn wire_key(&self) -> &'static str {
        self.label
    }
}

/// A titled category of parameters, rendered as one form section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParameterGroup {
    pub title: &'static str,
    pub parameters: &'static [Parameter],
}

pub static CATALOG: &[ParameterGroup] = &[
    ParameterGroup {
        title: "Blood Tests",
        parameters: &[
            Parameter::new("glucose", "Glucose", "mg/dL"),
            Parameter::new("cholesterol", "Cholesterol", "mg/dL"),
            Parameter::new("hemoglobin", "Hemoglobin", "g/dL"),
            Parameter::new("platelets", "Platelets", "K/µL"),
            Parameter::new("wbc", "White Blood Cells", "K/µL"),
            Parameter::new("rbc", "Red Blood Cells", "M/µL"),
            Parameter::new("hematocrit", "Hematocrit", "%"),
            Parameter::new("mcv", "Mean Corpuscular Volume", "fL"),
            Parameter::new("mch", "Mean Corpuscular Hemoglobin", "pg"),
            Parameter::new("mchc", "Mean Corpuscular Hemoglobin Concentration", "g/dL"),
        ],
    },
    ParameterGroup {
        title: "Metabolic Parameters",
        parameters: &[
            Parameter::new("insulin", "Insulin", "µU/mL"),
            Parameter::new("bmi", "BMI", "kg/m²"),
            Parameter::new("systolic", "Systolic Blood Pressure", "mmHg"),
            Parameter::new("diastolic", "Diastolic Blood Pressure", "mmHg"),
            Parameter::new("triglycerides", "Triglycerides", "mg/dL"),
            Parameter::new("hba1c", "HbA1c", "%"),
        ],
    },
    ParameterGroup {
        title: "Lipids & Enzymes",
        parameters: &[
            Parameter::new("ldl", "LDL Cholesterol", "mg/dL"),
            Parameter::new("hdl", "HDL Cholesterol", "mg/dL"),
            Parameter::new("alt", "ALT", "U/L"),
            Parameter::new("ast", "AST", "U/L"),
        ],
    },
    ParameterGroup {
        title: "Other Parameters",
        parameters: &[
            Parameter::new("heartRate", "Heart Rate", "bpm"),
            Parameter::new("creatinine", "Creatinine", "mg/dL"),
            Parameter::new("troponin", "Troponin", "ng/mL"),
            Parameter::new("crp", "C-reactive Protein", "mg/L"),
        ],
    },
];

/// All parameters in catalog order.
pub fn parameters() -> impl Iterator<Item = &'static Parameter> {
    CATALOG.iter().flat_map(|group| group.parameters.iter())
}

/// Look up a parameter by its form-field id.
pub fn find(id: &str) -> Option<&'static Parameter> {
    parameters().find(|p| p.id == id)
}
