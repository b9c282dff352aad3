//! Results view projection of a condition → probability map.

use serde::Serialize;

use crate::prediction::ProbabilityMap;

/// Format a probability in [0, 1] as a two-decimal percentage ("55.00%").
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub condition: String,
    pub probability: f64,
    /// Two-decimal percentage label
    pub percent: String,
    /// Width of the proportional bar, clamped to 0..=100
    pub bar_width: f64,
}

impl SummaryEntry {
    fn new(condition: &str, probability: f64) -> Self {
        Self {
            condition: condition.to_string(),
            probability,
            percent: format_percent(probability),
            bar_width: (probability * 100.0).clamp(0.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    /// First entry holding the highest probability
    pub most_likely: Option<SummaryEntry>,
    /// All entries, in the order the service returned them
    pub entries: Vec<SummaryEntry>,
}

impl ResultsSummary {
    /// Entries by descending probability. Equal probabilities keep their
    /// original order.
    pub fn ranked(&self) -> Vec<&SummaryEntry> {
        let mut ranked: Vec<&SummaryEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        ranked
    }
}

/// Build the summary for a probability map. Non-numeric values are skipped.
pub fn summarize(map: &ProbabilityMap) -> ResultsSummary {
    let entries: Vec<SummaryEntry> = map
        .iter()
        .filter_map(|(k, v)| v.as_f64().map(|p| SummaryEntry::new(k, p)))
        .collect();

    let highest = entries
        .iter()
        .map(|e| e.probability)
        .fold(f64::NEG_INFINITY, f64::max);

    let most_likely = entries.iter().find(|e| e.probability == highest).cloned();

    ResultsSummary { most_likely, entries }
}
