use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// Outcome of running one model. Every configured model yields exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Success {
        model_name: String,
        classification: Classification,
    },
    Failure {
        model_name: String,
        detail: String,
    },
}

impl PredictionResult {
    pub fn model_name(&self) -> &str {
        match self {
            PredictionResult::Success { model_name, .. }
            | PredictionResult::Failure { model_name, .. } => model_name,
        }
    }

    pub fn confidence(&self) -> Option<f32> {
        match self {
            PredictionResult::Success { classification, .. } => Some(classification.confidence),
            PredictionResult::Failure { .. } => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PredictionResult::Success { classification, .. } => &classification.label,
            PredictionResult::Failure { .. } => "Error",
        }
    }
}

/// Higher confidence first, failures last. Failures compare equal to each
/// other so a stable sort keeps their configured order.
fn by_confidence_descending(a: &PredictionResult, b: &PredictionResult) -> Ordering {
    match (a.confidence(), b.confidence()) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedReport {
    results: Vec<PredictionResult>,
}

impl RankedReport {
    pub fn new(mut results: Vec<PredictionResult>) -> Self {
        results.sort_by(by_confidence_descending);
        Self { results }
    }

    pub fn results(&self) -> &[PredictionResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn top(&self) -> Option<&PredictionResult> {
        self.results.first()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.results.iter().map(ReportRow::from).collect()
    }

    pub fn summary(&self, threshold: f32) -> Summary {
        match self.top() {
            None => Summary {
                text: "No prediction available.".to_string(),
                tone: Tone::Negative,
            },
            Some(PredictionResult::Success { classification, .. }) => Summary {
                text: format!(
                    "Predicted Letter: {} (Confidence: {:.4})",
                    classification.label, classification.confidence
                ),
                tone: if classification.confidence > threshold {
                    Tone::Positive
                } else {
                    Tone::Negative
                },
            },
            Some(PredictionResult::Failure { .. }) => Summary {
                text: "Predicted Letter: Error (no model produced a confidence)".to_string(),
                tone: Tone::Negative,
            },
        }
    }
}

/// One table line, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub model_name: String,
    pub label: String,
    pub confidence: String,
}

impl From<&PredictionResult> for ReportRow {
    fn from(result: &PredictionResult) -> Self {
        let confidence = match result {
            PredictionResult::Success { classification, .. } => {
                format!("{:.4}", classification.confidence)
            }
            PredictionResult::Failure { detail, .. } => format!("Error: {}", detail),
        };

        Self {
            model_name: result.model_name().to_string(),
            label: result.label().to_string(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub tone: Tone,
}
