use crate::config::ModelDescriptor;
use crate::error::EvaluatorError;
use crate::evaluation::labels::{argmax, resolve_label, NUM_CLASSES};
use crate::evaluation::report::{Classification, PredictionResult, RankedReport};
use crate::image_classifier::interface::ModelLoader;
use crate::image_intake::tensor::ImageTensor;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Runs every configured model against one image and ranks the outcomes.
#[derive(Clone)]
pub struct Evaluator {
    descriptors: Vec<ModelDescriptor>,
    loader: Arc<dyn ModelLoader + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Evaluator {
    pub fn new(
        descriptors: Vec<ModelDescriptor>,
        loader: Arc<dyn ModelLoader + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            descriptors,
            loader,
            logger: logger.with_namespace("evaluation"),
        }
    }

    pub fn descriptors(&self) -> &[ModelDescriptor] {
        &self.descriptors
    }

    pub fn evaluate(&self, tensor: &ImageTensor) -> RankedReport {
        let results = self
            .descriptors
            .iter()
            .map(|descriptor| self.evaluate_model(descriptor, tensor))
            .collect();

        let report = RankedReport::new(results);

        if report.is_empty() {
            let _ = self.logger.info("No models configured, nothing to rank");
            return report;
        }

        let _ = self.logger.info(&format!(
            "Ranked {} results, top: {:?}",
            report.len(),
            report.top().map(|top| (top.model_name(), top.label()))
        ));

        report
    }

    /// Never fails: load and inference errors become a failure row.
    pub fn evaluate_model(
        &self,
        descriptor: &ModelDescriptor,
        tensor: &ImageTensor,
    ) -> PredictionResult {
        let model_name = descriptor.name();

        match self.classify(descriptor, tensor) {
            Ok(classification) => {
                let _ = self.logger.info(&format!(
                    "{} predicted {} ({:.4})",
                    model_name, classification.label, classification.confidence
                ));
                PredictionResult::Success {
                    model_name,
                    classification,
                }
            }
            Err(err) => {
                let _ = self.logger.info(&format!("{} failed: {}", model_name, err));
                PredictionResult::Failure {
                    model_name,
                    detail: err.to_string(),
                }
            }
        }
    }

    fn classify(
        &self,
        descriptor: &ModelDescriptor,
        tensor: &ImageTensor,
    ) -> Result<Classification, EvaluatorError> {
        let classifier = self.loader.load(descriptor)?;
        let scores = classifier.predict(tensor)?;
        top_classification(&descriptor.name(), &scores)
    }
}

pub fn top_classification(model: &str, scores: &[f32]) -> Result<Classification, EvaluatorError> {
    let inference_error = |detail: String| EvaluatorError::Inference {
        model: model.to_string(),
        detail,
    };

    if scores.len() != NUM_CLASSES {
        return Err(inference_error(format!(
            "expected {} class scores, got {}",
            NUM_CLASSES,
            scores.len()
        )));
    }

    if scores.iter().any(|score| !score.is_finite()) {
        return Err(inference_error("output contains non-finite scores".to_string()));
    }

    let (index, confidence) =
        argmax(scores).ok_or_else(|| inference_error("empty output".to_string()))?;

    Ok(Classification {
        label: resolve_label(index),
        confidence,
    })
}
