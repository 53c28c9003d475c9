use crate::config::ModelDescriptor;
use crate::error::EvaluatorError;
use crate::image_intake::tensor::ImageTensor;
use std::sync::Arc;

/// A loaded model. Produces one raw score per class for a batch of one image.
pub trait ImageClassifier: Send + Sync {
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, EvaluatorError>;
}

/// Turns a descriptor into a runnable classifier.
pub trait ModelLoader: Send + Sync {
    fn load(
        &self,
        descriptor: &ModelDescriptor,
    ) -> Result<Arc<dyn ImageClassifier + Send + Sync>, EvaluatorError>;
}
