use crate::config::ModelDescriptor;
use crate::error::EvaluatorError;
use crate::evaluation::labels::index_for_label;
use crate::evaluation::labels::NUM_CLASSES;
use crate::image_classifier::interface::{ImageClassifier, ModelLoader};
use crate::image_intake::tensor::ImageTensor;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scripted behaviour for one fake model artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum FakeModel {
    Scores(Vec<f32>),
    FailPredict(String),
    FailLoad(String),
}

impl FakeModel {
    /// 26 scores where `label` gets `confidence` and the rest share what is left.
    pub fn top(label: &str, confidence: f32) -> Self {
        let mut scores = vec![(1.0 - confidence) / NUM_CLASSES as f32; NUM_CLASSES];
        if let Some(index) = index_for_label(label) {
            scores[index] = confidence;
        }
        FakeModel::Scores(scores)
    }
}

pub struct ImageClassifierFake {
    name: String,
    model: FakeModel,
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(&self, _tensor: &ImageTensor) -> Result<Vec<f32>, EvaluatorError> {
        match &self.model {
            FakeModel::Scores(scores) => Ok(scores.clone()),
            FakeModel::FailPredict(detail) | FakeModel::FailLoad(detail) => {
                Err(EvaluatorError::Inference {
                    model: self.name.clone(),
                    detail: detail.clone(),
                })
            }
        }
    }
}

/// Serves models keyed by file name. Unknown names behave like a missing file.
#[derive(Default)]
pub struct ModelLoaderFake {
    models: HashMap<String, FakeModel>,
    load_count: AtomicUsize,
}

impl ModelLoaderFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, name: &str, model: FakeModel) -> Self {
        self.models.insert(name.to_string(), model);
        self
    }

    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

impl ModelLoader for ModelLoaderFake {
    fn load(
        &self,
        descriptor: &ModelDescriptor,
    ) -> Result<Arc<dyn ImageClassifier + Send + Sync>, EvaluatorError> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        let name = descriptor.name();

        match self.models.get(&name) {
            Some(FakeModel::FailLoad(detail)) => Err(EvaluatorError::ModelLoad {
                model: name,
                detail: detail.clone(),
            }),
            Some(model) => Ok(Arc::new(ImageClassifierFake {
                name,
                model: model.clone(),
            })),
            None => Err(EvaluatorError::ModelLoad {
                detail: format!("No such file or directory: '{}'", descriptor.path().display()),
                model: name,
            }),
        }
    }
}
