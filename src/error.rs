use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    #[error("Please select a photo before evaluating.")]
    Selection,

    #[error("Could not read image {}: {detail}", .path.display())]
    ImageDecode { path: PathBuf, detail: String },

    #[error("Could not load model {model}: {detail}")]
    ModelLoad { model: String, detail: String },

    #[error("Inference failed for model {model}: {detail}")]
    Inference { model: String, detail: String },
}
