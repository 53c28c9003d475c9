use crate::library::path::display_name;
use chrono::Offset;
use std::path::{Path, PathBuf};

/// Identifies one pre-trained classifier by the path of its artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelDescriptor {
    pub path: PathBuf,
}

impl ModelDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Final path component, used as the row name in the report.
    pub fn name(&self) -> String {
        display_name(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierBackend {
    TractOnnx,
    /// Seeded scores instead of artifacts, for running the window without
    /// exported models. Selected by editing `Config::default()`.
    #[allow(dead_code)]
    Random { seed: u64 },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub window_size: (f32, f32),
    pub model_descriptors: Vec<ModelDescriptor>,
    /// (height, width) every model expects.
    pub input_shape: (u32, u32),
    pub preview_size: (u32, u32),
    pub confidence_threshold: f32,
    pub classifier_backend: ClassifierBackend,
    pub cache_models: bool,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Alphabet Predictor".to_string(),
            window_size: (600.0, 600.0),
            model_descriptors: vec![
                ModelDescriptor::new("dense_121.onnx"),
                ModelDescriptor::new("LSTM_2.onnx"),
                ModelDescriptor::new("CNN.onnx"),
                ModelDescriptor::new("Resnet.onnx"),
            ],
            input_shape: (64, 64),
            preview_size: (150, 150),
            confidence_threshold: 0.8,
            classifier_backend: ClassifierBackend::TractOnnx,
            cache_models: false,
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
