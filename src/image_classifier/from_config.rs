use crate::config::{ClassifierBackend, Config};
use crate::image_classifier::impl_cached::ModelLoaderCached;
use crate::image_classifier::impl_random::ModelLoaderRandom;
use crate::image_classifier::impl_tract_onnx::ModelLoaderTractOnnx;
use crate::image_classifier::interface::ModelLoader;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub fn model_loader(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn ModelLoader + Send + Sync> {
    let loader: Arc<dyn ModelLoader + Send + Sync> = match config.classifier_backend {
        ClassifierBackend::TractOnnx => {
            Arc::new(ModelLoaderTractOnnx::new(logger.clone(), config.input_shape))
        }
        ClassifierBackend::Random { seed } => Arc::new(ModelLoaderRandom::new(seed, logger.clone())),
    };

    if config.cache_models {
        Arc::new(ModelLoaderCached::new(loader, logger))
    } else {
        loader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelDescriptor;
    use crate::error::EvaluatorError;
    use crate::evaluation::labels::NUM_CLASSES;
    use crate::image_intake::tensor::ImageTensor;
    use crate::library::logger::impl_fake::LoggerFake;

    #[test]
    fn test_random_backend_needs_no_artifacts() {
        let config = Config {
            classifier_backend: ClassifierBackend::Random { seed: 42 },
            ..Config::default()
        };
        let loader = model_loader(&config, Arc::new(LoggerFake::new()));

        let scores = loader
            .load(&ModelDescriptor::new("/no/such/dir/CNN.onnx"))
            .unwrap()
            .predict(&ImageTensor::filled(64, 64, 0.5))
            .unwrap();

        assert_eq!(scores.len(), NUM_CLASSES);
    }

    #[test]
    fn test_tract_backend_reads_artifacts() {
        let loader = model_loader(&Config::default(), Arc::new(LoggerFake::new()));
        let result = loader.load(&ModelDescriptor::new("/no/such/dir/CNN.onnx"));
        assert!(matches!(result, Err(EvaluatorError::ModelLoad { .. })));
    }

    #[test]
    fn test_cache_toggle_wraps_loader() {
        let logger = LoggerFake::new();
        let config = Config {
            classifier_backend: ClassifierBackend::Random { seed: 42 },
            cache_models: true,
            ..Config::default()
        };
        let loader = model_loader(&config, Arc::new(logger.clone()));

        loader.load(&ModelDescriptor::new("CNN.onnx")).unwrap();
        loader.load(&ModelDescriptor::new("CNN.onnx")).unwrap();

        let lines = logger.lines();
        assert!(lines.contains(&"model_loader.cached: Cache hit for CNN.onnx".to_string()));
        assert_eq!(
            lines
                .iter()
                .filter(|line| line.starts_with("model_loader.random:"))
                .count(),
            1
        );
    }
}
