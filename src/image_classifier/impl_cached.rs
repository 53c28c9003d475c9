use crate::config::ModelDescriptor;
use crate::error::EvaluatorError;
use crate::image_classifier::interface::{ImageClassifier, ModelLoader};
use crate::library::logger::interface::Logger;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Loads each artifact at most once for the lifetime of the process. Failed
/// loads are not cached, so a missing file is retried on the next evaluation.
pub struct ModelLoaderCached {
    inner: Arc<dyn ModelLoader + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
    loaded: Mutex<HashMap<PathBuf, Arc<dyn ImageClassifier + Send + Sync>>>,
}

impl ModelLoaderCached {
    pub fn new(
        inner: Arc<dyn ModelLoader + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            inner,
            logger: logger.with_namespace("model_loader.cached"),
            loaded: Mutex::new(HashMap::new()),
        }
    }

    /// Every write is a single insert, so the map behind a poisoned lock is
    /// still consistent.
    fn lock_loaded(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<dyn ImageClassifier + Send + Sync>>> {
        self.loaded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ModelLoader for ModelLoaderCached {
    fn load(
        &self,
        descriptor: &ModelDescriptor,
    ) -> Result<Arc<dyn ImageClassifier + Send + Sync>, EvaluatorError> {
        let hit = self.lock_loaded().get(descriptor.path()).cloned();
        if let Some(classifier) = hit {
            let _ = self
                .logger
                .info(&format!("Cache hit for {}", descriptor.name()));
            return Ok(classifier);
        }

        let classifier = self.inner.load(descriptor)?;

        self.lock_loaded()
            .insert(descriptor.path.clone(), classifier.clone());

        Ok(classifier)
    }
}
