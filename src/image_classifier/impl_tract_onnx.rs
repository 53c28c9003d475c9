use crate::config::ModelDescriptor;
use crate::error::EvaluatorError;
use crate::image_classifier::interface::{ImageClassifier, ModelLoader};
use crate::image_intake::tensor::ImageTensor;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_onnx::prelude::*;

type RunnableModel = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

pub struct ImageClassifierTractOnnx {
    name: String,
    input_size: (usize, usize),
    model: RunnableModel,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        descriptor: &ModelDescriptor,
        input_shape: (u32, u32),
    ) -> Result<Self, EvaluatorError> {
        let name = descriptor.name();
        let (height, width) = (input_shape.0 as usize, input_shape.1 as usize);

        let model = tract_onnx::onnx()
            .model_for_path(descriptor.path())
            .and_then(|model| model.with_input_fact(0, f32::fact([1, height, width, 3]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| EvaluatorError::ModelLoad {
                model: name.clone(),
                detail: e.to_string(),
            })?;

        Ok(Self {
            name,
            input_size: (height, width),
            model,
        })
    }

    fn inference_error(&self, detail: impl ToString) -> EvaluatorError {
        EvaluatorError::Inference {
            model: self.name.clone(),
            detail: detail.to_string(),
        }
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, EvaluatorError> {
        if tensor.image_size() != self.input_size {
            return Err(self.inference_error(format!(
                "expected a {:?} image, got {:?}",
                self.input_size,
                tensor.image_size()
            )));
        }

        let outputs = self
            .model
            .run(tvec!(tensor.to_tract().into_tvalue()))
            .map_err(|e| self.inference_error(e))?;

        let output = outputs
            .first()
            .ok_or_else(|| self.inference_error("model produced no outputs"))?;
        let output = output
            .to_array_view::<f32>()
            .map_err(|e| self.inference_error(e))?;

        match output.shape() {
            [1, _] | [_] => Ok(output.iter().copied().collect()),
            shape => Err(self.inference_error(format!(
                "unexpected output shape {:?}",
                shape
            ))),
        }
    }
}

pub struct ModelLoaderTractOnnx {
    logger: Arc<dyn Logger + Send + Sync>,
    input_shape: (u32, u32),
}

impl ModelLoaderTractOnnx {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, input_shape: (u32, u32)) -> Self {
        Self {
            logger: logger.with_namespace("model_loader.tract_onnx"),
            input_shape,
        }
    }
}

impl ModelLoader for ModelLoaderTractOnnx {
    fn load(
        &self,
        descriptor: &ModelDescriptor,
    ) -> Result<Arc<dyn ImageClassifier + Send + Sync>, EvaluatorError> {
        let _ = self
            .logger
            .info(&format!("Loading {}", descriptor.path().display()));
        let classifier = ImageClassifierTractOnnx::new(descriptor, self.input_shape)?;
        Ok(Arc::new(classifier))
    }
}
