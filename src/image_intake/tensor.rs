use tract_onnx::prelude::*;

/// A batch of one normalized image laid out as `[1, height, width, 3]`,
/// every value in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: tract_ndarray::Array4<f32>,
}

impl ImageTensor {
    pub fn from_array(data: tract_ndarray::Array4<f32>) -> Self {
        Self { data }
    }

    #[cfg(test)]
    pub fn filled(height: usize, width: usize, value: f32) -> Self {
        Self {
            data: tract_ndarray::Array4::from_elem((1, height, width, 3), value),
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// (height, width) of the single image in the batch.
    pub fn image_size(&self) -> (usize, usize) {
        let shape = self.data.shape();
        (shape[1], shape[2])
    }

    pub fn values(&self) -> impl Iterator<Item = &f32> {
        self.data.iter()
    }

    pub fn to_tract(&self) -> Tensor {
        self.data.clone().into_tensor()
    }
}
