use crate::error::EvaluatorError;
use crate::image_intake::tensor::ImageTensor;
use crate::library::path::display_name;
use image::{imageops, DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tract_onnx::prelude::tract_ndarray;

/// Everything produced from one "select photo" action.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub tensor: Arc<ImageTensor>,
    pub preview: RgbaImage,
}

impl SelectedImage {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

pub fn decode_image(path: &Path) -> Result<DynamicImage, EvaluatorError> {
    image::open(path).map_err(|e| EvaluatorError::ImageDecode {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Resizes to `width` x `height` and scales every channel from 0..=255 into
/// `[0, 1]`, adding the leading batch dimension.
pub fn image_to_tensor(image: &DynamicImage, width: u32, height: u32) -> ImageTensor {
    let resized = image.resize_exact(width, height, imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let data = tract_ndarray::Array4::from_shape_fn(
        (1, height as usize, width as usize, 3),
        |(_, y, x, c)| {
            let pixel = rgb.get_pixel(x as u32, y as u32);
            pixel[c] as f32 / 255.0
        },
    );

    ImageTensor::from_array(data)
}

pub fn image_to_preview(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    image
        .resize_exact(width, height, imageops::FilterType::Triangle)
        .to_rgba8()
}

/// Decodes the file once and derives both the model input and the preview.
pub fn load_selected_image(
    path: &Path,
    input_shape: (u32, u32),
    preview_size: (u32, u32),
) -> Result<SelectedImage, EvaluatorError> {
    let image = decode_image(path)?;
    let (height, width) = input_shape;

    Ok(SelectedImage {
        path: path.to_path_buf(),
        tensor: Arc::new(image_to_tensor(&image, width, height)),
        preview: image_to_preview(&image, preview_size.0, preview_size.1),
    })
}
