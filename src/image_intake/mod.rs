pub mod image;
pub mod tensor;
