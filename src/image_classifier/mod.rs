pub mod from_config;
pub mod impl_cached;
#[cfg(test)]
pub mod impl_fake;
pub mod impl_random;
pub mod impl_tract_onnx;
pub mod interface;

#[cfg(test)]
mod test;
