pub mod error;
#[cfg(test)]
pub mod fake;
pub mod metadata;
pub mod optimizer;
pub mod resize;
#[cfg(test)]
mod tests;

#[allow(unused_imports)]
pub use error::OptimizeError;
#[allow(unused_imports)]
pub use metadata::{derive_metadata, ImageMetadata};
#[allow(unused_imports)]
pub use optimizer::{ImageOptimizer, OptimizedImage};
pub use resize::ResizeOptimizer;
