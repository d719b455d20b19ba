pub mod error;
pub mod pipeline;

#[allow(unused_imports)]
pub use error::SyncError;
#[allow(unused_imports)]
pub use pipeline::SyncedImage;
pub use pipeline::SyncPipeline;
