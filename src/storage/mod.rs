pub mod error;
#[cfg(test)]
pub mod fake;
pub mod object_store;
pub mod s3;

#[allow(unused_imports)]
pub use error::StorageError;
pub use object_store::ObjectStore;
pub use s3::S3ObjectStore;
