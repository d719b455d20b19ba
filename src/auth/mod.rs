#[cfg(test)]
pub mod fake;
pub mod session;

pub use session::{Session, StaticSession};
