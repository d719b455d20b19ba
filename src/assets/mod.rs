pub mod lister;
pub mod models;

#[allow(unused_imports)]
pub use lister::{AssetLister, PermissionStatus, MAX_ASSETS};
#[allow(unused_imports)]
pub use models::Asset;
