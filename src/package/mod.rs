pub mod assemble;
pub mod models;

pub use assemble::{PackageContext, assemble_package, package_id_prefix};
pub use models::*;
