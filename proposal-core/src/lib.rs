pub mod calculations;
pub mod document;
pub mod models;

pub use document::{DiscoveryRowUpdate, MaterialLineUpdate, SignatoryUpdate};
pub use models::*;
