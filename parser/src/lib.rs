pub mod characters;
pub mod dataset;
pub mod error;
pub mod ids;
pub mod json;
pub mod wrappers;

pub use characters::*;
pub use dataset::*;
pub use error::*;
pub use ids::*;
pub use json::*;
pub use wrappers::*;
