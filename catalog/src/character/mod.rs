mod filter;
mod repository;
mod search;

pub use filter::*;
pub use repository::*;
