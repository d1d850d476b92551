mod repository;
mod row;

pub use repository::*;
pub use row::*;
