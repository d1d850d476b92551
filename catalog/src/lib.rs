pub mod character;
pub mod config;
pub mod resolver;
pub mod snapshot;
pub mod statics;
pub mod tier;
pub mod view;

pub use character::*;
pub use config::*;
pub use resolver::*;
pub use snapshot::*;
pub use statics::*;
pub use tier::*;
pub use view::*;
