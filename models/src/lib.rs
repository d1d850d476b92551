pub mod character;
pub mod data;
pub mod element;
pub mod language;
pub mod localized;
pub mod rarity;
pub mod re;
pub mod role;
pub mod skill;
pub mod slug;
pub mod tier;
pub mod weapon;

pub use character::*;
pub use data::*;
pub use element::*;
pub use language::*;
pub use localized::*;
pub use rarity::*;
pub use re::*;
pub use role::*;
pub use skill::*;
pub use slug::*;
pub use tier::*;
pub use weapon::*;
