//! Structs describing the slice of the PokéAPI data model that the catalog
//! needs.

pub mod color;
pub mod mov;
pub mod pokemon;
pub mod resource;
pub mod species;
pub mod stat;
pub mod ty;

pub use color::ColorName;
pub use mov::Move;
pub use pokemon::Pokemon;
pub use resource::Resource;
pub use species::Species;
pub use stat::Stat;
pub use stat::StatName;
pub use ty::Type;
pub use ty::TypeName;
