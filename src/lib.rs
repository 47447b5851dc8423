//! `pokecat` is a small client library for browsing the PokéAPI catalog.

#![deny(missing_docs)]

pub mod api;
pub mod model;

pub use api::Api;
