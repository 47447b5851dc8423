//! Pokedex colors, used by the Pokedex to roughly sort species by appearance.

use serde::Deserialize;
use serde::Serialize;

/// A Pokedex color, such as `green`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Color;

/// One of the ten Pokedex colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ColorName {
  Black,
  Blue,
  Brown,
  Gray,
  Green,
  Pink,
  Purple,
  Red,
  White,
  Yellow,
}

impl ColorName {
  /// Parses a color from its API name, e.g. `"green"`.
  pub fn from_api_name(name: &str) -> Option<Self> {
    use ColorName::*;
    Some(match name {
      "black" => Black,
      "blue" => Blue,
      "brown" => Brown,
      "gray" => Gray,
      "green" => Green,
      "pink" => Pink,
      "purple" => Purple,
      "red" => Red,
      "white" => White,
      "yellow" => Yellow,
      _ => return None,
    })
  }
}
