//! Pokemon types, which describe how different Pokemon are strong against
//! others in battle.

use serde::Deserialize;
use serde::Serialize;

/// A Pokemon type.
///
/// Only ever seen through a [`Resource`](crate::model::Resource); the catalog
/// never loads types directly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Type;

/// The known Pokemon types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TypeName {
  Normal,
  Fighting,
  Flying,
  Poison,
  Ground,
  Rock,
  Bug,
  Ghost,
  Steel,
  Fire,
  Water,
  Grass,
  Electric,
  Psychic,
  Ice,
  Dragon,
  Dark,
  Fairy,

  Unknown,
  Shadow,
}

impl TypeName {
  /// Parses a type from its API name, e.g. `"grass"`.
  pub fn from_api_name(name: &str) -> Option<Self> {
    use TypeName::*;
    Some(match name {
      "normal" => Normal,
      "fighting" => Fighting,
      "flying" => Flying,
      "poison" => Poison,
      "ground" => Ground,
      "rock" => Rock,
      "bug" => Bug,
      "ghost" => Ghost,
      "steel" => Steel,
      "fire" => Fire,
      "water" => Water,
      "grass" => Grass,
      "electric" => Electric,
      "psychic" => Psychic,
      "ice" => Ice,
      "dragon" => Dragon,
      "dark" => Dark,
      "fairy" => Fairy,
      "unknown" => Unknown,
      "shadow" => Shadow,
      _ => return None,
    })
  }
}
