//! Pokemon, the individual catalog entries.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Blob;
use crate::api::Endpoint;
use crate::model::Move;
use crate::model::Resource;
use crate::model::Species;
use crate::model::Stat;
use crate::model::Type;

/// A Pokemon, as returned by the `pokemon` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
  /// This Pokemon's numeric ID.
  #[serde(default)]
  pub id: u32,
  /// This Pokemon's API name.
  pub name: String,
  /// Sprites depicting this Pokemon.
  #[serde(default)]
  pub sprites: Sprites,
  /// This Pokemon's types, in no particular order; see [`Pokemon::type_names()`].
  #[serde(default)]
  pub types: Vec<TypeSlot>,
  /// This Pokemon's base stats.
  #[serde(default)]
  pub stats: Vec<BaseStat>,
  /// Moves this Pokemon can learn.
  #[serde(default)]
  pub moves: Vec<MoveEntry>,
  /// The species this Pokemon belongs to.
  pub species: Option<Resource<Species>>,
}

impl Pokemon {
  /// Returns the names of this Pokemon's types, ordered by slot.
  pub fn type_names(&self) -> Vec<&str> {
    let mut types = self
      .types
      .iter()
      .filter_map(|t| Some((t.slot, t.ty.name()?)))
      .collect::<Vec<_>>();
    types.sort_by_key(|&(slot, _)| slot);
    types.into_iter().map(|(_, name)| name).collect()
  }

  /// Returns the name of this Pokemon's first type, if it has one.
  pub fn primary_type(&self) -> Option<&str> {
    self.type_names().into_iter().next()
  }

  /// Returns the default front-facing sprite, if the API has one.
  pub fn image(&self) -> Option<&Blob> {
    self.sprites.front_default.as_ref()
  }

  /// Returns `(stat name, base value)` pairs in API order.
  pub fn stat_values(&self) -> Vec<(&str, u32)> {
    self
      .stats
      .iter()
      .filter_map(|s| Some((s.stat.name()?, s.base_stat)))
      .collect()
  }

  /// Returns the names of every move this Pokemon learns, in API order.
  pub fn move_names(&self) -> Vec<&str> {
    self.moves.iter().filter_map(|m| m.mov.name()).collect()
  }
}

impl Endpoint for Pokemon {
  const NAME: &'static str = "pokemon";
}

/// Sprite URLs for a [`Pokemon`].
///
/// Any of these may be missing; newer Pokemon often lack back sprites.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sprites {
  /// The default front-facing sprite.
  pub front_default: Option<Blob>,
  /// The shiny front-facing sprite.
  #[serde(default)]
  pub front_shiny: Option<Blob>,
  /// The default back-facing sprite.
  #[serde(default)]
  pub back_default: Option<Blob>,
}

/// One of a Pokemon's type slots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
  /// Which slot this type occupies; the primary type is slot 1.
  pub slot: u8,
  /// The type itself.
  #[serde(rename = "type")]
  pub ty: Resource<Type>,
}

/// A base stat value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BaseStat {
  /// The stat this value is for.
  pub stat: Resource<Stat>,
  /// The base value.
  pub base_stat: u32,
  /// The number of effort values defeating this Pokemon yields.
  #[serde(default)]
  pub effort: u32,
}

/// A move a Pokemon can learn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveEntry {
  /// The move.
  #[serde(rename = "move")]
  pub mov: Resource<Move>,
}
