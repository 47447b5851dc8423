//! Pokemon battle statistics, which describe how powerful Pokemon are relative
//! to each other.

use serde::Deserialize;
use serde::Serialize;

/// A base stat, such as `hp` or `special-defense`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stat;

/// The known battle stats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum StatName {
  HitPoints,
  Attack,
  Defense,
  SpAttack,
  SpDefense,
  Speed,
  Accuracy,
  Evasion,
}

impl StatName {
  /// Parses a stat from its API name, e.g. `"special-defense"`.
  pub fn from_api_name(name: &str) -> Option<Self> {
    use StatName::*;
    Some(match name {
      "hp" => HitPoints,
      "attack" => Attack,
      "defense" => Defense,
      "special-attack" => SpAttack,
      "special-defense" => SpDefense,
      "speed" => Speed,
      "accuracy" => Accuracy,
      "evasion" => Evasion,
      _ => return None,
    })
  }
}
