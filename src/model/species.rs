//! Pokemon species, which carry the Pokedex-flavored information about a
//! Pokemon.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::color::Color;
use crate::model::ColorName;
use crate::model::Resource;

/// A language that flavor text is written in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Language;

/// A game version that flavor text comes from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Version;

/// A Pokemon species.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Species {
  /// This species' API name.
  #[serde(default)]
  pub name: String,
  /// This species' color according to the Pokedex.
  pub color: Resource<Color>,
  /// Pokedex entries for this species, across games and languages.
  #[serde(default)]
  pub flavor_text_entries: Vec<FlavorText>,
}

impl Species {
  /// Returns the API name of this species' Pokedex color.
  pub fn color_name(&self) -> Option<&str> {
    self.color.name()
  }

  /// Returns this species' Pokedex color, if it is one the client knows.
  pub fn color(&self) -> Option<ColorName> {
    self.color_name().and_then(ColorName::from_api_name)
  }
}

impl Endpoint for Species {
  const NAME: &'static str = "pokemon-species";
}

/// A Pokedex entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlavorText {
  /// The entry text, as printed in-game (including hard line breaks).
  pub flavor_text: String,
  /// The language the text is in.
  pub language: Resource<Language>,
  /// The game the text appears in.
  #[serde(default)]
  pub version: Option<Resource<Version>>,
}
