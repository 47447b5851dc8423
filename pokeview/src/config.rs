//! Configuration parsing: reads an optional TOML file.
//!
//! Every key is optional; a missing key takes its default.

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;

/// Where a card's background color comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
  /// The species' Pokedex color; costs one extra request per card.
  Species,
  /// The Pokemon's first type.
  Type,
}

/// How the detail page arranges stats and moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLayout {
  /// Stats and moves behind a two-tab selector.
  Tabs,
  /// Stats followed by moves.
  Stacked,
}

/// Viewer configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub base_url: String,
  pub page_size: Option<u32>,
  pub log_file: PathBuf,
  pub card_color: CardColor,
  pub detail_layout: DetailLayout,
  pub format_names: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: pokecat::api::DEFAULT_BASE_URL.to_string(),
      page_size: None,
      log_file: PathBuf::from("pokeview.log"),
      card_color: CardColor::Species,
      detail_layout: DetailLayout::Tabs,
      format_names: true,
    }
  }
}

impl Config {
  /// Default config path, relative to the working directory.
  pub fn default_path() -> &'static str {
    "pokeview.toml"
  }
}

/// Loads the config from `explicit` if given, and from the default path
/// otherwise.
///
/// An explicitly named file must exist; a missing default file just means
/// "use the defaults".
pub fn locate_and_load(explicit: Option<PathBuf>) -> Result<Config> {
  match explicit {
    Some(path) => load(&path),
    None => {
      let path = Path::new(Config::default_path());
      if path.exists() {
        load(path)
      } else {
        Ok(Config::default())
      }
    }
  }
}

/// Parses the TOML file at `path`.
pub fn load(path: &Path) -> Result<Config> {
  let text = std::fs::read_to_string(path)
    .with_context(|| format!("cannot read config: {}", path.display()))?;
  parse(&text).with_context(|| format!("invalid config: {}", path.display()))
}

fn parse(text: &str) -> Result<Config> {
  Ok(toml::from_str(text)?)
}
