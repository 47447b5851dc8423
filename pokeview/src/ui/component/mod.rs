//! Leaf components.

use std::fmt::Debug;

use crossterm::event::KeyEvent;
use crossterm::event::MouseEvent;

use pokecat::model::ColorName;
use pokecat::model::StatName;
use pokecat::model::TypeName;

use tui::buffer::Buffer;
use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Rect;
use tui::style::Color;
use tui::style::Modifier;
use tui::style::Style;
use tui::widgets::Widget;

use crate::config::CardColor;
use crate::config::Config;
use crate::config::DetailLayout;
use crate::dex::Dex;

pub mod catalog;
pub mod hyperlink;
pub mod image;
pub mod list;
pub mod page;
pub mod stack;
pub mod stats;
pub mod tabs;

/// An input event delivered to components.
#[derive(Copy, Clone, Debug)]
pub enum Event {
  Key(KeyEvent),
  Mouse(MouseEvent),
}

/// A buffer for issuing commands to the browser in response to an event.
///
/// Buffered commands will not take effect until event processing completes.
pub struct CommandBuffer {
  navigate_to: Option<String>,
  claimed: bool,
}

impl CommandBuffer {
  /// Creates an empty buffer.
  pub fn new() -> Self {
    Self {
      navigate_to: None,
      claimed: false,
    }
  }

  /// Requests that the browser navigate to `url`.
  pub fn navigate_to(&mut self, url: String) {
    self.navigate_to = Some(url)
  }

  pub fn take_url(&mut self) -> Option<String> {
    self.navigate_to.take()
  }

  /// Claims the event being processed, so it will not be further propagated to
  /// other components.
  pub fn claim(&mut self) {
    self.claimed = true
  }

  /// Returns whether a callee has already claimed the event associated with
  /// this buffer.
  pub fn is_claimed(&self) -> bool {
    self.claimed
  }
}

/// Colors and display variants shared by every component on screen.
#[derive(Copy, Clone, Debug)]
pub struct StyleSheet {
  pub focused: Style,
  pub unfocused: Style,
  pub selected: Style,
  /// The foreground used on top of a colored card background.
  pub on_background: Style,
  pub type_colors: TypeColors,
  pub pokedex_colors: PokedexColors,
  pub stat_colors: StatColors,
  /// How many times taller than wide a terminal cell is.
  pub font_height: f64,

  pub card_color: CardColor,
  pub detail_layout: DetailLayout,
  pub format_names: bool,
}

impl Default for StyleSheet {
  fn default() -> Self {
    StyleSheet {
      focused: Style::default().fg(Color::White),
      unfocused: Style::default().fg(Color::Gray),
      selected: Style::default().add_modifier(Modifier::BOLD),
      on_background: Style::default().fg(Color::Black),
      type_colors: TypeColors::default(),
      pokedex_colors: PokedexColors::default(),
      stat_colors: StatColors::default(),
      font_height: 2.1,

      card_color: CardColor::Species,
      detail_layout: DetailLayout::Tabs,
      format_names: true,
    }
  }
}

impl StyleSheet {
  /// Builds a style sheet with the display variants chosen in `config`.
  pub fn from_config(config: &Config) -> Self {
    Self {
      card_color: config.card_color,
      detail_layout: config.detail_layout,
      format_names: config.format_names,
      ..Self::default()
    }
  }

  /// Returns the background style for a type name.
  ///
  /// Names that aren't in the palette get the default style.
  pub fn type_background(&self, name: Option<&str>) -> Style {
    match name.and_then(TypeName::from_api_name) {
      Some(ty) => self.on_background.bg(self.type_colors.get(ty)),
      None => Style::default(),
    }
  }

  /// Returns the background style for a Pokedex color name.
  ///
  /// Names that aren't in the palette get the default style.
  pub fn pokedex_background(&self, name: Option<&str>) -> Style {
    match name.and_then(ColorName::from_api_name) {
      Some(color) => self.on_background.bg(self.pokedex_colors.get(color)),
      None => Style::default(),
    }
  }
}

#[derive(Copy, Clone, Debug)]
pub struct TypeColors {
  pub normal: Color,
  pub fighting: Color,
  pub flying: Color,
  pub poison: Color,
  pub ground: Color,
  pub rock: Color,
  pub bug: Color,
  pub ghost: Color,
  pub steel: Color,
  pub fire: Color,
  pub water: Color,
  pub grass: Color,
  pub electric: Color,
  pub psychic: Color,
  pub ice: Color,
  pub dragon: Color,
  pub dark: Color,
  pub fairy: Color,

  pub unknown: Color,
  pub shadow: Color,
}

impl Default for TypeColors {
  fn default() -> Self {
    // Colors pulled from Bulbapedia.
    Self {
      normal: Color::Rgb(0xa8, 0xa8, 0x78),
      fighting: Color::Rgb(0xc0, 0x30, 0x28),
      flying: Color::Rgb(0xa9, 0x90, 0xf0),
      poison: Color::Rgb(0xa0, 0x40, 0xa0),
      ground: Color::Rgb(0xe0, 0xc0, 0x68),
      rock: Color::Rgb(0xb8, 0xa0, 0x38),
      bug: Color::Rgb(0xa8, 0xb8, 0x20),
      ghost: Color::Rgb(0x70, 0x58, 0x98),
      steel: Color::Rgb(0xb8, 0xb8, 0xd0),
      fire: Color::Rgb(0xf0, 0x80, 0x30),
      water: Color::Rgb(0x68, 0x90, 0xf0),
      grass: Color::Rgb(0x78, 0xc8, 0x50),
      electric: Color::Rgb(0xf8, 0xd0, 0x30),
      psychic: Color::Rgb(0xf8, 0x58, 0x88),
      ice: Color::Rgb(0x98, 0xd8, 0xd8),
      dragon: Color::Rgb(0x70, 0x38, 0xf8),
      dark: Color::Rgb(0x70, 0x58, 0x48),
      fairy: Color::Rgb(0xee, 0x99, 0xac),

      unknown: Color::Rgb(0x68, 0xa0, 0x90),
      shadow: Color::Rgb(0x60, 0x4e, 0x82),
    }
  }
}

impl TypeColors {
  pub fn get(self, ty: TypeName) -> Color {
    match ty {
      TypeName::Normal => self.normal,
      TypeName::Fighting => self.fighting,
      TypeName::Flying => self.flying,
      TypeName::Poison => self.poison,
      TypeName::Ground => self.ground,
      TypeName::Rock => self.rock,
      TypeName::Bug => self.bug,
      TypeName::Ghost => self.ghost,
      TypeName::Steel => self.steel,
      TypeName::Fire => self.fire,
      TypeName::Water => self.water,
      TypeName::Grass => self.grass,
      TypeName::Electric => self.electric,
      TypeName::Psychic => self.psychic,
      TypeName::Ice => self.ice,
      TypeName::Dragon => self.dragon,
      TypeName::Dark => self.dark,
      TypeName::Fairy => self.fairy,
      TypeName::Unknown => self.unknown,
      TypeName::Shadow => self.shadow,
    }
  }
}

/// Muted renditions of the ten Pokedex colors, so that black text stays
/// readable on top of them.
#[derive(Copy, Clone, Debug)]
pub struct PokedexColors {
  pub black: Color,
  pub blue: Color,
  pub brown: Color,
  pub gray: Color,
  pub green: Color,
  pub pink: Color,
  pub purple: Color,
  pub red: Color,
  pub white: Color,
  pub yellow: Color,
}

impl Default for PokedexColors {
  fn default() -> Self {
    Self {
      black: Color::Rgb(0x6b, 0x6b, 0x6b),
      blue: Color::Rgb(0x8a, 0xa8, 0xd8),
      brown: Color::Rgb(0xb8, 0x98, 0x78),
      gray: Color::Rgb(0xb0, 0xb0, 0xb0),
      green: Color::Rgb(0x98, 0xc8, 0x88),
      pink: Color::Rgb(0xe8, 0xb0, 0xc0),
      purple: Color::Rgb(0xb0, 0x98, 0xc8),
      red: Color::Rgb(0xd8, 0x88, 0x80),
      white: Color::Rgb(0xe8, 0xe8, 0xe8),
      yellow: Color::Rgb(0xe8, 0xd8, 0x88),
    }
  }
}

impl PokedexColors {
  pub fn get(self, color: ColorName) -> Color {
    match color {
      ColorName::Black => self.black,
      ColorName::Blue => self.blue,
      ColorName::Brown => self.brown,
      ColorName::Gray => self.gray,
      ColorName::Green => self.green,
      ColorName::Pink => self.pink,
      ColorName::Purple => self.purple,
      ColorName::Red => self.red,
      ColorName::White => self.white,
      ColorName::Yellow => self.yellow,
    }
  }
}

#[derive(Copy, Clone, Debug)]
pub struct StatColors {
  pub hp: Color,
  pub attack: Color,
  pub defense: Color,
  pub sp_attack: Color,
  pub sp_defense: Color,
  pub speed: Color,
  pub other: Color,
}

impl Default for StatColors {
  fn default() -> Self {
    // Colors pulled from Bulbapedia.
    Self {
      hp: Color::Rgb(0xff, 0x59, 0x59),
      attack: Color::Rgb(0xf5, 0xac, 0x78),
      defense: Color::Rgb(0xfa, 0xe0, 0x78),
      sp_attack: Color::Rgb(0x9d, 0xb7, 0xf5),
      sp_defense: Color::Rgb(0xa7, 0xdb, 0x8d),
      speed: Color::Rgb(0xfa, 0x92, 0xb2),
      other: Color::Gray,
    }
  }
}

impl StatColors {
  pub fn get(self, stat: StatName) -> Color {
    match stat {
      StatName::HitPoints => self.hp,
      StatName::Attack => self.attack,
      StatName::Defense => self.defense,
      StatName::SpAttack => self.sp_attack,
      StatName::SpDefense => self.sp_defense,
      StatName::Speed => self.speed,
      StatName::Accuracy | StatName::Evasion => self.other,
    }
  }
}

/// Arguments fot [`Component::process_event()`].
pub struct EventArgs<'browser> {
  pub is_focused: bool,
  pub event: &'browser Event,
  pub dex: &'browser Dex,
  pub commands: &'browser mut CommandBuffer,
}

/// Arguments fot [`Component::render()`].
pub struct RenderArgs<'browser> {
  pub is_focused: bool,
  pub dex: &'browser Dex,
  pub rect: Rect,
  pub output: &'browser mut Buffer,
  pub style_sheet: StyleSheet,
}

pub struct LayoutHintArgs {
  pub direction: Direction,
}

/// A component, which is like a [`Widget`] but which can process
/// input and access complex state.
///
/// All [`Widget`]s that are both [`Clone`] and [`Debug`] are trivially
/// unfocusable `Component`s.
pub trait Component: Debug {
  /// Processes an event, either mutating own state or issuing a command to
  /// the browser.
  fn process_event(&mut self, args: &mut EventArgs) {
    let _ = args;
  }

  /// Renders this component.
  fn render(&mut self, args: &mut RenderArgs);

  /// Returns whether this component should be given focus at all.
  fn wants_focus(&self) -> bool {
    false
  }

  /// Returns whether this component wants to see every event, rather than
  /// only the ones aimed at it.
  fn wants_all_events(&self) -> bool {
    false
  }

  /// Returns a hint to the layout solver.
  fn layout_hint(&self, args: &LayoutHintArgs) -> Option<Constraint> {
    let _ = args;
    None
  }
}

impl<W> Component for W
where
  W: Widget + Clone + Debug + 'static,
{
  fn render(&mut self, args: &mut RenderArgs) {
    self.clone().render(args.rect, args.output);
  }
}

/// A trivial [`Component`] that ignores all key presses and draws nothing to
/// the screen.
#[derive(Clone, Debug)]
pub struct Empty;
impl Component for Empty {
  fn render(&mut self, _: &mut RenderArgs) {}
}
