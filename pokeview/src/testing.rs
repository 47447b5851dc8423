//! Fixtures shared by the viewer's tests.

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use pokecat::api::canned::Canned;
use pokecat::api::Options;
use pokecat::model::Pokemon;
use pokecat::Api;

use tui::buffer::Buffer;
use tui::layout::Rect;

use crate::dex::Dex;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::RenderArgs;
use crate::ui::component::StyleSheet;

pub const BASE: &str = "https://example.test/api/v2";

pub const BULBASAUR: &str = r#"{
  "id": 1,
  "name": "bulbasaur",
  "sprites": {"front_default": null},
  "types": [
    {"slot": 2, "type": {"name": "poison", "url": "https://example.test/api/v2/type/4/"}},
    {"slot": 1, "type": {"name": "grass", "url": "https://example.test/api/v2/type/12/"}}
  ],
  "stats": [
    {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": "https://example.test/api/v2/stat/1/"}},
    {"base_stat": 65, "effort": 1, "stat": {"name": "special-defense", "url": "https://example.test/api/v2/stat/5/"}}
  ],
  "moves": [
    {"move": {"name": "razor-wind", "url": "https://example.test/api/v2/move/13/"}},
    {"move": {"name": "swords-dance", "url": "https://example.test/api/v2/move/14/"}}
  ],
  "species": {"name": "bulbasaur", "url": "https://example.test/api/v2/pokemon-species/1/"}
}"#;

/// Returns a [`Dex`] backed by an empty [`Canned`] transport.
pub fn dex() -> (Arc<Canned>, Dex) {
  let canned = Arc::new(Canned::new());
  let api = Api::with_options(Options {
    base_url: BASE.into(),
    transport: Box::new(Arc::clone(&canned)),
  });
  (canned, Dex::new(Arc::new(api)))
}

/// Parses [`BULBASAUR`] the way the viewer would receive it.
pub fn bulbasaur() -> Pokemon {
  let canned = Arc::new(Canned::new());
  canned.insert(format!("{}/pokemon/bulbasaur", BASE), BULBASAUR);
  let api = Api::with_options(Options {
    base_url: BASE.into(),
    transport: Box::new(canned),
  });
  api.by_name::<Pokemon>("bulbasaur").unwrap()
}

/// Returns the index URL of `n` Pokemon.
pub fn pokemon_url(n: usize) -> String {
  format!("{}/pokemon/{}/", BASE, n)
}

/// Returns the species URL of `n` Pokemon.
pub fn species_url(n: usize) -> String {
  format!("{}/pokemon-species/{}/", BASE, n)
}

/// Returns a detail document for a made-up Pokemon.
pub fn detail_json(n: usize, name: &str, ty: &str) -> String {
  format!(
    r#"{{
      "id": {n},
      "name": "{name}",
      "sprites": {{"front_default": null}},
      "types": [{{"slot": 1, "type": {{"name": "{ty}", "url": "{base}/type/1/"}}}}],
      "stats": [{{"base_stat": 50, "effort": 0, "stat": {{"name": "speed", "url": "{base}/stat/6/"}}}}],
      "moves": [],
      "species": {{"name": "{name}", "url": "{species}"}}
    }}"#,
    n = n,
    name = name,
    ty = ty,
    base = BASE,
    species = species_url(n),
  )
}

/// Returns a species document with the given color.
pub fn species_json(name: &str, color: &str) -> String {
  format!(
    r#"{{
      "name": "{name}",
      "color": {{"name": "{color}", "url": "{base}/pokemon-color/1/"}},
      "flavor_text_entries": [
        {{"flavor_text": "A strange seed.", "language": {{"name": "en", "url": "{base}/language/9/"}}}}
      ]
    }}"#,
    name = name,
    color = color,
    base = BASE,
  )
}

/// Returns a listing page document over the given names.
pub fn page_json(
  names: &[&str],
  next: Option<&str>,
  previous: Option<&str>,
) -> String {
  let results = names
    .iter()
    .enumerate()
    .map(|(i, name)| {
      format!(r#"{{"name": "{}", "url": "{}"}}"#, name, pokemon_url(i + 1))
    })
    .collect::<Vec<_>>()
    .join(", ");
  let opt = |s: Option<&str>| match s {
    Some(s) => format!("\"{}\"", s),
    None => "null".to_string(),
  };
  format!(
    r#"{{"count": {}, "next": {}, "previous": {}, "results": [{}]}}"#,
    names.len(),
    opt(next),
    opt(previous),
    results,
  )
}

/// Returns row `y` of `buf` as a string, without trailing blanks.
pub fn line(buf: &Buffer, y: u16) -> String {
  let area = buf.area();
  let mut out = String::new();
  for x in area.x..area.x + area.width {
    out.push_str(&buf.get(x, y).symbol);
  }
  out.trim_end().to_string()
}

/// Returns all of `buf` as newline-separated rows.
pub fn text(buf: &Buffer) -> String {
  let area = buf.area();
  (area.y..area.y + area.height)
    .map(|y| line(buf, y))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn key(code: KeyCode) -> Event {
  Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn key_event(code: KeyCode) -> crossterm::event::Event {
  crossterm::event::Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn click(column: u16, row: u16) -> Event {
  Event::Mouse(MouseEvent {
    kind: MouseEventKind::Up(MouseButton::Left),
    column,
    row,
    modifiers: KeyModifiers::NONE,
  })
}

/// Renders `component` once into a fresh buffer.
pub fn render<C: Component + ?Sized>(
  component: &mut C,
  dex: &Dex,
  rect: Rect,
  style_sheet: StyleSheet,
) -> Buffer {
  let mut buf = Buffer::empty(rect);
  component.render(&mut RenderArgs {
    is_focused: true,
    dex,
    rect,
    output: &mut buf,
    style_sheet,
  });
  buf
}

/// Renders `component` every few milliseconds until `done` holds, giving up
/// after a couple of seconds.
pub fn render_until<C: Component + ?Sized>(
  component: &mut C,
  dex: &Dex,
  rect: Rect,
  style_sheet: StyleSheet,
  mut done: impl FnMut(&mut C, &Buffer) -> bool,
) -> Buffer {
  let deadline = Instant::now() + Duration::from_secs(2);
  loop {
    let buf = render(component, dex, rect, style_sheet);
    if done(component, &buf) || Instant::now() > deadline {
      return buf;
    }
    thread::sleep(Duration::from_millis(5));
  }
}

/// Keeps rendering `component` for a little while, for checking that
/// something never shows up.
pub fn render_for<C: Component + ?Sized>(
  component: &mut C,
  dex: &Dex,
  rect: Rect,
  style_sheet: StyleSheet,
) -> Buffer {
  let deadline = Instant::now() + Duration::from_millis(150);
  loop {
    let buf = render(component, dex, rect, style_sheet);
    if Instant::now() > deadline {
      return buf;
    }
    thread::sleep(Duration::from_millis(5));
  }
}
