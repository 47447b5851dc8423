//! The catalog views: a paged grid of Pokemon cards, and a detail page for a
//! single Pokemon.
//!
//! Every view here owns the fetches for the data it shows, and draws nothing
//! at all until that data has arrived.

use std::sync::Arc;

use crossterm::event::KeyCode;
use crossterm::event::MouseButton;
use crossterm::event::MouseEventKind;

use pokecat::api::Cursor;
use pokecat::api::Page;
use pokecat::model::Pokemon;
use pokecat::model::Resource;
use pokecat::model::Species;

use tui::layout::Alignment;
use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Layout;
use tui::layout::Rect;
use tui::style::Style;
use tui::widgets::Paragraph;
use tui::widgets::Widget;

use crate::config::CardColor;
use crate::config::DetailLayout;
use crate::dex::Dex;
use crate::fetch::Fetch;
use crate::ui::component::image::Sprite;
use crate::ui::component::list::Listing;
use crate::ui::component::stats::StatsView;
use crate::ui::component::tabs::Tabs;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::component::StyleSheet;
use crate::ui::widgets::Button;
use crate::ui::widgets::Chrome;
use crate::util;
use crate::util::rect_contains;

/// The URL of the grid page.
pub const LIST_URL: &str = "pokeview://pokemon";

/// Returns the URL of the detail page for `name`.
pub fn detail_url(name: &str) -> String {
  format!("{}/{}", LIST_URL, name)
}

const CARD_HEIGHT: u16 = 10;
const PREVIOUS_LABEL: &str = "◀ Previous";
const NEXT_LABEL: &str = "Next ▶";

/// The paged grid of Pokemon.
///
/// Holds one page of references and the cursors that came with it. A page
/// request that fails leaves the grid exactly as it was.
#[derive(Debug)]
pub struct PokemonGrid {
  started: bool,
  request: Option<Fetch<Page<Pokemon>>>,
  cursor: Cursor,
  cards: Vec<PokemonCard>,
  selected: usize,
  first_row: usize,

  columns: usize,
  card_rects: Vec<(usize, Rect)>,
  previous_rect: Option<Rect>,
  next_rect: Option<Rect>,
}

impl PokemonGrid {
  pub fn new() -> Self {
    Self {
      started: false,
      request: None,
      cursor: Cursor::default(),
      cards: Vec::new(),
      selected: 0,
      first_row: 0,
      columns: 1,
      card_rects: Vec::new(),
      previous_rect: None,
      next_rect: None,
    }
  }

  /// Returns the current cursors.
  pub fn cursor(&self) -> &Cursor {
    &self.cursor
  }

  /// Returns the cards on the current page.
  pub fn cards(&self) -> &[PokemonCard] {
    &self.cards
  }

  fn poll(&mut self, dex: &Dex) {
    if !self.started {
      self.started = true;
      self.request = Some(dex.request_index());
    }

    let request = match &mut self.request {
      Some(request) => request,
      None => return,
    };
    if let Some(page) = request.poll() {
      self.cursor = page.cursor();
      self.cards = page.results.iter().cloned().map(PokemonCard::new).collect();
      self.selected = 0;
      self.first_row = 0;
      self.request = None;
    } else if request.is_failed() {
      self.request = None;
    }
  }

  /// Requests the page behind a cursor, replacing any request in flight.
  ///
  /// Returns false without doing anything if there is no such page.
  fn turn_page(&mut self, url: Option<String>, dex: &Dex) -> bool {
    match url {
      Some(url) => {
        tracing::info!(%url, "turning page");
        self.request = Some(dex.request(&url));
        true
      }
      None => false,
    }
  }

  fn open(&self, index: usize, args: &mut EventArgs) {
    if let Some(name) = self.cards.get(index).and_then(PokemonCard::name) {
      args.commands.navigate_to(detail_url(name));
      args.commands.claim();
    }
  }

  fn move_selection(&mut self, delta: isize) -> bool {
    let new_idx = ((self.selected as isize).saturating_add(delta).max(0)
      as usize)
      .min(self.cards.len().saturating_sub(1));
    if new_idx == self.selected {
      return false;
    }
    self.selected = new_idx;
    true
  }
}

impl Component for PokemonGrid {
  fn wants_focus(&self) -> bool {
    true
  }

  fn process_event(&mut self, args: &mut EventArgs) {
    let columns = self.columns as isize;
    let claimed = match args.event {
      Event::Key(key) => match key.code {
        KeyCode::Char('p') | KeyCode::Char('[') => {
          self.turn_page(self.cursor.previous.clone(), args.dex)
        }
        KeyCode::Char('n') | KeyCode::Char(']') => {
          self.turn_page(self.cursor.next.clone(), args.dex)
        }
        KeyCode::Left => self.move_selection(-1),
        KeyCode::Right => self.move_selection(1),
        KeyCode::Up => self.move_selection(-columns),
        KeyCode::Down => self.move_selection(columns),
        KeyCode::Enter => {
          self.open(self.selected, args);
          false
        }
        _ => false,
      },
      Event::Mouse(m) => match m.kind {
        MouseEventKind::ScrollUp => self.move_selection(-columns),
        MouseEventKind::ScrollDown => self.move_selection(columns),
        MouseEventKind::Up(MouseButton::Left) => {
          let (x, y) = (m.column, m.row);
          if self.previous_rect.map_or(false, |r| rect_contains(r, x, y)) {
            self.turn_page(self.cursor.previous.clone(), args.dex)
          } else if self.next_rect.map_or(false, |r| rect_contains(r, x, y)) {
            self.turn_page(self.cursor.next.clone(), args.dex)
          } else {
            let hit = self
              .card_rects
              .iter()
              .find(|(_, r)| rect_contains(*r, x, y))
              .map(|&(i, _)| i);
            if let Some(index) = hit {
              self.selected = index;
              self.open(index, args);
            }
            false
          }
        }
        _ => false,
      },
    };

    if claimed {
      args.commands.claim();
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    self.poll(args.dex);
    self.card_rects.clear();
    self.previous_rect = None;
    self.next_rect = None;
    if args.rect.width == 0 || args.rect.height < 3 {
      return;
    }

    let style = args.style_sheet.unfocused;
    let title = Rect::new(args.rect.x, args.rect.y, args.rect.width, 1);
    Paragraph::new("Pokemon List")
      .style(style.patch(args.style_sheet.selected))
      .alignment(Alignment::Center)
      .render(title, args.output);

    let pager_y = args.rect.y + args.rect.height - 1;
    if self.cursor.previous.is_some() {
      let button = Button::new(PREVIOUS_LABEL).style(style);
      let rect = Rect::new(args.rect.x, pager_y, button.width(), 1)
        .intersection(args.rect);
      button.render(rect, args.output);
      self.previous_rect = Some(rect);
    }
    if self.cursor.next.is_some() {
      let button = Button::new(NEXT_LABEL).style(style);
      let width = button.width().min(args.rect.width);
      let rect = Rect::new(
        args.rect.x + args.rect.width - width,
        pager_y,
        width,
        1,
      );
      button.render(rect, args.output);
      self.next_rect = Some(rect);
    }

    // Mirrors a two-column grid that widens to four on large screens.
    self.columns = if args.rect.width >= 80 { 4 } else { 2 };
    let grid = Rect::new(
      args.rect.x,
      args.rect.y + 1,
      args.rect.width,
      args.rect.height - 2,
    );
    let visible_rows = (grid.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = self.selected / self.columns;
    if selected_row < self.first_row {
      self.first_row = selected_row;
    } else if selected_row >= self.first_row + visible_rows {
      self.first_row = selected_row + 1 - visible_rows;
    }

    let card_width = grid.width / self.columns as u16;
    for (i, card) in self.cards.iter_mut().enumerate() {
      // Every card keeps its requests moving, on screen or not.
      card.poll(args.dex, args.style_sheet.card_color);

      let row = i / self.columns;
      if row < self.first_row || row >= self.first_row + visible_rows {
        continue;
      }
      let rect = Rect::new(
        grid.x + (i % self.columns) as u16 * card_width,
        grid.y + (row - self.first_row) as u16 * CARD_HEIGHT,
        card_width,
        CARD_HEIGHT,
      )
      .intersection(grid);

      self.card_rects.push((i, rect));
      card.render(&mut RenderArgs {
        is_focused: args.is_focused && i == self.selected,
        dex: args.dex,
        rect,
        output: args.output,
        style_sheet: args.style_sheet,
      });
    }
  }
}

/// A single card in the grid.
///
/// The card asks for its own detail and, when colored by species, for the
/// species after that. It draws nothing until everything it needs is in.
#[derive(Debug)]
pub struct PokemonCard {
  reference: Resource<Pokemon>,
  detail: Option<Fetch<Pokemon>>,
  species: Option<Fetch<Species>>,
  sprite: Option<Sprite>,
}

/// What a card needs to draw itself.
struct CardData {
  pokemon: Arc<Pokemon>,
  species: Option<Arc<Species>>,
}

impl PokemonCard {
  pub fn new(reference: Resource<Pokemon>) -> Self {
    Self {
      reference,
      detail: None,
      species: None,
      sprite: None,
    }
  }

  /// Returns the name this card navigates to.
  pub fn name(&self) -> Option<&str> {
    self.reference.name()
  }

  /// Returns whether every request this card depends on has arrived.
  pub fn is_ready(&mut self, dex: &Dex, card_color: CardColor) -> bool {
    self.poll(dex, card_color).is_some()
  }

  fn poll(&mut self, dex: &Dex, card_color: CardColor) -> Option<CardData> {
    let reference = &self.reference;
    let pokemon = Arc::clone(
      self
        .detail
        .get_or_insert_with(|| dex.request(reference.url()))
        .poll()?,
    );

    let species = match card_color {
      CardColor::Type => None,
      CardColor::Species => {
        let url = pokemon.species.as_ref()?.url();
        let fetch = self.species.get_or_insert_with(|| dex.request(url));
        Some(Arc::clone(fetch.poll()?))
      }
    };

    if self.sprite.is_none() {
      self.sprite = pokemon.image().cloned().map(Sprite::new);
    }
    Some(CardData { pokemon, species })
  }

  fn background(data: &CardData, style_sheet: &StyleSheet) -> Style {
    match &data.species {
      Some(species) => style_sheet.pokedex_background(species.color_name()),
      None => style_sheet.type_background(data.pokemon.primary_type()),
    }
  }
}

impl Component for PokemonCard {
  fn wants_focus(&self) -> bool {
    true
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let data = match self.poll(args.dex, args.style_sheet.card_color) {
      Some(data) => data,
      None => return,
    };
    if args.rect.width < 3 || args.rect.height < 3 {
      return;
    }

    let background = Self::background(&data, &args.style_sheet);
    // Leave a one-cell gutter between cards.
    let rect = Rect::new(
      args.rect.x,
      args.rect.y,
      args.rect.width - 1,
      args.rect.height - 1,
    );
    args.output.set_style(rect, background);

    let name = util::capitalize(&data.pokemon.name);
    let types = format!("Type: {}", data.pokemon.type_names().join(", "));
    let chrome = Chrome::new()
      .title(name.as_str())
      .footer(types.as_str())
      .focus(args.is_focused)
      .style(args.style_sheet.unfocused.patch(background))
      .focused_style(args.style_sheet.focused.patch(args.style_sheet.selected));
    let inner = chrome.inner(rect);
    chrome.render(rect, args.output);

    if let Some(sprite) = &mut self.sprite {
      sprite.render(&mut RenderArgs {
        is_focused: args.is_focused,
        dex: args.dex,
        rect: inner,
        output: args.output,
        style_sheet: args.style_sheet,
      });
    }
  }
}

/// Which list the detail page is showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetailTab {
  Stats,
  Moves,
}

impl DetailTab {
  fn index(self) -> usize {
    match self {
      DetailTab::Stats => 0,
      DetailTab::Moves => 1,
    }
  }

  fn from_index(index: usize) -> Self {
    match index {
      0 => DetailTab::Stats,
      _ => DetailTab::Moves,
    }
  }
}

impl Default for DetailTab {
  fn default() -> Self {
    DetailTab::Stats
  }
}

/// The detail page for a single Pokemon.
#[derive(Debug)]
pub struct PokemonDetail {
  name: String,
  detail: Option<Fetch<Pokemon>>,
  body: Option<DetailBody>,
  tab: DetailTab,
}

/// The parts of the detail page that exist once the Pokemon has arrived.
#[derive(Debug)]
struct DetailBody {
  pokemon: Arc<Pokemon>,
  sprite: Option<Sprite>,
  tabs: Tabs,
  stats: StatsView,
  moves: Listing,
  // The layout this body was last drawn with.
  layout: DetailLayout,
}

impl PokemonDetail {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      detail: None,
      body: None,
      tab: DetailTab::default(),
    }
  }

  /// Returns the selected tab.
  pub fn tab(&self) -> DetailTab {
    self.tab
  }

  fn select(&mut self, tab: DetailTab) -> bool {
    if self.tab == tab {
      return false;
    }
    self.tab = tab;
    if let Some(body) = &mut self.body {
      body.tabs.select(tab.index());
    }
    true
  }

  fn poll(&mut self, args: &RenderArgs) {
    if self.body.is_some() || self.name.is_empty() {
      return;
    }

    let (dex, name) = (args.dex, &self.name);
    let detail = self
      .detail
      .get_or_insert_with(|| dex.request_named::<Pokemon>(name));
    if let Some(pokemon) = detail.poll() {
      let pokemon = Arc::clone(pokemon);
      let format = args.style_sheet.format_names;
      let moves = pokemon
        .move_names()
        .into_iter()
        .map(|m| util::display_name(m, format).into_owned())
        .collect();

      let mut tabs = Tabs::new(vec!["Stats".into(), "Moves".into()]);
      tabs.select(self.tab.index());
      self.body = Some(DetailBody {
        sprite: pokemon.image().cloned().map(Sprite::new),
        tabs,
        stats: StatsView::new(Arc::clone(&pokemon)),
        moves: Listing::new(moves),
        layout: args.style_sheet.detail_layout,
        pokemon,
      });
    }
  }
}

impl Component for PokemonDetail {
  fn wants_focus(&self) -> bool {
    true
  }

  fn process_event(&mut self, args: &mut EventArgs) {
    let body = match &mut self.body {
      Some(body) => body,
      None => return,
    };

    if body.layout == DetailLayout::Stacked {
      body.moves.process_event(args);
      return;
    }

    match args.event {
      Event::Key(key) => match key.code {
        KeyCode::Char('s') => {
          if self.select(DetailTab::Stats) {
            args.commands.claim();
          }
        }
        KeyCode::Char('m') => {
          if self.select(DetailTab::Moves) {
            args.commands.claim();
          }
        }
        KeyCode::Left | KeyCode::Right => {
          body.tabs.process_event(args);
          self.tab = DetailTab::from_index(body.tabs.selection());
        }
        _ => {}
      },
      Event::Mouse(_) => {
        body.tabs.process_event(args);
        self.tab = DetailTab::from_index(body.tabs.selection());
      }
    }

    // The move list only sees input while it is on screen.
    if self.tab == DetailTab::Moves && !args.commands.is_claimed() {
      if let Some(body) = &mut self.body {
        body.moves.process_event(args);
      }
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    self.poll(args);
    let body = match &mut self.body {
      Some(body) => body,
      None => return,
    };
    if args.rect.width == 0 || args.rect.height == 0 {
      return;
    }

    let background = args
      .style_sheet
      .type_background(body.pokemon.primary_type());
    args.output.set_style(args.rect, background);

    let header_height = 12.min(args.rect.height);
    let [header, rest] = split(
      args.rect,
      Direction::Vertical,
      Constraint::Length(header_height),
    );
    let [sprite_rect, info] =
      split(header, Direction::Horizontal, Constraint::Length(32));

    if let Some(sprite) = &mut body.sprite {
      sprite.render(&mut RenderArgs {
        is_focused: false,
        dex: args.dex,
        rect: sprite_rect,
        output: args.output,
        style_sheet: args.style_sheet,
      });
    }

    let style = args.style_sheet.unfocused.patch(background);
    let lines = [
      util::capitalize(&body.pokemon.name),
      format!("Type: {}", body.pokemon.type_names().join(", ")),
    ];
    for (dy, line) in lines.iter().enumerate() {
      if (dy as u16) < info.height {
        args.output.set_stringn(
          info.x + 1,
          info.y + 1 + dy as u16,
          line,
          info.width.saturating_sub(1) as usize,
          if dy == 0 {
            style.patch(args.style_sheet.selected)
          } else {
            style
          },
        );
      }
    }

    let (is_focused, dex, style_sheet) =
      (args.is_focused, args.dex, args.style_sheet);
    let output = &mut *args.output;
    let mut child = |component: &mut dyn Component, rect: Rect, focused: bool| {
      component.render(&mut RenderArgs {
        is_focused: is_focused && focused,
        dex,
        rect,
        output: &mut *output,
        style_sheet,
      })
    };

    body.layout = style_sheet.detail_layout;
    match style_sheet.detail_layout {
      DetailLayout::Tabs => {
        let [tabs, list] = split(rest, Direction::Vertical, Constraint::Length(3));
        child(&mut body.tabs, tabs, true);
        match self.tab {
          DetailTab::Stats => child(&mut body.stats, list, false),
          DetailTab::Moves => child(&mut body.moves, list, true),
        }
      }
      DetailLayout::Stacked => {
        let stats_height = body.stats.height() + 1;
        let [stats, moves] =
          split(rest, Direction::Vertical, Constraint::Length(stats_height));
        let [label, stats] = split(stats, Direction::Vertical, Constraint::Length(1));
        child(&mut Paragraph::new("Stats:"), label, false);
        child(&mut body.stats, stats, false);
        let [label, moves] = split(moves, Direction::Vertical, Constraint::Length(1));
        child(&mut Paragraph::new("Moves:"), label, false);
        child(&mut body.moves, moves, true);
      }
    }
  }
}

/// Splits `rect` in two along `direction`, giving `first` to the first half
/// and the rest to the second.
fn split(rect: Rect, direction: Direction, first: Constraint) -> [Rect; 2] {
  let parts = Layout::default()
    .direction(direction)
    .constraints(vec![first, Constraint::Min(0)])
    .split(rect);
  [parts[0], parts[1]]
}

#[cfg(test)]
mod tests {
  use pokecat::api::canned::Canned;

  use super::*;
  use crate::testing;
  use crate::testing::BASE;
  use crate::ui::browser::Browser;
  use crate::ui::component::CommandBuffer;

  const NAMES: [&str; 3] = ["bulbasaur", "ivysaur", "venusaur"];

  fn index_url() -> String {
    format!("{}/pokemon", BASE)
  }

  fn next_url() -> String {
    format!("{}/pokemon?offset=3&limit=3", BASE)
  }

  /// Serves a first page of three Pokemon, with details and species for
  /// each.
  fn serve_first_page(canned: &Canned) {
    let next = next_url();
    canned.insert(index_url(), testing::page_json(&NAMES, Some(&next), None));
    for (i, name) in NAMES.iter().enumerate() {
      canned.insert(
        testing::pokemon_url(i + 1),
        testing::detail_json(i + 1, name, "grass"),
      );
      canned.insert(
        testing::species_url(i + 1),
        testing::species_json(name, "green"),
      );
    }
  }

  fn send(component: &mut dyn Component, dex: &Dex, event: Event) -> CommandBuffer {
    let mut commands = CommandBuffer::new();
    component.process_event(&mut EventArgs {
      is_focused: true,
      event: &event,
      dex,
      commands: &mut commands,
    });
    commands
  }

  fn grid_rect() -> Rect {
    Rect::new(0, 0, 80, 24)
  }

  fn shows_all(buf: &tui::buffer::Buffer, names: &[&str]) -> bool {
    let text = testing::text(buf);
    names.iter().all(|n| text.contains(n))
  }

  #[test]
  fn grid_renders_one_card_per_reference() {
    let (canned, dex) = testing::dex();
    serve_first_page(&canned);

    let mut grid = PokemonGrid::new();
    let buf = testing::render_until(
      &mut grid,
      &dex,
      grid_rect(),
      StyleSheet::default(),
      |_, buf| shows_all(buf, &["Bulbasaur", "Ivysaur", "Venusaur"]),
    );

    assert!(shows_all(&buf, &["Bulbasaur", "Ivysaur", "Venusaur"]));
    assert_eq!(grid.cards().len(), 3);
    assert_eq!(grid.card_rects.len(), 3);
    assert!(testing::text(&buf).contains("Type: grass"));
    for i in 1..=3 {
      assert_eq!(canned.requests_for(&testing::pokemon_url(i)), 1);
      assert_eq!(canned.requests_for(&testing::species_url(i)), 1);
    }
  }

  #[test]
  fn species_color_paints_the_card() {
    let (canned, dex) = testing::dex();
    serve_first_page(&canned);

    let style_sheet = StyleSheet::default();
    let mut grid = PokemonGrid::new();
    testing::render_until(&mut grid, &dex, grid_rect(), style_sheet, |_, buf| {
      shows_all(buf, &["Bulbasaur"])
    });

    let buf = testing::render(&mut grid, &dex, grid_rect(), style_sheet);
    let (_, rect) = grid.card_rects[0];
    let cell = buf.get(rect.x + 2, rect.y + 3);
    assert_eq!(cell.bg, style_sheet.pokedex_colors.green);
  }

  #[test]
  fn type_colored_cards_skip_the_species() {
    let (canned, dex) = testing::dex();
    serve_first_page(&canned);

    let style_sheet = StyleSheet {
      card_color: CardColor::Type,
      ..StyleSheet::default()
    };
    let mut grid = PokemonGrid::new();
    let buf = testing::render_until(
      &mut grid,
      &dex,
      grid_rect(),
      style_sheet,
      |_, buf| shows_all(buf, &["Bulbasaur", "Ivysaur", "Venusaur"]),
    );

    assert!(shows_all(&buf, &["Bulbasaur", "Ivysaur", "Venusaur"]));
    let (_, rect) = grid.card_rects[0];
    assert_eq!(buf.get(rect.x + 2, rect.y + 3).bg, style_sheet.type_colors.grass);
    for i in 1..=3 {
      assert_eq!(canned.requests_for(&testing::species_url(i)), 0);
    }
  }

  #[test]
  fn card_without_species_never_renders() {
    let (canned, dex) = testing::dex();
    canned.insert(
      testing::pokemon_url(1),
      r#"{"name": "missingno", "types": [], "species": null}"#,
    );

    let mut card = PokemonCard::new(Resource::new("missingno", testing::pokemon_url(1)));
    let buf = testing::render_for(
      &mut card,
      &dex,
      Rect::new(0, 0, 20, 10),
      StyleSheet::default(),
    );
    assert!(testing::text(&buf).trim().is_empty());
    assert!(!card.is_ready(&dex, CardColor::Species));
    assert!(card.is_ready(&dex, CardColor::Type));
  }

  #[test]
  fn hanging_detail_leaves_its_card_empty() {
    let (canned, dex) = testing::dex();
    serve_first_page(&canned);
    canned.hang(testing::pokemon_url(2));

    let mut grid = PokemonGrid::new();
    testing::render_until(&mut grid, &dex, grid_rect(), StyleSheet::default(), |_, buf| {
      shows_all(buf, &["Bulbasaur", "Venusaur"])
    });
    let buf = testing::render_for(&mut grid, &dex, grid_rect(), StyleSheet::default());

    assert!(shows_all(&buf, &["Bulbasaur", "Venusaur"]));
    assert!(!testing::text(&buf).contains("Ivysaur"));
    let (_, rect) = grid.card_rects[1];
    for y in rect.y..rect.y + rect.height {
      for x in rect.x..rect.x + rect.width {
        assert_eq!(buf.get(x, y).symbol, " ");
      }
    }
  }

  #[test]
  fn pager_controls_follow_the_cursor() {
    let (canned, dex) = testing::dex();
    serve_first_page(&canned);
    let second = ["charmander"];
    canned.insert(
      next_url(),
      testing::page_json(&second, None, Some(&index_url())),
    );

    let mut grid = PokemonGrid::new();
    let buf = testing::render_until(
      &mut grid,
      &dex,
      grid_rect(),
      StyleSheet::default(),
      |grid, _| grid.cursor().next.is_some(),
    );
    assert!(testing::line(&buf, 23).contains(NEXT_LABEL));
    assert!(!testing::line(&buf, 23).contains(PREVIOUS_LABEL));

    // No previous page: nothing happens and nothing is requested.
    let before = canned.requests().len();
    assert!(!send(&mut grid, &dex, testing::key(KeyCode::Char('p'))).is_claimed());
    testing::render(&mut grid, &dex, grid_rect(), StyleSheet::default());
    assert_eq!(canned.requests().len(), before);

    assert!(send(&mut grid, &dex, testing::key(KeyCode::Char('n'))).is_claimed());
    let buf = testing::render_until(
      &mut grid,
      &dex,
      grid_rect(),
      StyleSheet::default(),
      |grid, _| grid.cursor().next.is_none(),
    );
    assert_eq!(canned.requests_for(&next_url()), 1);
    assert_eq!(grid.cards().len(), 1);
    assert_eq!(grid.cards()[0].name(), Some("charmander"));
    assert!(testing::line(&buf, 23).contains(PREVIOUS_LABEL));
    assert!(!testing::line(&buf, 23).contains(NEXT_LABEL));

    // Next is gone now, so it is a no-op too.
    let before = canned.requests().len();
    assert!(!send(&mut grid, &dex, testing::key(KeyCode::Char(']'))).is_claimed());
    assert_eq!(canned.requests().len(), before);
  }

  #[test]
  fn clicking_previous_requests_the_previous_page() {
    let (canned, dex) = testing::dex();
    let first = format!("{}/pokemon?offset=0&limit=3", BASE);
    canned.insert(index_url(), testing::page_json(&["ivysaur"], None, Some(&first)));
    canned.insert(first.clone(), testing::page_json(&NAMES, None, None));

    let mut grid = PokemonGrid::new();
    testing::render_until(&mut grid, &dex, grid_rect(), StyleSheet::default(), |grid, _| {
      grid.cursor().previous.is_some()
    });
    let rect = grid.previous_rect.unwrap();
    assert!(send(&mut grid, &dex, testing::click(rect.x + 1, rect.y)).is_claimed());
    testing::render_until(&mut grid, &dex, grid_rect(), StyleSheet::default(), |grid, _| {
      grid.cards().len() == 3
    });
    assert_eq!(canned.requests_for(&first), 1);
    assert!(grid.previous_rect.is_none());
  }

  #[test]
  fn failed_page_leaves_the_grid_alone() {
    let (canned, dex) = testing::dex();
    serve_first_page(&canned);
    canned.fail(next_url(), 500);

    let mut grid = PokemonGrid::new();
    testing::render_until(&mut grid, &dex, grid_rect(), StyleSheet::default(), |_, buf| {
      shows_all(buf, &["Bulbasaur", "Ivysaur", "Venusaur"])
    });

    assert!(send(&mut grid, &dex, testing::key(KeyCode::Char('n'))).is_claimed());
    let buf = testing::render_until(
      &mut grid,
      &dex,
      grid_rect(),
      StyleSheet::default(),
      |grid, _| grid.request.is_none(),
    );

    assert_eq!(canned.requests_for(&next_url()), 1);
    assert_eq!(grid.cards().len(), 3);
    assert_eq!(grid.cursor().next.as_deref(), Some(next_url().as_str()));
    assert!(shows_all(&buf, &["Bulbasaur", "Ivysaur", "Venusaur"]));
  }

  #[test]
  fn enter_opens_the_selected_card() {
    let (canned, dex) = testing::dex();
    serve_first_page(&canned);

    let mut grid = PokemonGrid::new();
    testing::render_until(&mut grid, &dex, grid_rect(), StyleSheet::default(), |grid, _| {
      !grid.cards().is_empty()
    });

    assert!(send(&mut grid, &dex, testing::key(KeyCode::Right)).is_claimed());
    let mut commands = send(&mut grid, &dex, testing::key(KeyCode::Enter));
    assert!(commands.is_claimed());
    assert_eq!(
      commands.take_url().as_deref(),
      Some("pokeview://pokemon/ivysaur")
    );
  }

  fn serve_bulbasaur(canned: &Canned) -> String {
    let url = format!("{}/pokemon/bulbasaur", BASE);
    canned.insert(url.clone(), testing::BULBASAUR);
    url
  }

  fn detail_rect() -> Rect {
    Rect::new(0, 0, 60, 30)
  }

  #[test]
  fn detail_starts_on_stats_and_switches_locally() {
    let (canned, dex) = testing::dex();
    serve_bulbasaur(&canned);

    let mut detail = PokemonDetail::new("bulbasaur");
    let buf = testing::render_until(
      &mut detail,
      &dex,
      detail_rect(),
      StyleSheet::default(),
      |_, buf| shows_all(buf, &["Bulbasaur"]),
    );
    assert_eq!(detail.tab(), DetailTab::Stats);
    assert!(shows_all(&buf, &["Type: grass, poison", "special defense"]));
    assert!(!testing::text(&buf).contains("razor wind"));

    let requests = canned.requests().len();
    assert!(send(&mut detail, &dex, testing::key(KeyCode::Char('m'))).is_claimed());
    let buf = testing::render(&mut detail, &dex, detail_rect(), StyleSheet::default());
    assert_eq!(detail.tab(), DetailTab::Moves);
    assert!(shows_all(&buf, &["razor wind", "swords dance"]));
    assert!(!testing::text(&buf).contains("special defense"));

    assert!(send(&mut detail, &dex, testing::key(KeyCode::Left)).is_claimed());
    let buf = testing::render(&mut detail, &dex, detail_rect(), StyleSheet::default());
    assert_eq!(detail.tab(), DetailTab::Stats);
    assert!(testing::text(&buf).contains("special defense"));
    assert_eq!(canned.requests().len(), requests);
  }

  fn selected_move(detail: &PokemonDetail) -> Option<&str> {
    detail.body.as_ref().and_then(|body| body.moves.selected())
  }

  #[test]
  fn clicks_on_the_move_list_keep_the_moves_tab() {
    let (canned, dex) = testing::dex();
    serve_bulbasaur(&canned);

    let mut detail = PokemonDetail::new("bulbasaur");
    testing::render_until(
      &mut detail,
      &dex,
      detail_rect(),
      StyleSheet::default(),
      |_, buf| shows_all(buf, &["Bulbasaur"]),
    );

    // The tabs sit on rows 12..15 under the header; "Moves" starts at
    // column 13.
    assert!(send(&mut detail, &dex, testing::click(15, 13)).is_claimed());
    assert_eq!(detail.tab(), DetailTab::Moves);
    let buf = testing::render(&mut detail, &dex, detail_rect(), StyleSheet::default());
    assert!(testing::line(&buf, 16).contains("swords dance"));

    assert!(send(&mut detail, &dex, testing::click(5, 16)).is_claimed());
    assert_eq!(detail.tab(), DetailTab::Moves);
    assert_eq!(selected_move(&detail), Some("swords dance"));

    assert!(send(&mut detail, &dex, testing::click(3, 13)).is_claimed());
    assert_eq!(detail.tab(), DetailTab::Stats);
  }

  #[test]
  fn stats_tab_ignores_move_list_input() {
    let (canned, dex) = testing::dex();
    serve_bulbasaur(&canned);

    let mut detail = PokemonDetail::new("bulbasaur");
    testing::render_until(
      &mut detail,
      &dex,
      detail_rect(),
      StyleSheet::default(),
      |_, buf| shows_all(buf, &["Bulbasaur"]),
    );

    // Draw the moves once, then hide them again.
    send(&mut detail, &dex, testing::key(KeyCode::Char('m')));
    testing::render(&mut detail, &dex, detail_rect(), StyleSheet::default());
    send(&mut detail, &dex, testing::key(KeyCode::Char('s')));
    testing::render(&mut detail, &dex, detail_rect(), StyleSheet::default());

    assert!(!send(&mut detail, &dex, testing::key(KeyCode::Down)).is_claimed());
    assert!(!send(&mut detail, &dex, testing::click(5, 16)).is_claimed());
    assert_eq!(detail.tab(), DetailTab::Stats);
    assert_eq!(selected_move(&detail), Some("razor wind"));
  }

  #[test]
  fn detail_without_formatting_shows_raw_names() {
    let (canned, dex) = testing::dex();
    serve_bulbasaur(&canned);
    let style_sheet = StyleSheet {
      format_names: false,
      ..StyleSheet::default()
    };

    let mut detail = PokemonDetail::new("bulbasaur");
    testing::render_until(&mut detail, &dex, detail_rect(), style_sheet, |_, buf| {
      shows_all(buf, &["Bulbasaur"])
    });
    send(&mut detail, &dex, testing::key(KeyCode::Char('m')));
    let buf = testing::render(&mut detail, &dex, detail_rect(), style_sheet);
    assert!(shows_all(&buf, &["razor-wind", "swords-dance"]));
  }

  #[test]
  fn stacked_detail_shows_both_lists() {
    let (canned, dex) = testing::dex();
    serve_bulbasaur(&canned);
    let style_sheet = StyleSheet {
      detail_layout: DetailLayout::Stacked,
      ..StyleSheet::default()
    };

    let mut detail = PokemonDetail::new("bulbasaur");
    let buf = testing::render_until(
      &mut detail,
      &dex,
      detail_rect(),
      style_sheet,
      |_, buf| shows_all(buf, &["Bulbasaur"]),
    );
    assert!(shows_all(
      &buf,
      &["Stats:", "special defense", "Moves:", "razor wind"]
    ));
  }

  #[test]
  fn detail_background_follows_the_first_type() {
    let (canned, dex) = testing::dex();
    serve_bulbasaur(&canned);
    let style_sheet = StyleSheet::default();

    let mut detail = PokemonDetail::new("bulbasaur");
    let buf = testing::render_until(
      &mut detail,
      &dex,
      detail_rect(),
      style_sheet,
      |_, buf| shows_all(buf, &["Bulbasaur"]),
    );
    assert_eq!(buf.get(59, 29).bg, style_sheet.type_colors.grass);
  }

  #[test]
  fn hanging_detail_page_stays_empty() {
    let (canned, dex) = testing::dex();
    canned.hang(format!("{}/pokemon/mew", BASE));

    let mut detail = PokemonDetail::new("mew");
    let buf = testing::render_for(&mut detail, &dex, detail_rect(), StyleSheet::default());
    assert!(testing::text(&buf).trim().is_empty());
    assert_eq!(canned.requests_for(&format!("{}/pokemon/mew", BASE)), 1);
  }

  #[test]
  fn empty_name_requests_nothing() {
    let (canned, dex) = testing::dex();
    let mut detail = PokemonDetail::new("");
    let buf = testing::render_for(&mut detail, &dex, detail_rect(), StyleSheet::default());
    assert!(testing::text(&buf).trim().is_empty());
    assert!(canned.requests().is_empty());
  }

  /// Renders `browser` until `done` holds or a couple of seconds pass.
  fn settle(browser: &mut Browser, dex: &Dex, done: impl Fn(&str) -> bool) -> String {
    let rect = Rect::new(0, 0, 82, 32);
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(2);
    loop {
      let mut buf = tui::buffer::Buffer::empty(rect);
      browser.render_to(dex, rect, &mut buf);
      let text = testing::text(&buf);
      if done(&text) || std::time::Instant::now() > deadline {
        return text;
      }
      std::thread::sleep(std::time::Duration::from_millis(5));
    }
  }

  #[test]
  fn leaving_and_returning_refetches_everything() {
    let (canned, dex) = testing::dex();
    serve_first_page(&canned);
    let detail = serve_bulbasaur(&canned);

    let mut browser = Browser::new(LIST_URL, StyleSheet::default());
    settle(&mut browser, &dex, |t| t.contains("Bulbasaur"));

    browser.process_event(testing::key_event(KeyCode::Enter), &dex);
    assert_eq!(browser.url(), "pokeview://pokemon/bulbasaur");
    let text = settle(&mut browser, &dex, |t| t.contains("special defense"));
    // The link takes one row; the detail gets everything under it.
    let lines = text.lines().collect::<Vec<_>>();
    assert!(lines[1].contains("← Back to Pokemon List"));
    assert!(lines[3].contains("Bulbasaur"));

    // Move to the moves tab, then leave.
    browser.process_event(testing::key_event(KeyCode::Char('m')), &dex);
    browser.process_event(testing::key_event(KeyCode::Backspace), &dex);
    assert_eq!(browser.url(), LIST_URL);
    settle(&mut browser, &dex, |t| t.contains("Bulbasaur"));
    assert_eq!(canned.requests_for(&index_url()), 2);

    browser.process_event(testing::key_event(KeyCode::PageDown), &dex);
    assert_eq!(browser.url(), "pokeview://pokemon/bulbasaur");
    let text = settle(&mut browser, &dex, |t| t.contains("special defense"));
    assert_eq!(canned.requests_for(&detail), 2);
    // The tab selection did not survive either.
    assert!(!text.contains("razor wind"));
  }
}
