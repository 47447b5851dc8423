//! Tab selectors.

use std::iter;

use crossterm::event::KeyCode;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use tui::layout::Rect;
use tui::text::Span;
use tui::text::Spans;
use tui::text::Text;
use tui::widgets::Paragraph;
use tui::widgets::Widget;

use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::util::rect_contains;
use crate::util::SelectedVec;

/// A row of tab labels, exactly one of which is selected.
///
/// `Tabs` only tracks the selection; whoever owns it decides what to show
/// for each tab.
#[derive(Clone, Debug)]
pub struct Tabs {
  tabs: SelectedVec<String>,
  // X coordinate at which each tab starts, plus one past the last tab.
  rendered_boundaries: Vec<u16>,
  last_rect: Rect,
}

impl Tabs {
  pub fn new(labels: Vec<String>) -> Self {
    Self {
      tabs: labels.into(),
      rendered_boundaries: Vec::new(),
      last_rect: Rect::default(),
    }
  }

  /// Returns the index of the selected tab.
  pub fn selection(&self) -> usize {
    self.tabs.selection()
  }

  /// Selects a tab by index; returns whether anything changed.
  pub fn select(&mut self, index: usize) -> bool {
    self.tabs.select(index)
  }

  fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
    if !rect_contains(self.last_rect, column, row) {
      return None;
    }
    self
      .rendered_boundaries
      .windows(2)
      .position(|w| w[0] <= column && column < w[1])
  }
}

impl Component for Tabs {
  fn wants_focus(&self) -> bool {
    true
  }

  fn process_event(&mut self, args: &mut EventArgs) {
    let changed = match args.event {
      Event::Key(k) => match k.code {
        KeyCode::Left => self.tabs.shift(-1),
        KeyCode::Right => self.tabs.shift(1),
        _ => false,
      },
      Event::Mouse(MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column,
        row,
        ..
      }) => match self.tab_at(*column, *row) {
        Some(index) => self.tabs.select(index),
        None => false,
      },
      _ => false,
    };

    if changed {
      args.commands.claim();
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let style = if args.is_focused {
      args.style_sheet.focused
    } else {
      args.style_sheet.unfocused
    };
    let selected_style = style.patch(args.style_sheet.selected);

    // What we're going for:
    //    ▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁
    //   ╱  Stats  ╲ Moves  ╲
    // ▔▔           ▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔

    self.last_rect = args.rect;
    self.rendered_boundaries.clear();
    self.rendered_boundaries.push(args.rect.x + 2);
    let mut top = vec![Span::styled("  ", style)];
    let mut middle = vec![Span::styled("  ", style)];
    let mut bottom = vec![Span::styled("▔▔", style)];

    let selection = self.tabs.selection();
    let last = self.tabs.len().saturating_sub(1);
    for (i, label) in self.tabs.iter().enumerate() {
      let (text, tab_style, underline) = if i < selection {
        (format!("╱  {} ", label), style, '▔')
      } else if i > selection {
        (format!(" {}  ╲", label), style, '▔')
      } else {
        (format!("╱  {}  ╲", label), selected_style, ' ')
      };
      let width = Span::raw(text.as_str()).width();

      let left = if i == 0 && i <= selection { ' ' } else { '▁' };
      let right = if i == last && i >= selection { ' ' } else { '▁' };
      let top_bar = iter::once(left)
        .chain(iter::repeat('▁').take(width.saturating_sub(2)))
        .chain(iter::once(right))
        .collect::<String>();

      let start = self.rendered_boundaries.last().copied().unwrap_or_default();
      self.rendered_boundaries.push(start + width as u16);

      top.push(Span::styled(top_bar, tab_style));
      middle.push(Span::styled(text, tab_style));
      bottom.push(Span::styled(
        iter::repeat(underline).take(width).collect::<String>(),
        tab_style,
      ));
    }

    let used: usize = bottom.iter().map(|s| s.width()).sum();
    let rest_len = (args.rect.width as usize).saturating_sub(used);
    bottom.push(Span::styled(
      iter::repeat('▔').take(rest_len).collect::<String>(),
      style,
    ));

    Paragraph::new(Text::from(vec![
      Spans::from(top),
      Spans::from(middle),
      Spans::from(bottom),
    ]))
    .render(args.rect, args.output);
  }
}
