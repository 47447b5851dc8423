//! Scrollable lists of text.

use crossterm::event::KeyCode;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEventKind;

use tui::widgets::Widget;

use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::widgets::ScrollBar;
use crate::util::rect_contains;

/// A list of one-line entries, with a highlighted row that scrolls.
#[derive(Clone, Debug)]
pub struct Listing {
  items: Vec<String>,
  index: usize,
  offset: usize,
  // Where this list was last drawn, for mouse hit-testing and paging.
  last_rect: tui::layout::Rect,
}

impl Listing {
  pub fn new(items: Vec<String>) -> Self {
    Self {
      items,
      index: 0,
      offset: 0,
      last_rect: Default::default(),
    }
  }

  pub fn selected(&self) -> Option<&str> {
    self.items.get(self.index).map(String::as_str)
  }
}

impl Component for Listing {
  fn wants_focus(&self) -> bool {
    !self.items.is_empty()
  }

  fn process_event(&mut self, args: &mut EventArgs) {
    let page = self.last_rect.height.max(1) as isize;
    let delta = match args.event {
      Event::Key(key) => {
        let m = key.modifiers;
        match key.code {
          KeyCode::Up => -1,
          KeyCode::Down => 1,
          KeyCode::Char('u') if m == KeyModifiers::CONTROL => -page,
          KeyCode::Char('d') if m == KeyModifiers::CONTROL => page,
          _ => return,
        }
      }
      Event::Mouse(m) => match m.kind {
        MouseEventKind::ScrollUp => -1,
        MouseEventKind::ScrollDown => 1,
        MouseEventKind::Up(MouseButton::Left) => {
          if rect_contains(self.last_rect, m.column, m.row) {
            let index = self.offset + (m.row - self.last_rect.y) as usize;
            if index < self.items.len() {
              self.index = index;
              args.commands.claim();
            }
          }
          return;
        }
        _ => return,
      },
    };

    let new_idx = ((self.index as isize).saturating_add(delta).max(0) as usize)
      .min(self.items.len().saturating_sub(1));
    if self.index != new_idx {
      self.index = new_idx;
      args.commands.claim();
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    self.last_rect = args.rect;
    if args.rect.width == 0 || args.rect.height == 0 || self.items.is_empty() {
      return;
    }

    let style = if args.is_focused {
      args.style_sheet.focused
    } else {
      args.style_sheet.unfocused
    };

    // Scroll just far enough to keep the selection on screen.
    let height = args.rect.height as usize;
    if self.index < self.offset {
      self.offset = self.index;
    } else if self.index >= self.offset + height {
      self.offset = self.index + 1 - height;
    }

    let width = args.rect.width.saturating_sub(2) as usize;
    for (row, (i, item)) in self
      .items
      .iter()
      .enumerate()
      .skip(self.offset)
      .take(height)
      .enumerate()
    {
      let is_selected = i == self.index;
      let (symbol, style) = if is_selected && args.is_focused {
        ("➤ ", style.patch(args.style_sheet.selected))
      } else {
        ("- ", style)
      };
      let y = args.rect.y + row as u16;
      args.output.set_stringn(args.rect.x, y, symbol, args.rect.width as usize, style);
      if width > 0 {
        args.output.set_stringn(args.rect.x + 2, y, item, width, style);
      }
    }

    if self.items.len() > height {
      let ratio = self.index as f64 / (self.items.len() - 1) as f64;
      ScrollBar::new(ratio).style(style).render(args.rect, args.output);
    }
  }
}
