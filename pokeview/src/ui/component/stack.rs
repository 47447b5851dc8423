//! A stack of components arranged horizontally or vertically.

use crossterm::event::KeyCode;

use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Layout;
use tui::layout::Rect;

use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::LayoutHintArgs;
use crate::ui::component::RenderArgs;
use crate::util::rect_contains;

/// A stack of components.
#[derive(Debug)]
pub struct Stack {
  direction: Dir,
  nodes: Vec<Node>,
  focus_idx: Option<usize>,
}

/// A direction for a stack to laid out in.
#[derive(Copy, Clone, Debug)]
pub enum Dir {
  /// Lays out the stack horizontally.
  Horizontal,
  /// Lays out the stack vertically.
  Vertical,
}

#[derive(Debug)]
struct Node {
  size_constraint: Option<Constraint>,
  last_size: Rect,
  component: Box<dyn Component>,
}

impl Stack {
  pub fn new(direction: Dir, body: impl FnOnce(&mut Builder)) -> Self {
    let mut b = Builder::new(direction);
    body(&mut b);
    b.into()
  }
}

/// A builder for a [`Stack`].
///
/// See [`Stack::new()`].
pub struct Builder {
  direction: Dir,
  nodes: Vec<Node>,
  focus_idx: Option<usize>,
}

impl Builder {
  fn new(direction: Dir) -> Self {
    Self {
      direction,
      nodes: Vec::new(),
      focus_idx: None,
    }
  }

  /// Focuses the `focus_idx`th node when the stack is first shown, rather
  /// than the first focusable one.
  pub fn default_focus(&mut self, focus_idx: usize) -> &mut Self {
    debug_assert!(focus_idx <= self.nodes.len());
    self.focus_idx = Some(focus_idx);
    self
  }

  pub fn add(&mut self, component: impl Component + 'static) -> &mut Self {
    self.nodes.push(Node {
      size_constraint: None,
      last_size: Rect::default(),
      component: Box::new(component),
    });
    self
  }

  pub fn add_constrained(
    &mut self,
    constraint: Constraint,
    component: impl Component + 'static,
  ) -> &mut Self {
    self.nodes.push(Node {
      size_constraint: Some(constraint),
      last_size: Rect::default(),
      component: Box::new(component),
    });
    self
  }
}

impl From<Builder> for Stack {
  fn from(b: Builder) -> Self {
    Self {
      direction: b.direction,
      nodes: b.nodes,
      focus_idx: b.focus_idx,
    }
  }
}

impl Component for Stack {
  fn wants_all_events(&self) -> bool {
    true
  }

  fn wants_focus(&self) -> bool {
    self.nodes.iter().any(|n| n.component.wants_focus())
  }

  fn process_event(&mut self, args: &mut EventArgs) {
    for (i, node) in self.nodes.iter_mut().enumerate() {
      let is_focused = args.is_focused && self.focus_idx == Some(i);

      // Do not deliver user-interaction events to invisible elements.
      if node.last_size.width == 0 || node.last_size.height == 0 {
        continue;
      }

      if !node.component.wants_all_events() {
        match args.event {
          Event::Key(_) if !is_focused => continue,
          Event::Mouse(m)
            if !rect_contains(node.last_size, m.column, m.row) =>
          {
            continue
          }
          _ => {}
        }
      }

      node.component.process_event(&mut EventArgs {
        is_focused,
        event: args.event,
        dex: args.dex,
        commands: args.commands,
      });
      if args.commands.is_claimed() {
        return;
      }
    }

    if !args.is_focused {
      return;
    }

    if let Event::Key(key) = args.event {
      let delta = match (self.direction, key.code) {
        (Dir::Vertical, KeyCode::Up) => -1,
        (Dir::Vertical, KeyCode::Down) => 1,
        (Dir::Horizontal, KeyCode::Left) => -1,
        (Dir::Horizontal, KeyCode::Right) => 1,
        _ => return,
      };

      let old_val = self.focus_idx.unwrap_or(0);
      let mut new_val = old_val as isize;
      loop {
        new_val += delta;
        if new_val < 0 {
          return;
        }

        match self.nodes.get(new_val as usize) {
          // Do not focus on zero-sized elements, if we can avoid it.
          Some(node)
            if node.last_size.width == 0 || node.last_size.height == 0 =>
          {
            continue
          }
          Some(node) if node.component.wants_focus() => break,
          Some(_) => continue,
          None => return,
        }
      }

      if old_val != new_val as usize {
        self.focus_idx = Some(new_val as usize);
        args.commands.claim();
      }
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let direction = match self.direction {
      Dir::Horizontal => Direction::Horizontal,
      Dir::Vertical => Direction::Vertical,
    };

    let len = self.nodes.len();
    let mut constraints = Vec::new();
    for node in &self.nodes {
      let constraint = node
        .size_constraint
        .or_else(|| {
          node.component.layout_hint(&LayoutHintArgs {
            direction: direction.clone(),
          })
        })
        .unwrap_or(Constraint::Ratio(1, len as u32));
      constraints.push(constraint);
    }

    // Point the focus at the first focusable node, if nothing has claimed it
    // yet.
    if self.focus_idx.is_none() {
      self.focus_idx = self
        .nodes
        .iter()
        .position(|node| node.component.wants_focus());
    }

    let layout = Layout::default()
      .direction(direction)
      .constraints(constraints)
      .split(args.rect);

    for (i, (node, rect)) in
      self.nodes.iter_mut().zip(layout.into_iter()).enumerate()
    {
      node.last_size = rect;
      node.component.render(&mut RenderArgs {
        is_focused: args.is_focused && self.focus_idx == Some(i),
        dex: args.dex,
        output: args.output,
        style_sheet: args.style_sheet,
        rect,
      });
    }
  }
}
