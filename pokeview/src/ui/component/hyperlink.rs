//! Basic hyperlinks, for linking between pages.

use crossterm::event::KeyCode;
use crossterm::event::MouseButton;
use crossterm::event::MouseEventKind;

use tui::layout::Constraint;
use tui::layout::Direction;
use tui::text::Span;
use tui::text::Spans;
use tui::widgets::Paragraph;
use tui::widgets::Widget;

use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::LayoutHintArgs;
use crate::ui::component::RenderArgs;

/// A hyperlink, followed with Enter or a left click.
#[derive(Clone, Debug)]
pub struct Hyperlink {
  url: String,
  label: Option<String>,
  focused_delims: Option<(String, String)>,
}

impl Hyperlink {
  pub fn new(url: impl ToString) -> Self {
    Self {
      url: url.to_string(),
      label: None,
      focused_delims: None,
    }
  }

  pub fn label(mut self, label: impl ToString) -> Self {
    self.label = Some(label.to_string());
    self
  }

  pub fn focused_delims(
    mut self,
    (l, r): (impl ToString, impl ToString),
  ) -> Self {
    self.focused_delims = Some((l.to_string(), r.to_string()));
    self
  }

  fn follow(&self, args: &mut EventArgs) {
    args.commands.claim();
    args.commands.navigate_to(self.url.clone());
  }
}

impl Component for Hyperlink {
  fn wants_focus(&self) -> bool {
    true
  }

  fn process_event(&mut self, args: &mut EventArgs) {
    match args.event {
      Event::Key(key) if key.code == KeyCode::Enter => self.follow(args),
      Event::Mouse(m) if m.kind == MouseEventKind::Up(MouseButton::Left) => {
        self.follow(args)
      }
      _ => {}
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let label = self.label.as_ref().unwrap_or(&self.url);
    let text = if args.is_focused {
      let (l, r) = self
        .focused_delims
        .as_ref()
        .map(|(l, r)| (l.as_str(), r.as_str()))
        .unwrap_or_default();
      let style = args.style_sheet.focused.patch(args.style_sheet.selected);
      Spans::from(vec![
        Span::styled(l, style),
        Span::styled(label.as_str(), style),
        Span::styled(r, style),
      ])
    } else {
      Spans::from(vec![Span::styled(
        label.as_str(),
        args.style_sheet.unfocused,
      )])
    };
    Paragraph::new(text).render(args.rect, args.output);
  }

  fn layout_hint(&self, args: &LayoutHintArgs) -> Option<Constraint> {
    match args.direction {
      Direction::Vertical => Some(Constraint::Length(1)),
      Direction::Horizontal => {
        let label = self.label.as_ref().unwrap_or(&self.url);
        let width = |s: &str| Span::raw(s).width();
        let delims = self
          .focused_delims
          .as_ref()
          .map(|(l, r)| width(l.as_str()) + width(r.as_str()))
          .unwrap_or_default();
        Some(Constraint::Length((width(label.as_str()) + delims) as u16))
      }
    }
  }
}
