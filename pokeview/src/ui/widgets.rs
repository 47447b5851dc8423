//! `tui` widgets that are not complex enough to be `Component`s.

use std::iter;

use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::style::Style;
use tui::symbols;
use tui::text::Span;
use tui::text::Spans;
use tui::widgets::Widget;

/// A frame that wraps around a rectangle with a `pokeview`-specific style:
/// a bar above with a title, and a bar below with a footer.
#[derive(Clone, Debug)]
pub struct Chrome<'a> {
  title: Option<Spans<'a>>,
  footer: Option<Spans<'a>>,
  is_focused: bool,
  style: Style,
  focused_style: Style,
  pipe: &'a str,
}

impl<'a> Chrome<'a> {
  pub fn new() -> Self {
    Self {
      title: None,
      footer: None,
      is_focused: false,
      style: Style::default(),
      focused_style: Style::default(),
      pipe: symbols::block::ONE_QUARTER,
    }
  }

  pub fn title(mut self, title: impl Into<Spans<'a>>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn footer(mut self, footer: impl Into<Spans<'a>>) -> Self {
    self.footer = Some(footer.into());
    self
  }

  /// Highlights the title.
  pub fn focus(mut self, focused: bool) -> Self {
    self.is_focused = focused;
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  pub fn focused_style(mut self, style: Style) -> Self {
    self.focused_style = style;
    self
  }

  /// Returns the area left over inside the chrome's bars.
  pub fn inner(&self, rect: Rect) -> Rect {
    Rect::new(
      rect.x + 1,
      rect.y + 1,
      rect.width.saturating_sub(2),
      rect.height.saturating_sub(2),
    )
  }

  fn bar(&self, spans: Option<&Spans<'a>>, is_focused: bool, width: u16) -> Spans<'a> {
    let focused_style = self.style.patch(self.focused_style);
    let mut bar = Spans::default();
    bar.0.push(Span::styled(self.pipe, self.style));
    bar.0.push(Span::styled(self.pipe, self.style));

    if let Some(Spans(spans)) = spans {
      bar.0.push(Span::styled(" ", self.style.add_modifier(Modifier::REVERSED)));
      for span in spans {
        let mut span = span.clone();
        span.style = if is_focused {
          focused_style.patch(span.style)
        } else {
          self.style.patch(span.style)
        }
        .add_modifier(Modifier::REVERSED);
        bar.0.push(span);
      }
      bar.0.push(Span::styled(" ", self.style.add_modifier(Modifier::REVERSED)));
    }

    let rest_len = (width as usize).saturating_sub(bar.width());
    bar.0.push(Span::styled(
      iter::repeat(self.pipe).take(rest_len).collect::<String>(),
      self.style,
    ));
    bar
  }
}

impl Widget for Chrome<'_> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.height < 2 || rect.width == 0 {
      return;
    }

    let title = self.bar(self.title.as_ref(), self.is_focused, rect.width);
    let footer = self.bar(self.footer.as_ref(), false, rect.width);
    buf.set_spans(rect.x, rect.y, &title, rect.width);
    buf.set_spans(rect.x, rect.y + rect.height - 1, &footer, rect.width);
  }
}

/// A scrollbar indicating how far down a list the user has scrolled.
#[derive(Clone, Debug)]
pub struct ScrollBar {
  ratio: f64,
  style: Style,
}

impl ScrollBar {
  pub fn new(ratio: f64) -> Self {
    Self {
      ratio,
      style: Style::default(),
    }
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }
}

impl Widget for ScrollBar {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    let ratio = if self.ratio < 0.0 || self.ratio.is_nan() {
      0.0
    } else if self.ratio > 1.0 {
      1.0
    } else {
      self.ratio
    };
    let height = rect.height;
    if height == 0 || rect.width == 0 {
      return;
    }

    let selected = ((height - 1) as f64 * ratio) as u16;
    let x = rect.x + rect.width - 1;
    for i in 0..height {
      let cell = buf.get_mut(x, rect.y + i);
      let symbol = match (i == selected, i) {
        (true, 0) => "▄",
        (true, i) if i == height - 1 => "▀",
        (true, _) => "█",
        (false, 0) => "┬",
        (false, i) if i == height - 1 => "┴",
        (false, _) => "│",
      };
      cell.set_symbol(symbol);
      cell.set_style(self.style);
    }
  }
}

/// A one-line clickable label, drawn as `[ label ]`.
#[derive(Clone, Debug)]
pub struct Button<'a> {
  label: &'a str,
  style: Style,
}

impl<'a> Button<'a> {
  pub fn new(label: &'a str) -> Self {
    Self {
      label,
      style: Style::default(),
    }
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  /// Returns how many cells wide this button draws.
  pub fn width(&self) -> u16 {
    Span::raw(self.label).width() as u16 + 4
  }
}

impl Widget for Button<'_> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.height == 0 {
      return;
    }
    let text = format!("[ {} ]", self.label);
    buf.set_stringn(rect.x, rect.y, text, rect.width as usize, self.style);
  }
}
