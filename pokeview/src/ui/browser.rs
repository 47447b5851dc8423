//! The root UI type.

use crossterm::event::KeyCode;

use tui::backend::Backend;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::widgets::Widget;
use tui::Frame;

use crate::dex::Dex;
use crate::ui::component::page::Page;
use crate::ui::component::CommandBuffer;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::component::StyleSheet;
use crate::ui::navigation::Handler;
use crate::ui::pages;

/// The root browser type.
pub struct Browser {
  window: Window,
  url_handler: Handler,
  style_sheet: StyleSheet,
}

impl Browser {
  /// Creates a browser showing `url`.
  pub fn new(url: impl Into<String>, style_sheet: StyleSheet) -> Self {
    Self::with_handler(url, pages::get(), style_sheet)
  }

  fn with_handler(
    url: impl Into<String>,
    url_handler: Handler,
    style_sheet: StyleSheet,
  ) -> Self {
    let url = url.into();
    tracing::info!(%url, "opening");
    Self {
      window: Window::new(url, &url_handler),
      url_handler,
      style_sheet,
    }
  }

  /// Returns the URL currently being displayed.
  pub fn url(&self) -> &str {
    self.window.page.url()
  }

  /// Propagates a terminal event down through the view tree.
  ///
  /// Keys that the page does not claim may be used by the browser; for
  /// example, backspace will go back one step in history.
  pub fn process_event(&mut self, e: crossterm::event::Event, dex: &Dex) {
    let event = match e {
      crossterm::event::Event::Key(k) => Event::Key(k),
      crossterm::event::Event::Mouse(m) => Event::Mouse(m),
      crossterm::event::Event::Resize(..) => return,
    };

    let mut commands = CommandBuffer::new();
    self.window.page.process_event(&mut EventArgs {
      is_focused: true,
      event: &event,
      dex,
      commands: &mut commands,
    });

    if let Some(url) = commands.take_url() {
      self.window.navigate_to(url, &self.url_handler);
      return;
    }
    if commands.is_claimed() {
      return;
    }

    if let Event::Key(k) = event {
      match k.code {
        KeyCode::Backspace | KeyCode::PageUp => {
          self.window.shift_history(-1, &self.url_handler)
        }
        KeyCode::PageDown => self.window.shift_history(1, &self.url_handler),
        _ => {}
      }
    }
  }

  /// Renders the current page into `buf`.
  pub fn render_to(&mut self, dex: &Dex, rect: Rect, buf: &mut Buffer) {
    self.window.page.render(&mut RenderArgs {
      is_focused: true,
      dex,
      rect,
      output: buf,
      style_sheet: self.style_sheet,
    });
  }

  /// Renders the UI onto a `Frame` by recursively rendering every subcomponent.
  pub fn render<B: Backend>(&mut self, dex: &Dex, f: &mut Frame<B>) {
    struct BrowserAsWidget<'a> {
      b: &'a mut Browser,
      dex: &'a Dex,
    }
    impl Widget for BrowserAsWidget<'_> {
      fn render(self, rect: Rect, buf: &mut Buffer) {
        self.b.render_to(self.dex, rect, buf)
      }
    }

    let size = f.size();
    f.render_widget(BrowserAsWidget { b: self, dex }, size);
  }
}

/// A single viewing window with a history of URLs.
///
/// Only the current page is alive; every other history entry is just a URL.
struct Window {
  history: Vec<String>,
  current: usize,
  page: Page,
}

impl Window {
  fn new(url: String, handler: &Handler) -> Self {
    Self {
      page: Page::new(url.clone(), handler),
      history: vec![url],
      current: 0,
    }
  }

  /// Navigates to `url`, discarding any forward history.
  fn navigate_to(&mut self, url: String, handler: &Handler) {
    tracing::info!(%url, "navigating");
    self.current += 1;
    self.history.truncate(self.current);
    self.history.push(url.clone());
    self.page = Page::new(url, handler);
  }

  /// Moves the current page pointer forwards or backwards the given number of
  /// pages in the history stack, rebuilding the page it lands on.
  fn shift_history(&mut self, delta: isize, handler: &Handler) {
    let new_idx = ((self.current as isize).saturating_add(delta).max(0)
      as usize)
      .min(self.history.len() - 1);
    if new_idx == self.current {
      return;
    }

    self.current = new_idx;
    let url = self.history[new_idx].clone();
    tracing::info!(%url, "history");
    self.page = Page::new(url, handler);
  }
}
