//! Browseable pages.

use tui::widgets::Widget as _;

use crate::ui::component::Component;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::navigation::Handler;
use crate::ui::widgets::Chrome;

/// The key hints shown in every page's footer.
const KEY_HINTS: &str = "⌫ back  PgDn forward  q quit";

/// A routed component inside the browser chrome.
///
/// A `Page` is always built from scratch out of its URL; nothing from a
/// previous visit to the same URL survives.
#[derive(Debug)]
pub struct Page {
  url: String,
  root: Option<Box<dyn Component>>,
}

impl Page {
  pub fn new(url: String, handler: &Handler) -> Self {
    let root = handler.navigate_to(&url);
    if root.is_none() {
      tracing::info!(%url, "no page for url");
    }
    Self { url, root }
  }

  pub fn url(&self) -> &str {
    &self.url
  }
}

impl Component for Page {
  fn wants_focus(&self) -> bool {
    true
  }

  fn wants_all_events(&self) -> bool {
    true
  }

  fn process_event(&mut self, args: &mut EventArgs) {
    if let Some(root) = &mut self.root {
      root.process_event(args);
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let chrome = Chrome::new()
      .title(self.url.as_str())
      .footer(format!("pokeview v{} | {}", env!("CARGO_PKG_VERSION"), KEY_HINTS))
      .focus(args.is_focused)
      .style(args.style_sheet.unfocused)
      .focused_style(args.style_sheet.focused.patch(args.style_sheet.selected));
    let rect = args.rect;
    args.rect = chrome.inner(rect);
    chrome.render(rect, args.output);
    if args.rect.width == 0 || args.rect.height == 0 {
      return;
    }

    match &mut self.root {
      Some(root) => root.render(args),
      None => {
        args.output.set_stringn(
          args.rect.x,
          args.rect.y,
          format!("Not found: {}", self.url),
          args.rect.width as usize,
          args.style_sheet.unfocused,
        );
      }
    }
  }
}
