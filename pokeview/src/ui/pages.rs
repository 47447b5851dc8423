//! Definitions of all pages that `pokeview` can display.

use tui::layout::Constraint;

use crate::ui::component::catalog::PokemonDetail;
use crate::ui::component::catalog::PokemonGrid;
use crate::ui::component::catalog::LIST_URL;
use crate::ui::component::hyperlink::Hyperlink;
use crate::ui::component::stack::Dir;
use crate::ui::component::stack::Stack;
use crate::ui::navigation::Handler;

pub fn get() -> Handler {
  Handler::new()
    .handle(LIST_URL, |_, _| Some(Box::new(PokemonGrid::new())))
    .handle("pokeview://pokemon/{}", |_, path| {
      let name = path.get(0).copied().unwrap_or_default().to_string();
      Some(Box::new(Stack::new(Dir::Vertical, |b| {
        b.add(
          Hyperlink::new(LIST_URL)
            .label("← Back to Pokemon List")
            .focused_delims(("> ", "")),
        );
        b.add_constrained(Constraint::Min(0), PokemonDetail::new(name));
        b.default_focus(1);
      })))
    })
}
