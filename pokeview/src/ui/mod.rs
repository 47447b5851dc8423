//! The pokeview UI.
//!
//! The UI is a small web browser over PokeAPI. The [`browser::Browser`] shows
//! one window, which displays a [`component::page::Page`] and keeps a history
//! of URLs, like a browser tab. Moving through the history rebuilds the page
//! from its URL, so nothing a page loaded survives leaving it.
//!
//! Each page is a tree of components. Each node in the tree is either a leaf
//! component or a [`component::stack::Stack`] of components laid out in one
//! direction.
//!
//! Each leaf component supports two operations:
//! - Process input.
//! - Render.
//!
//! Keys the browser does not intercept go to the focused component; mouse
//! events go to whatever is under the cursor. Rendering is done recursively
//! every frame, and is also when components check on their downloads.

pub mod browser;
pub mod component;
pub mod navigation;
pub mod pages;
pub mod widgets;
