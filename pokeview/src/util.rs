//! Miscellaneous utility data structures and text helpers.

use std::borrow::Cow;
use std::ops::Deref;

use tui::layout::Rect;

/// A vector with a specifically selected element.
///
/// This type is primarially used to implement scrolling selections through
/// different options.
#[derive(Clone, Debug)]
pub struct SelectedVec<T> {
  vec: Vec<T>,

  // NOTE: Always in range when vec is non-empty.
  selection: usize,
}

impl<T> SelectedVec<T> {
  /// Returns the currently selected index in `self`.
  pub fn selection(&self) -> usize {
    self.selection
  }

  /// Returns the currently selected index in `self`, shifted by `delta` such
  /// that it is still a valid selection.
  pub fn shifted_selection(&self, delta: isize) -> usize {
    (self.selection as isize)
      .saturating_add(delta)
      .clamp(0, self.vec.len().saturating_sub(1) as isize) as usize
  }

  /// Returns a reference to the selected element if `self` is nonempty.
  pub fn selected(&self) -> Option<&T> {
    self.vec.get(self.selection)
  }

  /// Changes the selection index.
  ///
  /// This function returns true when the selection was successfully changed;
  /// that is, if the new index was valid and different from the current one.
  pub fn select(&mut self, selection: usize) -> bool {
    if self.selection == selection || selection >= self.vec.len() {
      return false;
    }

    self.selection = selection;
    true
  }

  /// Shifts the selected index by `delta`, clamping to the index bounds of
  /// the internal vector.
  ///
  /// This function returns true when the selection was successfully changed;
  /// that is, if the new, clamped index is different from the current one.
  pub fn shift(&mut self, delta: isize) -> bool {
    let new_index = self.shifted_selection(delta);
    if new_index == self.selection {
      return false;
    }

    self.selection = new_index;
    true
  }
}

impl<T> Default for SelectedVec<T> {
  fn default() -> Self {
    Self {
      vec: Vec::new(),
      selection: 0,
    }
  }
}

impl<T, V: Into<Vec<T>>> From<V> for SelectedVec<T> {
  fn from(v: V) -> Self {
    Self {
      vec: v.into(),
      selection: 0,
    }
  }
}

impl<T> Deref for SelectedVec<T> {
  type Target = [T];
  fn deref(&self) -> &[T] {
    &self.vec
  }
}

/// Returns true if `rect` contains the point at `x` and `y`.
pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
  rect.x <= x
    && x < rect.x.saturating_add(rect.width)
    && rect.y <= y
    && y < rect.y.saturating_add(rect.height)
}

/// Formats an API name like `special-defense` for display.
///
/// When `format` is set, hyphens become spaces; otherwise the name is passed
/// through untouched.
pub fn display_name(name: &str, format: bool) -> Cow<str> {
  if format && name.contains('-') {
    Cow::Owned(name.replace('-', " "))
  } else {
    Cow::Borrowed(name)
  }
}

/// Uppercases the first letter of every space- or hyphen-separated word.
pub fn capitalize(name: &str) -> String {
  let mut out = String::with_capacity(name.len());
  let mut at_word_start = true;
  for c in name.chars() {
    if at_word_start {
      out.extend(c.to_uppercase());
    } else {
      out.push(c);
    }
    at_word_start = c == ' ' || c == '-';
  }
  out
}
