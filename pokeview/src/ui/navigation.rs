//! URLs and handlers for nagivation events.

use crate::ui::component::Component;

/// The scheme every in-app URL starts with.
pub const SCHEME: &str = "pokeview://";

/// A `pokeview`-scheme URL: a slash-separated path without an origin.
#[derive(Clone, Debug)]
pub struct Url<'url> {
  str: &'url str,
  path: Vec<&'url str>,
}

impl<'url> Url<'url> {
  pub fn from(url: &'url str) -> Option<Self> {
    let path = url.strip_prefix(SCHEME)?;
    let path = path.split('/').collect::<Vec<_>>();
    Some(Url { str: url, path })
  }

  pub fn as_str(&self) -> &'url str {
    self.str
  }

  pub fn path(&self) -> &[&'url str] {
    &self.path
  }
}

type Factory = Box<dyn Fn(&Url, Vec<&str>) -> Option<Box<dyn Component>>>;

/// Routes URLs to the components that display them.
///
/// Templates are paths in which `{}` stands for exactly one path component.
/// A URL only matches a template with the same number of components.
pub struct Handler {
  matchers: Vec<Matcher>,
}

impl Handler {
  pub fn new() -> Self {
    Self {
      matchers: Vec::new(),
    }
  }

  pub fn handle(
    mut self,
    template: &str,
    factory: impl Fn(&Url, Vec<&str>) -> Option<Box<dyn Component>> + 'static,
  ) -> Self {
    let path = template.strip_prefix(SCHEME).unwrap_or(template);
    self.matchers.push(Matcher {
      path: path
        .split('/')
        .map(|path| match path {
          "{}" => PathComponent::Any,
          path => PathComponent::Exact(path.to_string()),
        })
        .collect(),
      factory: Box::new(factory),
    });
    self
  }

  /// Builds the component for `url`, or returns `None` if no template
  /// matches it.
  pub fn navigate_to(&self, url: &str) -> Option<Box<dyn Component>> {
    let url = Url::from(url)?;
    'outer: for m in &self.matchers {
      if m.path.len() != url.path().len() {
        continue;
      }

      let mut args = Vec::new();
      for (template, &component) in m.path.iter().zip(url.path()) {
        match template {
          PathComponent::Exact(this) if this == component => {}
          PathComponent::Any => args.push(component),
          _ => continue 'outer,
        }
      }
      return (m.factory)(&url, args);
    }

    None
  }
}

struct Matcher {
  path: Vec<PathComponent>,
  factory: Factory,
}

enum PathComponent {
  Exact(String),
  Any,
}
