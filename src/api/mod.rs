//! A PokéAPI client.

use std::io;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Resource;

pub mod canned;
mod transport;
pub use transport::HttpTransport;
pub use transport::Transport;

/// The public PokéAPI instance.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// An API client.
///
/// This type is the entrypoint for downloading information from PokéAPI.
/// Nothing is memoized: every call performs a fresh request through the
/// client's [`Transport`].
pub struct Api {
  base_url: String,
  transport: Box<dyn Transport>,
}

/// Options for constructing an [`Api`].
pub struct Options {
  /// The base URL to point the client at.
  pub base_url: String,
  /// The transport requests are sent through.
  pub transport: Box<dyn Transport>,
}

/// An [`Api`] client error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] io::Error),

  #[error(transparent)]
  Http(#[from] reqwest::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error("request for {url} failed with status {code}")]
  Status { url: String, code: u16 },
}

impl Api {
  /// Creates a new [`Api`] pointed at the public PokéAPI over HTTP.
  pub fn new() -> Self {
    Self::with_base_url(DEFAULT_BASE_URL)
  }

  /// Creates a new [`Api`] pointed at `base_url` over HTTP.
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self::with_options(Options {
      base_url: base_url.into(),
      transport: Box::new(HttpTransport::new()),
    })
  }

  /// Creates a new [`Api`] with the given options.
  pub fn with_options(opts: Options) -> Self {
    Self {
      base_url: opts.base_url.trim_end_matches('/').to_string(),
      transport: opts.transport,
    }
  }

  /// Returns the base URL this client points at.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Base request-generating function for raw bytes.
  pub fn request_blob(&self, url: &str) -> Result<Vec<u8>, Error> {
    tracing::debug!(%url, "GET");
    self.transport.get(url)
  }

  /// Base request-generating function for JSON documents.
  pub fn request_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
    let buf = self.request_blob(url)?;
    Ok(serde_json::from_slice(&buf)?)
  }

  /// Returns the URL of the first listing page for resources of type `T`.
  ///
  /// When `limit` is set, the API is asked for that many entries per page;
  /// otherwise the server's default page size applies.
  pub fn index_url<T: Endpoint>(&self, limit: Option<u32>) -> String {
    match limit {
      Some(limit) => format!("{}/{}?limit={}", self.base_url, T::NAME, limit),
      None => format!("{}/{}", self.base_url, T::NAME),
    }
  }

  /// Fetches the first listing page for resources of type `T`.
  pub fn index<T: Endpoint>(&self) -> Result<Page<T>, Error> {
    self.page(&self.index_url::<T>(None))
  }

  /// Fetches the listing page at `url`, which is usually a cursor returned by
  /// a previous page.
  pub fn page<T: Endpoint>(&self, url: &str) -> Result<Page<T>, Error> {
    self.request_json(url)
  }

  /// Try to get the specific resource of type `T` with the given name.
  pub fn by_name<T: Endpoint>(&self, name: &str) -> Result<T, Error> {
    self.request_json(&self.by_name_url::<T>(name))
  }

  /// Returns the URL [`Api::by_name()`] would request.
  pub fn by_name_url<T: Endpoint>(&self, name: &str) -> String {
    format!("{}/{}/{}", self.base_url, T::NAME, name)
  }
}

impl Default for Api {
  fn default() -> Self {
    Self::new()
  }
}

/// An endpoint type, representing a type that can be requested directly from
/// an [`Api`].
pub trait Endpoint: DeserializeOwned + 'static {
  /// The name of the endpoint, used to construct the request.
  const NAME: &'static str;
}

/// One page of a PokéAPI listing.
///
/// The `next` and `previous` fields are opaque continuation URLs supplied by
/// the server; clients should request them verbatim rather than constructing
/// their own.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
  /// The total number of resources across all pages.
  #[serde(default)]
  pub count: u64,
  /// The URL of the following page, if any.
  pub next: Option<String>,
  /// The URL of the preceding page, if any.
  pub previous: Option<String>,
  /// The references on this page.
  pub results: Vec<Resource<T>>,
}

impl<T> Page<T> {
  /// Returns this page's pagination cursor.
  pub fn cursor(&self) -> Cursor {
    Cursor {
      next: self.next.clone(),
      previous: self.previous.clone(),
    }
  }
}

/// Continuation URLs for moving between listing pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
  /// The URL of the following page, if any.
  pub next: Option<String>,
  /// The URL of the preceding page, if any.
  pub previous: Option<String>,
}

/// A lazily-loaded blob.
///
/// Evaluating this blob always performs a network request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blob {
  url: String,
}

impl Blob {
  /// Creates a new blob located at `url`.
  pub fn new(url: impl Into<String>) -> Self {
    Self { url: url.into() }
  }

  /// Returns the `url` that points to the blob.
  pub fn url(&self) -> &str {
    &self.url
  }

  /// Performs a network request to download this blob.
  pub fn load(&self, api: &Api) -> Result<Vec<u8>, Error> {
    api.request_blob(&self.url)
  }
}

/// A lazily-loaded object.
///
/// Evaluating this object always performs a network request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lazy<T> {
  url: String,

  #[serde(skip)]
  _ph: PhantomData<fn() -> T>,
}

impl<T> Clone for Lazy<T> {
  fn clone(&self) -> Self {
    Self::new(self.url.clone())
  }
}

impl<T> Lazy<T> {
  /// Creates a new lazily-loaded object located at `url`.
  pub fn new(url: String) -> Self {
    Self {
      url,
      _ph: PhantomData,
    }
  }

  /// Returns the `url` that points to the object.
  pub fn url(&self) -> &str {
    &self.url
  }
}

impl<T: DeserializeOwned> Lazy<T> {
  /// Performs a network request to evaluate this object.
  pub fn load(&self, api: &Api) -> Result<T, Error> {
    api.request_json(&self.url)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::canned::Canned;
  use super::*;
  use crate::model::Pokemon;

  fn api_with(canned: &Arc<Canned>) -> Api {
    Api::with_options(Options {
      base_url: "https://example.test/api/v2/".into(),
      transport: Box::new(Arc::clone(canned)),
    })
  }

  #[test]
  fn index_url_honors_limit() {
    let api = api_with(&Arc::new(Canned::new()));
    assert_eq!(
      api.index_url::<Pokemon>(None),
      "https://example.test/api/v2/pokemon"
    );
    assert_eq!(
      api.index_url::<Pokemon>(Some(12)),
      "https://example.test/api/v2/pokemon?limit=12"
    );
  }

  #[test]
  fn page_exposes_cursor() {
    let canned = Arc::new(Canned::new());
    canned.insert(
      "https://example.test/api/v2/pokemon",
      r#"{
        "count": 1281,
        "next": "https://example.test/api/v2/pokemon?offset=20&limit=20",
        "previous": null,
        "results": [
          {"name": "bulbasaur", "url": "https://example.test/api/v2/pokemon/1/"}
        ]
      }"#,
    );

    let api = api_with(&canned);
    let page = api.index::<Pokemon>().unwrap();
    assert_eq!(page.count, 1281);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name(), Some("bulbasaur"));
    assert_eq!(page.results[0].url(), "https://example.test/api/v2/pokemon/1/");
    assert_eq!(
      page.cursor(),
      Cursor {
        next: Some(
          "https://example.test/api/v2/pokemon?offset=20&limit=20".into()
        ),
        previous: None,
      }
    );
  }

  #[test]
  fn unknown_url_is_a_status_error() {
    let canned = Arc::new(Canned::new());
    let api = api_with(&canned);
    match api.by_name::<Pokemon>("missingno") {
      Err(Error::Status { url, code }) => {
        assert_eq!(url, "https://example.test/api/v2/pokemon/missingno");
        assert_eq!(code, 404);
      }
      other => panic!("unexpected result: {:?}", other.map(|p| p.name)),
    }
  }

  #[test]
  fn malformed_json_is_a_json_error() {
    let canned = Arc::new(Canned::new());
    canned.insert("https://example.test/api/v2/pokemon", "{\"results\": 7}");
    let api = api_with(&canned);
    assert!(matches!(api.index::<Pokemon>(), Err(Error::Json(_))));
  }

  #[test]
  fn every_call_hits_the_transport() {
    let canned = Arc::new(Canned::new());
    canned.insert(
      "https://example.test/api/v2/pokemon",
      r#"{"next": null, "previous": null, "results": []}"#,
    );
    let api = api_with(&canned);
    api.index::<Pokemon>().unwrap();
    api.index::<Pokemon>().unwrap();
    assert_eq!(canned.requests_for("https://example.test/api/v2/pokemon"), 2);
  }
}
