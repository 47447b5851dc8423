//! Transports, which actually move bytes for an [`Api`].

use std::io::Read;
use std::sync::Arc;

use reqwest::blocking::Client;

use crate::api::Error;

#[cfg(doc)]
use crate::api::Api;

/// A way of performing GET requests on behalf of an [`Api`].
///
/// Implementations must be shareable across threads, since views fetch their
/// data from background threads.
pub trait Transport: Send + Sync {
  /// Performs a GET request for `url`, returning the response body.
  ///
  /// Non-success responses must be reported as errors.
  fn get(&self, url: &str) -> Result<Vec<u8>, Error>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
  fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
    (**self).get(url)
  }
}

/// A [`Transport`] that speaks HTTP(S) through `reqwest`.
pub struct HttpTransport {
  client: Client,
}

impl HttpTransport {
  /// Creates a new transport with a default client.
  pub fn new() -> Self {
    Self {
      client: Client::new(),
    }
  }
}

impl Default for HttpTransport {
  fn default() -> Self {
    Self::new()
  }
}

impl Transport for HttpTransport {
  fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
    let mut response = self.client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
      return Err(Error::Status {
        url: url.to_string(),
        code: status.as_u16(),
      });
    }

    let mut buf = Vec::new();
    response.read_to_end(&mut buf)?;
    Ok(buf)
  }
}
