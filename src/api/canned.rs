//! A canned-response transport, for tests and offline demos.

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;

use crate::api::Error;
use crate::api::Transport;

/// A [`Transport`] that answers from a table of recorded responses.
///
/// Every request is logged, so callers can check which URLs were hit and how
/// often. Unknown URLs fail with a 404 [`Error::Status`].
#[derive(Default)]
pub struct Canned {
  responses: Mutex<HashMap<String, Response>>,
  log: Mutex<Vec<String>>,
}

#[derive(Clone)]
enum Response {
  Body(Vec<u8>),
  Status(u16),
  Hang,
}

impl Canned {
  /// Creates an empty transport.
  pub fn new() -> Self {
    Self::default()
  }

  /// Records `body` as the response for `url`.
  pub fn insert(&self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
    self.set(url.into(), Response::Body(body.into()));
  }

  /// Makes requests for `url` fail with the given HTTP status.
  pub fn fail(&self, url: impl Into<String>, code: u16) {
    self.set(url.into(), Response::Status(code));
  }

  /// Makes requests for `url` block forever, as if the server never answered.
  pub fn hang(&self, url: impl Into<String>) {
    self.set(url.into(), Response::Hang);
  }

  /// Returns every URL requested so far, in order.
  pub fn requests(&self) -> Vec<String> {
    match self.log.lock() {
      Ok(log) => log.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }

  /// Returns how many times `url` has been requested.
  pub fn requests_for(&self, url: &str) -> usize {
    self.requests().iter().filter(|u| *u == url).count()
  }

  fn set(&self, url: String, response: Response) {
    let mut responses = match self.responses.lock() {
      Ok(r) => r,
      Err(poisoned) => poisoned.into_inner(),
    };
    responses.insert(url, response);
  }
}

impl Transport for Canned {
  fn get(&self, url: &str) -> Result<Vec<u8>, Error> {
    match self.log.lock() {
      Ok(mut log) => log.push(url.to_string()),
      Err(poisoned) => poisoned.into_inner().push(url.to_string()),
    }

    let response = match self.responses.lock() {
      Ok(r) => r.get(url).cloned(),
      Err(poisoned) => poisoned.into_inner().get(url).cloned(),
    };

    match response {
      Some(Response::Body(body)) => Ok(body),
      Some(Response::Status(code)) => Err(Error::Status {
        url: url.to_string(),
        code,
      }),
      Some(Response::Hang) => loop {
        thread::park();
      },
      None => Err(Error::Status {
        url: url.to_string(),
        code: 404,
      }),
    }
  }
}
