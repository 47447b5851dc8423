//! Utility for fetching values from PokeAPI in the background.
//!
//! Each view owns the [`Fetch`]es for the data it displays, and polls them
//! every frame. There is no sharing between views: two views that want the
//! same URL both request it.

use std::fmt;
use std::sync::mpsc;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::TryRecvError;
use std::sync::Arc;
use std::thread;

use pokecat::api;

/// A value that is being downloaded on a background thread.
///
/// Failures are logged once and then swallowed: a failed `Fetch` behaves
/// exactly like one that never finishes.
pub struct Fetch<T>(FetchInner<T>);

enum FetchInner<T> {
  Pending {
    url: String,
    chan: Receiver<Result<T, api::Error>>,
  },
  Done(Arc<T>),
  Failed,
}

impl<T: Send + Sync + 'static> Fetch<T> {
  /// Starts fetching `url` using `body`, which runs on its own thread.
  pub fn spawn(
    url: String,
    body: impl FnOnce(&str) -> Result<T, api::Error> + Send + 'static,
  ) -> Self {
    let (out, chan) = mpsc::channel();

    thread::spawn({
      let url = url.clone();
      move || {
        // The receiver may be gone by now; that just means nobody is looking
        // at the result anymore.
        let _ = out.send(body(&url));
      }
    });

    Self(FetchInner::Pending { url, chan })
  }

  /// Checks in on the fetch.
  ///
  /// Returns the value once it has arrived, and `None` while it is still
  /// pending or if it failed.
  pub fn poll(&mut self) -> Option<&Arc<T>> {
    if let FetchInner::Pending { url, chan } = &self.0 {
      match chan.try_recv() {
        Ok(Ok(value)) => self.0 = FetchInner::Done(Arc::new(value)),
        Ok(Err(error)) => {
          tracing::warn!(%url, %error, "request failed");
          self.0 = FetchInner::Failed;
        }
        Err(TryRecvError::Disconnected) => {
          tracing::warn!(%url, "request thread went away");
          self.0 = FetchInner::Failed;
        }
        Err(TryRecvError::Empty) => {}
      }
    }

    match &self.0 {
      FetchInner::Done(value) => Some(value),
      _ => None,
    }
  }

  /// Returns whether the fetch failed.
  pub fn is_failed(&self) -> bool {
    matches!(self.0, FetchInner::Failed)
  }
}

impl<T> fmt::Debug for Fetch<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match &self.0 {
      FetchInner::Pending { url, .. } => write!(f, "Fetch::Pending({})", url),
      FetchInner::Done(_) => write!(f, "Fetch::Done"),
      FetchInner::Failed => write!(f, "Fetch::Failed"),
    }
  }
}
