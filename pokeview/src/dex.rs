//! The "Dex", the viewer's handle onto PokeAPI.
//!
//! The [`Dex`] hands out fresh [`Fetch`]es to whichever view asks for them.
//! It keeps no state about past requests.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use pokecat::api::Blob;
use pokecat::api::Endpoint;
use pokecat::api::Page;
use pokecat::model::Pokemon;
use pokecat::Api;

use crate::fetch::Fetch;

pub struct Dex {
  api: Arc<Api>,
  page_size: Option<u32>,
}

impl Dex {
  pub fn new(api: Arc<Api>) -> Self {
    Self {
      api,
      page_size: None,
    }
  }

  /// Sets the page size requested for the first listing page.
  pub fn page_size(mut self, page_size: Option<u32>) -> Self {
    self.page_size = page_size;
    self
  }

  /// Requests the JSON document at `url`.
  pub fn request<T>(&self, url: &str) -> Fetch<T>
  where
    T: DeserializeOwned + Send + Sync + 'static,
  {
    let api = Arc::clone(&self.api);
    Fetch::spawn(url.to_string(), move |url| api.request_json(url))
  }

  /// Requests the resource of type `T` with the given name.
  pub fn request_named<T>(&self, name: &str) -> Fetch<T>
  where
    T: Endpoint + Send + Sync,
  {
    self.request(&self.api.by_name_url::<T>(name))
  }

  /// Requests the first page of the Pokemon listing.
  pub fn request_index(&self) -> Fetch<Page<Pokemon>> {
    self.request(&self.api.index_url::<Pokemon>(self.page_size))
  }

  /// Requests a PNG and decodes it.
  pub fn request_png(&self, blob: &Blob) -> Fetch<image::RgbaImage> {
    let api = Arc::clone(&self.api);
    let blob = blob.clone();
    Fetch::spawn(blob.url().to_string(), move |url| {
      let bytes = blob.load(&api)?;
      match image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
      {
        Ok(image) => Ok(image.into_rgba8()),
        Err(e) => Err(pokecat::api::Error::Io(std::io::Error::new(
          std::io::ErrorKind::InvalidData,
          format!("could not decode {}: {}", url, e),
        ))),
      }
    })
  }
}
