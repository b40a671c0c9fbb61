pub mod listing;

use rand::seq::IndexedRandom;
use rand::Rng;

/// Image URLs discovered from the remote listing at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCatalog {
    urls: Vec<String>,
}

impl ImageCatalog {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Uniformly random URL, `None` when nothing was discovered.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.urls.choose(rng).map(String::as_str)
    }
}
