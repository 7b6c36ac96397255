//! Read-only album catalog, looked up by slug.

mod error;
mod models;

#[cfg(test)]
mod tests;

pub use error::CatalogError;
pub use models::*;

use dioxus::logger::tracing::debug;
use std::collections::HashSet;
use std::rc::Rc;

const BUNDLED_ALBUMS: &str = include_str!("../../assets/albums.json");

/// Source of albums for the views.
pub trait AlbumRepository {
    fn albums(&self) -> &[Album];

    fn find_by_slug(&self, slug: &str) -> Result<&Album, CatalogError> {
        self.albums()
            .iter()
            .find(|album| album.slug == slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }
}

/// Repository handle shared through the component context.
#[derive(Clone)]
pub struct SharedCatalog(pub Rc<dyn AlbumRepository>);

impl SharedCatalog {
    pub fn new<R: AlbumRepository + 'static>(repository: R) -> Self {
        Self(Rc::new(repository))
    }
}

/// Albums decoded from a JSON document and validated once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    albums: Vec<Album>,
}

impl StaticCatalog {
    /// The catalog shipped with the app.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_ALBUMS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let albums: Vec<Album> = serde_json::from_str(json)?;
        Self::from_albums(albums)
    }

    pub fn from_albums(albums: Vec<Album>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for album in &albums {
            if album.slug.trim().is_empty() {
                return Err(CatalogError::MissingSlug {
                    title: album.title.clone(),
                });
            }
            if !seen.insert(album.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(album.slug.clone()));
            }
            if album.songs.is_empty() {
                return Err(CatalogError::EmptyAlbum(album.slug.clone()));
            }
        }
        debug!("catalog loaded with {} albums", albums.len());
        Ok(Self { albums })
    }
}

impl AlbumRepository for StaticCatalog {
    fn albums(&self) -> &[Album] {
        &self.albums
    }
}
