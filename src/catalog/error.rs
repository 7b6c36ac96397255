use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog document is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("album \"{0}\" not found")]
    NotFound(String),

    #[error("album titled \"{title}\" has an empty slug")]
    MissingSlug { title: String },

    #[error("slug \"{0}\" is used by more than one album")]
    DuplicateSlug(String),

    #[error("album \"{0}\" has no songs")]
    EmptyAlbum(String),
}
