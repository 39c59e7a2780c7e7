use pokedex_catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The catalog answered 404
    #[error("No encontrado. Prueba con otro nombre/ID. ({url})")]
    NotFound { url: String },

    #[error("Catalog returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Escribe un nombre o número (ej: pikachu / 25)")]
    EmptyQuery,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] CatalogError),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
