use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadoutError {
    #[error("No such ship found: \"{0}\"")]
    UnknownVehicleType(String),

    #[error("Unknown equipment \"{code}\" in slot {slot}")]
    UnknownEquipment { slot: String, code: String },

    #[error("Malformed slot identifier: {0}")]
    MalformedSlotIdentifier(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading or validating the static catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Validation errors: {}", .0.join(", "))]
    Invalid(Vec<String>),
}

impl CatalogError {
    pub(crate) fn parse(source_name: impl Into<String>, err: toml::de::Error) -> Self {
        CatalogError::Parse {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadoutError>;
