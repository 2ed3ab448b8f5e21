use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("Catalog not loaded: call catalog/load first")]
	NotInitialized,
	#[error("No title matching '{0}'")]
	NotFound(String),
	#[error("Invalid input: {0}")]
	InvalidInput(String),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Serialization error: {0}")]
	Serialization(String),
}

impl CatalogError {
	pub fn code(&self) -> &str {
		match self {
			Self::NotInitialized => "CATALOG_NOT_LOADED",
			Self::NotFound(_) => "CATALOG_TITLE_NOT_FOUND",
			Self::InvalidInput(_) => "CATALOG_INVALID_INPUT",
			Self::Io(_) => "CATALOG_IO",
			Self::Serialization(_) => "CATALOG_SERIALIZATION",
		}
	}

	pub fn to_json_rpc_error(&self) -> serde_json::Value {
		serde_json::json!({
			"catalogCode": self.code(),
			"message": self.to_string(),
		})
	}
}
