//! Error types for list table rendering

/// Errors raised while configuring or rendering a list table
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ListTableError {
	/// The concrete table never supplied a row-to-cell mapping
	///
	/// A render pass cannot continue without row data, so this error
	/// halts it immediately.
	#[error(
		"either {table}::row_data() must be overridden in a concrete table or a row renderer must be supplied"
	)]
	MissingRowRenderer {
		/// Name of the table type that is missing its row renderer
		table: String,
	},

	/// Settings failed validation
	#[error("Invalid list table settings: {0}")]
	InvalidSettings(String),

	/// Settings file could not be parsed
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Settings file could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Query string could not be decoded
	#[error("Invalid query string: {0}")]
	InvalidQuery(#[from] serde_urlencoded::de::Error),
}

impl ListTableError {
	/// Builds a [`ListTableError::MissingRowRenderer`] for the given table type
	pub fn missing_row_renderer(table: impl Into<String>) -> Self {
		Self::MissingRowRenderer {
			table: table.into(),
		}
	}

	/// Returns `true` for the error that halts a render pass
	pub fn is_missing_row_renderer(&self) -> bool {
		matches!(self, Self::MissingRowRenderer { .. })
	}
}

/// Result type for list table operations
pub type Result<T> = std::result::Result<T, ListTableError>;
