//! Per-request render context
//!
//! Carries everything a list table would otherwise read from ambient
//! request globals: the screen identity, the query string and the
//! screen's hidden-column preference.

use crate::error::Result;
use std::collections::HashSet;

/// Query parameter carrying the current sort column
pub const ORDER_BY_PARAM: &str = "orderby";
/// Query parameter carrying the current sort direction
pub const ORDER_PARAM: &str = "order";
/// Query parameter carrying the current page number
pub const PAGED_PARAM: &str = "paged";

/// Sort direction requested by the current query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
	/// `order=asc`
	Ascending,
	/// `order=desc`
	Descending,
}

impl SortOrder {
	/// Query string value for this direction
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}
}

/// Request state for one list table render
///
/// # Example
///
/// ```rust
/// use reinhardt_list_table::RenderContext;
///
/// let context = RenderContext::from_query_string("edit-course", "page=courses&s=rust")
///     .unwrap()
///     .with_hidden_columns(["date"]);
///
/// assert_eq!(context.screen_id(), "edit-course");
/// assert_eq!(context.search_term("s"), Some("rust"));
/// assert!(context.is_hidden("date"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
	screen_id: String,
	query: Vec<(String, String)>,
	hidden_columns: HashSet<String>,
}

impl RenderContext {
	/// Creates a context with no query parameters and no hidden columns
	pub fn new(screen_id: impl Into<String>) -> Self {
		Self {
			screen_id: screen_id.into(),
			query: Vec::new(),
			hidden_columns: HashSet::new(),
		}
	}

	/// Creates a context from a raw (already split-off) query string
	///
	/// A leading `?` is accepted. Parameter order and duplicates are kept.
	pub fn from_query_string(screen_id: impl Into<String>, query: &str) -> Result<Self> {
		let query = query.strip_prefix('?').unwrap_or(query);
		let params: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
		Ok(Self {
			query: params,
			..Self::new(screen_id)
		})
	}

	/// Appends a query parameter
	pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((key.into(), value.into()));
		self
	}

	/// Replaces the hidden-column preference
	pub fn with_hidden_columns<I, S>(mut self, columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.hidden_columns = columns.into_iter().map(Into::into).collect();
		self
	}

	/// Identity of the current admin screen
	pub fn screen_id(&self) -> &str {
		&self.screen_id
	}

	/// Query parameters in request order
	pub fn query_params(&self) -> &[(String, String)] {
		&self.query
	}

	/// Returns the value of a query parameter
	///
	/// When a key repeats, the last occurrence wins.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.query
			.iter()
			.rev()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Returns the active search term, if any
	///
	/// An empty value counts as no search.
	pub fn search_term(&self, param: &str) -> Option<&str> {
		self.param(param).filter(|term| !term.is_empty())
	}

	/// Column the current query sorts by
	pub fn order_by(&self) -> Option<&str> {
		self.param(ORDER_BY_PARAM).filter(|value| !value.is_empty())
	}

	/// Sort direction of the current query, ascending unless `order=desc`
	pub fn order(&self) -> SortOrder {
		match self.param(ORDER_PARAM) {
			Some(order) if order.eq_ignore_ascii_case("desc") => SortOrder::Descending,
			_ => SortOrder::Ascending,
		}
	}

	/// Requested page number, if it parses as a positive integer
	pub fn paged(&self) -> Option<usize> {
		self.param(PAGED_PARAM)
			.and_then(|value| value.trim().parse::<usize>().ok())
			.filter(|page| *page > 0)
	}

	/// Hidden-column preference for this screen
	pub fn hidden_columns(&self) -> &HashSet<String> {
		&self.hidden_columns
	}

	/// Returns whether a column is hidden on this screen
	pub fn is_hidden(&self, column: &str) -> bool {
		self.hidden_columns.contains(column)
	}

	/// Builds a `?query` link from the current parameters
	///
	/// `remove` keys are dropped, then `set` pairs replace any existing value
	/// and are appended in the given order.
	pub fn link_with(&self, set: &[(&str, &str)], remove: &[&str]) -> String {
		let mut serializer = url::form_urlencoded::Serializer::new(String::new());
		for (key, value) in &self.query {
			let key = key.as_str();
			if remove.contains(&key) || set.iter().any(|(k, _)| *k == key) {
				continue;
			}
			serializer.append_pair(key, value);
		}
		for (key, value) in set {
			serializer.append_pair(key, value);
		}
		format!("?{}", serializer.finish())
	}
}
