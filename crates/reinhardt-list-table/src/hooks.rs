//! Typed extension points for list tables
//!
//! Every hook a list table exposes is a typed, prioritized callback list
//! held by [`ListTableHooks`]. Actions write markup around the table;
//! filters transform a value before the table uses it.
//!
//! Callbacks run in ascending priority order ([`DEFAULT_PRIORITY`] is 10),
//! and callbacks sharing a priority run in registration order.

use crate::column::SortableColumns;
use crate::context::RenderContext;
use crate::table::BulkActions;
use std::collections::HashMap;
use std::fmt;

/// Priority used when a caller has no ordering preference
pub const DEFAULT_PRIORITY: i32 = 10;

/// Priority at which a table attaches its own search form to "before table"
pub const SEARCH_FORM_PRIORITY: i32 = 5;

/// Which table navigation bar is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavPosition {
	/// Above the table
	Top,
	/// Below the table
	Bottom,
}

impl NavPosition {
	/// CSS class / name of the position
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Top => "top",
			Self::Bottom => "bottom",
		}
	}
}

/// Snapshot of the table handed to "before table" and "after table" actions
#[derive(Debug, Clone, Copy)]
pub struct TableNavEvent<'a> {
	/// Navigation bar that fired the action
	pub position: NavPosition,
	/// Token the table was constructed with
	pub token: &'a str,
	/// Request context of the render
	pub context: &'a RenderContext,
	/// Whether the table has any rows
	pub has_items: bool,
	/// Search button label after the search-button-text filters ran
	pub search_button_text: &'a str,
	/// Base id of the search input
	pub search_input_id: &'a str,
	/// Query parameter holding the search term
	pub search_param: &'a str,
}

/// Action attached to "before table" or "after table"
pub type TableAction = Box<dyn Fn(&TableNavEvent<'_>, &mut String) + Send + Sync>;
/// Filter over the sortable columns of one screen
pub type SortableColumnsFilter = Box<dyn Fn(SortableColumns) -> SortableColumns + Send + Sync>;
/// Filter over a piece of display text
pub type TextFilter = Box<dyn Fn(String) -> String + Send + Sync>;
/// Filter over the bulk-action controls markup, given the table's declared actions
pub type BulkActionsFilter =
	Box<dyn Fn(String, NavPosition, &BulkActions) -> String + Send + Sync>;

struct Prioritized<T> {
	priority: i32,
	callback: T,
}

fn insert_prioritized<T>(list: &mut Vec<Prioritized<T>>, priority: i32, callback: T) {
	let index = list.partition_point(|entry| entry.priority <= priority);
	list.insert(index, Prioritized { priority, callback });
}

/// Registry of list table actions and filters
///
/// # Example
///
/// ```rust
/// use reinhardt_list_table::{DEFAULT_PRIORITY, ListTableHooks};
///
/// let mut hooks = ListTableHooks::new();
/// hooks.add_no_items_text_filter(DEFAULT_PRIORITY, |_| "No courses yet.".to_string());
///
/// assert_eq!(hooks.apply_no_items_text("No items found.".into()), "No courses yet.");
/// ```
#[derive(Default)]
pub struct ListTableHooks {
	before_table: Vec<Prioritized<TableAction>>,
	after_table: Vec<Prioritized<TableAction>>,
	sortable_columns: HashMap<String, Vec<Prioritized<SortableColumnsFilter>>>,
	no_items_text: Vec<Prioritized<TextFilter>>,
	search_button_text: Vec<Prioritized<TextFilter>>,
	bulk_actions: Vec<Prioritized<BulkActionsFilter>>,
}

impl ListTableHooks {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches an action to "before table"
	pub fn on_before_table<F>(&mut self, priority: i32, action: F)
	where
		F: Fn(&TableNavEvent<'_>, &mut String) + Send + Sync + 'static,
	{
		insert_prioritized(&mut self.before_table, priority, Box::new(action));
	}

	/// Attaches an action to "after table"
	pub fn on_after_table<F>(&mut self, priority: i32, action: F)
	where
		F: Fn(&TableNavEvent<'_>, &mut String) + Send + Sync + 'static,
	{
		insert_prioritized(&mut self.after_table, priority, Box::new(action));
	}

	/// Adds a sortable-columns filter for one screen
	pub fn add_sortable_columns_filter<F>(
		&mut self,
		screen_id: impl Into<String>,
		priority: i32,
		filter: F,
	) where
		F: Fn(SortableColumns) -> SortableColumns + Send + Sync + 'static,
	{
		let filters = self.sortable_columns.entry(screen_id.into()).or_default();
		insert_prioritized(filters, priority, Box::new(filter));
	}

	/// Adds a filter over the "no items" text
	pub fn add_no_items_text_filter<F>(&mut self, priority: i32, filter: F)
	where
		F: Fn(String) -> String + Send + Sync + 'static,
	{
		insert_prioritized(&mut self.no_items_text, priority, Box::new(filter));
	}

	/// Adds a filter over the search button label
	pub fn add_search_button_text_filter<F>(&mut self, priority: i32, filter: F)
	where
		F: Fn(String) -> String + Send + Sync + 'static,
	{
		insert_prioritized(&mut self.search_button_text, priority, Box::new(filter));
	}

	/// Adds a filter over the bulk-action controls markup
	///
	/// The filter also sees the actions the table declares, so it can build
	/// controls for them.
	pub fn add_bulk_actions_filter<F>(&mut self, priority: i32, filter: F)
	where
		F: Fn(String, NavPosition, &BulkActions) -> String + Send + Sync + 'static,
	{
		insert_prioritized(&mut self.bulk_actions, priority, Box::new(filter));
	}

	/// Runs every "before table" action
	pub fn fire_before_table(&self, event: &TableNavEvent<'_>, out: &mut String) {
		for entry in &self.before_table {
			(entry.callback)(event, out);
		}
	}

	/// Runs every "after table" action
	pub fn fire_after_table(&self, event: &TableNavEvent<'_>, out: &mut String) {
		for entry in &self.after_table {
			(entry.callback)(event, out);
		}
	}

	/// Passes sortable columns through the filters registered for `screen_id`
	pub fn apply_sortable_columns(&self, screen_id: &str, columns: SortableColumns) -> SortableColumns {
		match self.sortable_columns.get(screen_id) {
			Some(filters) => filters
				.iter()
				.fold(columns, |columns, entry| (entry.callback)(columns)),
			None => columns,
		}
	}

	/// Passes the "no items" text through its filters
	pub fn apply_no_items_text(&self, text: String) -> String {
		apply_text_filters(&self.no_items_text, text)
	}

	/// Passes the search button label through its filters
	pub fn apply_search_button_text(&self, text: String) -> String {
		apply_text_filters(&self.search_button_text, text)
	}

	/// Passes bulk-action markup through its filters
	pub fn apply_bulk_actions(
		&self,
		markup: String,
		position: NavPosition,
		actions: &BulkActions,
	) -> String {
		self.bulk_actions
			.iter()
			.fold(markup, |markup, entry| (entry.callback)(markup, position, actions))
	}
}

fn apply_text_filters(filters: &[Prioritized<TextFilter>], text: String) -> String {
	filters
		.iter()
		.fold(text, |text, entry| (entry.callback)(text))
}

impl fmt::Debug for ListTableHooks {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListTableHooks")
			.field("before_table", &self.before_table.len())
			.field("after_table", &self.after_table.len())
			.field(
				"sortable_columns",
				&self
					.sortable_columns
					.iter()
					.map(|(screen, filters)| (screen.as_str(), filters.len()))
					.collect::<HashMap<_, _>>(),
			)
			.field("no_items_text", &self.no_items_text.len())
			.field("search_button_text", &self.search_button_text.len())
			.field("bulk_actions", &self.bulk_actions.len())
			.finish()
	}
}
