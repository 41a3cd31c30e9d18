//! A single list table render pass

use super::renderer::{BulkActions, TableRenderer};
use super::search;
use crate::column::{ColumnHeaderState, Columns, SortableColumns};
use crate::context::{ORDER_BY_PARAM, ORDER_PARAM, PAGED_PARAM, RenderContext, SortOrder};
use crate::error::Result;
use crate::hooks::{ListTableHooks, NavPosition, SEARCH_FORM_PRIORITY, TableNavEvent};
use crate::html::{HIDDEN_STYLE, escape};
use crate::pagination::Pagination;
use crate::settings::ListTableSettings;
use std::cell::{Cell, OnceCell};
use std::fmt;

/// Singular and plural labels derived from a table token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLabels {
	/// `<prefix><token>`
	pub singular: String,
	/// `<prefix><token>s`, also used as the table's CSS class
	pub plural: String,
}

impl TableLabels {
	/// Derives both labels from a token
	pub fn from_token(prefix: &str, token: &str) -> Self {
		Self {
			singular: format!("{prefix}{token}"),
			plural: format!("{prefix}{token}s"),
		}
	}
}

/// One admin list table for one request
///
/// Wraps a [`TableRenderer`] with the request context, hooks, settings and
/// the already fetched, already ordered rows of the current page. The
/// column header state is computed once and memoized, and the alternating
/// row toggle lives on the instance, so a `ListTable` renders a single
/// table and is then dropped.
///
/// # Example
///
/// ```rust
/// use reinhardt_list_table::{BaseTableRenderer, Columns, ListTable, RenderContext, RenderedRow};
///
/// let renderer = BaseTableRenderer::new()
///     .with_columns(Columns::new().with("name", "Name"))
///     .with_row_data(|name: &&str| RenderedRow::new().with_cell("name", *name));
///
/// let table = ListTable::new("learner", renderer, RenderContext::new("learners"))
///     .with_items(vec!["Alice", "Bob"]);
///
/// let html = table.render().unwrap();
/// assert!(html.contains(r#"<tr class="alternate"><td class="name column-name">Alice</td></tr>"#));
/// assert!(html.contains(r#"<tr><td class="name column-name">Bob</td></tr>"#));
/// ```
pub struct ListTable<R: TableRenderer> {
	token: String,
	labels: TableLabels,
	renderer: R,
	context: RenderContext,
	settings: ListTableSettings,
	hooks: ListTableHooks,
	items: Vec<R::Item>,
	pagination: Option<Pagination>,
	header_state: OnceCell<ColumnHeaderState>,
	alternate_row: Cell<bool>,
}

fn attach_search_form(hooks: &mut ListTableHooks) {
	hooks.on_before_table(SEARCH_FORM_PRIORITY, search::render_search_form);
}

impl<R: TableRenderer> ListTable<R> {
	/// Creates a table and attaches its search form to "before table"
	pub fn new(token: impl Into<String>, renderer: R, context: RenderContext) -> Self {
		let token = token.into();
		let settings = ListTableSettings::default();
		let labels = TableLabels::from_token(&settings.label_prefix, &token);
		let mut hooks = ListTableHooks::new();
		attach_search_form(&mut hooks);

		tracing::debug!(
			token = %token,
			screen = %context.screen_id(),
			"Created list table"
		);

		Self {
			token,
			labels,
			renderer,
			context,
			settings,
			hooks,
			items: Vec::new(),
			pagination: None,
			header_state: OnceCell::new(),
			alternate_row: Cell::new(false),
		}
	}

	/// Replaces the settings and re-derives the labels
	pub fn with_settings(mut self, settings: ListTableSettings) -> Self {
		self.labels = TableLabels::from_token(&settings.label_prefix, &self.token);
		self.settings = settings;
		self
	}

	/// Installs a hook registry and attaches the search form to it
	pub fn with_hooks(mut self, mut hooks: ListTableHooks) -> Self {
		attach_search_form(&mut hooks);
		self.hooks = hooks;
		self.header_state.take();
		self
	}

	/// Sets the rows to render, builder style
	pub fn with_items(mut self, items: Vec<R::Item>) -> Self {
		self.items = items;
		self
	}

	/// Sets the rows to render
	pub fn set_items(&mut self, items: Vec<R::Item>) {
		self.items = items;
	}

	/// Enables pagination for `total_items` rows, reading the page from the request
	pub fn set_pagination(&mut self, total_items: usize, per_page: usize) {
		self.pagination = Some(Pagination::from_context(&self.context, total_items, per_page));
	}

	/// Enables pagination using the configured page size
	pub fn with_pagination(mut self, total_items: usize) -> Self {
		let per_page = self.settings.per_page;
		self.set_pagination(total_items, per_page);
		self
	}

	/// Mutable access to the hook registry
	///
	/// Drops any memoized header state, since sortable-column filters may change.
	pub fn hooks_mut(&mut self) -> &mut ListTableHooks {
		self.header_state.take();
		&mut self.hooks
	}

	/// Token the table was created with
	pub fn token(&self) -> &str {
		&self.token
	}

	/// Labels derived from the token
	pub fn labels(&self) -> &TableLabels {
		&self.labels
	}

	/// Request context of this render
	pub fn context(&self) -> &RenderContext {
		&self.context
	}

	/// Active settings
	pub fn settings(&self) -> &ListTableSettings {
		&self.settings
	}

	/// The wrapped renderer
	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	/// Rows of the current page
	pub fn items(&self) -> &[R::Item] {
		&self.items
	}

	/// Pagination state, if enabled
	pub fn pagination(&self) -> Option<&Pagination> {
		self.pagination.as_ref()
	}

	/// Whether there is at least one row
	pub fn has_items(&self) -> bool {
		!self.items.is_empty()
	}

	/// Declared columns, verbatim
	pub fn columns(&self) -> Columns {
		self.renderer.columns()
	}

	/// Declared sortable columns, verbatim
	pub fn sortable_columns(&self) -> SortableColumns {
		self.renderer.sortable_columns()
	}

	/// Declared bulk actions
	pub fn bulk_actions(&self) -> BulkActions {
		self.renderer.bulk_actions()
	}

	/// Columns, hidden columns and normalized sortable columns
	///
	/// Computed on first use and memoized; later calls return the same
	/// value without consulting the hidden-column preference or the
	/// sortable-columns filters again.
	pub fn column_header_state(&self) -> &ColumnHeaderState {
		self.header_state.get_or_init(|| {
			let sortable = self
				.hooks
				.apply_sortable_columns(self.context.screen_id(), self.renderer.sortable_columns());
			ColumnHeaderState::new(
				self.renderer.columns(),
				self.context.hidden_columns().clone(),
				sortable,
			)
		})
	}

	/// Renders one body row
	///
	/// Rows alternate between `class="alternate"` and no class, starting
	/// with `alternate` on the first row of a render pass. Fails without
	/// writing anything, and without advancing the alternation, if the
	/// renderer cannot produce row data.
	pub fn render_row(&self, item: &R::Item, out: &mut String) -> Result<()> {
		let state = self.column_header_state();
		let data = self.renderer.row_data(item)?;

		let alternate = !self.alternate_row.get();
		self.alternate_row.set(alternate);

		out.push_str(if alternate {
			r#"<tr class="alternate">"#
		} else {
			"<tr>"
		});
		for name in state.columns.keys() {
			let style = if state.is_hidden(name) { HIDDEN_STYLE } else { "" };
			let class = escape(name);
			out.push_str(&format!(r#"<td class="{class} column-{class}"{style}>"#));
			if let Some(cell) = data.get(name) {
				out.push_str(cell);
			}
			out.push_str("</td>");
		}
		out.push_str("</tr>");
		Ok(())
	}

	/// Writes the "no items" text
	pub fn render_empty_state(&self, out: &mut String) {
		let text = self
			.hooks
			.apply_no_items_text(self.settings.no_items_text.clone());
		out.push_str(&text);
	}

	/// Writes the bulk-action controls for one navigation bar
	///
	/// The markup starts empty and is produced entirely by the bulk-actions
	/// filters, which receive the renderer's declared actions.
	pub fn render_bulk_action_controls(&self, position: NavPosition, out: &mut String) {
		let actions = self.renderer.bulk_actions();
		out.push_str(&self.hooks.apply_bulk_actions(String::new(), position, &actions));
	}

	/// Writes the search form
	///
	/// Nothing is written when there is no search term and no rows.
	pub fn render_search_form(&self, out: &mut String) {
		self.with_nav_event(NavPosition::Top, |event| {
			search::render_search_form(event, out)
		});
	}

	/// Writes a search box with an explicit label and input id
	pub fn render_search_box(&self, text: &str, input_id: &str, out: &mut String) {
		self.with_nav_event(NavPosition::Top, |event| {
			let event = TableNavEvent {
				search_button_text: text,
				search_input_id: input_id,
				..*event
			};
			search::render_search_box(&event, out)
		});
	}

	/// Fires "before table" at the top and "after table" at the bottom
	pub fn render_tablenav_extras(&self, position: NavPosition, out: &mut String) {
		self.with_nav_event(position, |event| match position {
			NavPosition::Top => self.hooks.fire_before_table(event, out),
			NavPosition::Bottom => self.hooks.fire_after_table(event, out),
		});
	}

	/// Writes one header row, with `id` attributes when `with_id` is set
	pub fn render_column_headers(&self, with_id: bool, out: &mut String) {
		let state = self.column_header_state();
		let current_order_by = self.context.order_by();
		let current_order = self.context.order();

		out.push_str("<tr>");
		for (id, label) in state.columns.iter() {
			let mut classes = vec!["manage-column".to_string(), format!("column-{}", escape(id))];
			let content = match state.sort_spec(id) {
				Some(spec) => {
					let link_order = if current_order_by == Some(spec.sort_key.as_str()) {
						classes.push("sorted".to_string());
						classes.push(current_order.as_str().to_string());
						current_order.toggle()
					} else {
						let first = if spec.initially_descending {
							SortOrder::Descending
						} else {
							SortOrder::Ascending
						};
						classes.push("sortable".to_string());
						classes.push(first.toggle().as_str().to_string());
						first
					};
					let href = self.context.link_with(
						&[
							(ORDER_BY_PARAM, spec.sort_key.as_str()),
							(ORDER_PARAM, link_order.as_str()),
						],
						&[PAGED_PARAM],
					);
					format!(
						r#"<a href="{}"><span>{label}</span><span class="sorting-indicator"></span></a>"#,
						escape(&href)
					)
				}
				None => label.to_string(),
			};
			let id_attr = if with_id {
				format!(r#" id="{}""#, escape(id))
			} else {
				String::new()
			};
			let style = if state.is_hidden(id) { HIDDEN_STYLE } else { "" };
			out.push_str(&format!(
				r#"<th scope="col"{id_attr} class="{}"{style}>{content}</th>"#,
				classes.join(" ")
			));
		}
		out.push_str("</tr>");
	}

	/// Writes every row in input order, or the empty-state row
	pub fn render_rows(&self, out: &mut String) -> Result<()> {
		if self.items.is_empty() {
			let colspan = self.column_header_state().visible_count().max(1);
			out.push_str(&format!(
				r#"<tr class="no-items"><td class="colspanchange" colspan="{colspan}">"#
			));
			self.render_empty_state(out);
			out.push_str("</td></tr>");
			return Ok(());
		}

		for item in &self.items {
			self.render_row(item, out)?;
		}
		Ok(())
	}

	/// Writes one navigation bar: bulk actions, extras and pagination
	pub fn render_tablenav(&self, position: NavPosition, out: &mut String) {
		out.push_str(&format!(r#"<div class="tablenav {}">"#, position.as_str()));
		if self.has_items() {
			out.push_str(r#"<div class="alignleft actions bulkactions">"#);
			self.render_bulk_action_controls(position, out);
			out.push_str("</div>");
		}
		self.render_tablenav_extras(position, out);
		if let Some(pagination) = &self.pagination {
			pagination.render(&self.context, position, out);
		}
		out.push_str(r#"<br class="clear" /></div>"#);
	}

	/// Writes the whole table: navigation bars, header, body and footer
	///
	/// Resets the row alternation first. A missing row renderer halts the
	/// pass and is returned as-is.
	pub fn display(&self, out: &mut String) -> Result<()> {
		self.alternate_row.set(false);
		tracing::debug!(
			token = %self.token,
			rows = self.items.len(),
			"Rendering list table"
		);

		self.render_tablenav(NavPosition::Top, out);
		out.push_str(&format!(
			r#"<table class="list-table widefat fixed {}">"#,
			escape(&self.labels.plural)
		));
		out.push_str("<thead>");
		self.render_column_headers(true, out);
		out.push_str("</thead>");

		out.push_str(r#"<tbody id="the-list">"#);
		if let Err(error) = self.render_rows(out) {
			tracing::error!(token = %self.token, %error, "List table render halted");
			return Err(error);
		}
		out.push_str("</tbody>");

		out.push_str("<tfoot>");
		self.render_column_headers(false, out);
		out.push_str("</tfoot>");
		out.push_str("</table>");
		self.render_tablenav(NavPosition::Bottom, out);
		Ok(())
	}

	/// Renders the whole table into a new string
	pub fn render(&self) -> Result<String> {
		let mut out = String::new();
		self.display(&mut out)?;
		Ok(out)
	}

	fn with_nav_event<T>(&self, position: NavPosition, f: impl FnOnce(&TableNavEvent<'_>) -> T) -> T {
		let search_button_text = self
			.hooks
			.apply_search_button_text(self.settings.search_button_text.clone());
		let event = TableNavEvent {
			position,
			token: &self.token,
			context: &self.context,
			has_items: self.has_items(),
			search_button_text: &search_button_text,
			search_input_id: &self.settings.search_input_id,
			search_param: &self.settings.search_param,
		};
		f(&event)
	}
}

impl<R: TableRenderer> fmt::Debug for ListTable<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListTable")
			.field("token", &self.token)
			.field("labels", &self.labels)
			.field("context", &self.context)
			.field("settings", &self.settings)
			.field("hooks", &self.hooks)
			.field("items", &self.items.len())
			.field("pagination", &self.pagination)
			.finish_non_exhaustive()
	}
}
