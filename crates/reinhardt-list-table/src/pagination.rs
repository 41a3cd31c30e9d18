//! Pagination state and navigation markup

use crate::context::{PAGED_PARAM, RenderContext};
use crate::hooks::NavPosition;
use crate::html::escape;

/// Pagination state of a list table
///
/// The rows handed to the table are already the current page; this type
/// only tracks where that page sits in the full result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
	/// Number of items per page
	pub per_page: usize,
	/// Current page number (1-indexed)
	pub current_page: usize,
	/// Total number of items across all pages
	pub total_items: usize,
}

impl Pagination {
	/// Creates pagination state, clamping `current_page` to the valid range
	///
	/// A `per_page` of zero is treated as one.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_list_table::Pagination;
	///
	/// let pagination = Pagination::new(45, 20, 9);
	/// assert_eq!(pagination.total_pages(), 3);
	/// assert_eq!(pagination.current_page, 3);
	/// ```
	pub fn new(total_items: usize, per_page: usize, current_page: usize) -> Self {
		let mut pagination = Self {
			per_page: per_page.max(1),
			current_page: 1,
			total_items,
		};
		pagination.set_page(current_page);
		pagination
	}

	/// Creates pagination state using the `paged` parameter of the request
	pub fn from_context(context: &RenderContext, total_items: usize, per_page: usize) -> Self {
		Self::new(total_items, per_page, context.paged().unwrap_or(1))
	}

	/// Returns the total number of pages
	pub fn total_pages(&self) -> usize {
		if self.total_items == 0 {
			0
		} else {
			self.total_items.div_ceil(self.per_page)
		}
	}

	/// Sets the current page
	pub fn set_page(&mut self, page: usize) {
		self.current_page = page.max(1).min(self.total_pages().max(1));
	}

	/// Renders the `tablenav-pages` block for one navigation bar
	pub fn render(&self, context: &RenderContext, position: NavPosition, out: &mut String) {
		let total_pages = self.total_pages();
		let class = match total_pages {
			0 => " no-pages",
			1 => " one-page",
			_ => "",
		};

		out.push_str(&format!(r#"<div class="tablenav-pages{class}">"#));
		let noun = if self.total_items == 1 { "item" } else { "items" };
		out.push_str(&format!(
			r#"<span class="displaying-num">{} {noun}</span>"#,
			self.total_items
		));

		if total_pages > 1 {
			let current = self.current_page;
			out.push_str(r#"<span class="pagination-links">"#);
			self.page_link(context, "first-page", "&laquo;", 1, current > 1, out);
			self.page_link(
				context,
				"prev-page",
				"&lsaquo;",
				current.saturating_sub(1).max(1),
				current > 1,
				out,
			);
			out.push_str(&format!(
				r#"<span class="paging-input">{current} of <span class="total-pages">{total_pages}</span></span>"#
			));
			self.page_link(
				context,
				"next-page",
				"&rsaquo;",
				(current + 1).min(total_pages),
				current < total_pages,
				out,
			);
			self.page_link(
				context,
				"last-page",
				"&raquo;",
				total_pages,
				current < total_pages,
				out,
			);
			out.push_str("</span>");
		}

		tracing::trace!(
			position = position.as_str(),
			page = self.current_page,
			total_pages,
			"Rendered pagination"
		);
		out.push_str("</div>");
	}

	fn page_link(
		&self,
		context: &RenderContext,
		class: &str,
		symbol: &str,
		page: usize,
		enabled: bool,
		out: &mut String,
	) {
		if enabled {
			let page = page.to_string();
			let href = context.link_with(&[(PAGED_PARAM, page.as_str())], &[]);
			out.push_str(&format!(
				r#"<a class="{class}" href="{}">{symbol}</a>"#,
				escape(&href)
			));
		} else {
			out.push_str(&format!(
				r#"<span class="{class} disabled" aria-hidden="true">{symbol}</span>"#
			));
		}
	}
}
