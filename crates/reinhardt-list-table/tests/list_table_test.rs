
use fixtures::*;
use proptest::prelude::*;
use reinhardt_list_table::{
	BaseTableRenderer, Columns, DEFAULT_PRIORITY, ListTable, ListTableError, ListTableHooks,
	ListTableSettings, RenderContext, RenderedRow, SortableColumn, SortableColumns, TableRenderer,
	remove_sortable_columns,
};
use rstest::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[rstest]
fn test_rows_render_in_order_with_alternating_classes(
	learner_renderer: BaseTableRenderer<TestLearner>,
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	// Arrange
	let table =
		ListTable::new("learner", learner_renderer, empty_context).with_items(sample_learners);

	// Act
	let mut out = String::new();
	table.render_rows(&mut out).unwrap();

	// Assert
	assert_eq!(
		out,
		concat!(
			r#"<tr class="alternate"><td class="id column-id">1</td><td class="name column-name">Alice</td></tr>"#,
			r#"<tr><td class="id column-id">2</td><td class="name column-name">Bob</td></tr>"#,
			r#"<tr class="alternate"><td class="id column-id">3</td><td class="name column-name">Carol</td></tr>"#,
		)
	);
	assert!(!out.contains("display:none"));
}

#[rstest]
fn test_render_row_toggle_persists_across_calls(
	learner_renderer: BaseTableRenderer<TestLearner>,
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	let table = ListTable::new("learner", learner_renderer, empty_context);

	let mut first = String::new();
	let mut second = String::new();
	table.render_row(&sample_learners[0], &mut first).unwrap();
	table.render_row(&sample_learners[0], &mut second).unwrap();

	assert!(first.starts_with(r#"<tr class="alternate">"#));
	assert!(second.starts_with("<tr>"));
}

#[rstest]
fn test_hidden_columns_carry_display_none(
	learner_renderer: BaseTableRenderer<TestLearner>,
	sample_learners: Vec<TestLearner>,
) {
	// Arrange
	let context = RenderContext::new("admin-learners").with_hidden_columns(["id"]);
	let table = ListTable::new("learner", learner_renderer, context);

	// Act
	let mut out = String::new();
	table.render_row(&sample_learners[1], &mut out).unwrap();

	// Assert
	assert_eq!(
		out,
		r#"<tr class="alternate"><td class="id column-id" style="display:none;">2</td><td class="name column-name">Bob</td></tr>"#
	);
}

#[rstest]
fn test_missing_cells_render_empty_and_unknown_cells_are_ignored(
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	// Arrange
	let renderer = BaseTableRenderer::new()
		.with_columns(
			Columns::new()
				.with("name", "Name")
				.with("email", "Email"),
		)
		.with_row_data(|learner: &TestLearner| {
			RenderedRow::new()
				.with_cell("name", learner.name.clone())
				.with_cell("progress", "50%")
		});
	let table = ListTable::new("learner", renderer, empty_context);

	// Act
	let mut out = String::new();
	table.render_row(&sample_learners[0], &mut out).unwrap();

	// Assert
	assert_eq!(
		out,
		r#"<tr class="alternate"><td class="name column-name">Alice</td><td class="email column-email"></td></tr>"#
	);
	assert!(!out.contains("50%"));
}

#[rstest]
fn test_cell_markup_is_emitted_verbatim(sample_courses: Vec<TestCourse>) {
	let table = ListTable::new("course", CourseTable::default(), RenderContext::new("edit-course"));

	let mut out = String::new();
	table.render_row(&sample_courses[1], &mut out).unwrap();

	assert!(out.contains(r#"<td class="title column-title"><a href="/courses/2">Ownership</a></td>"#));
}

#[rstest]
fn test_missing_row_renderer_halts_display(
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	// Arrange
	let renderer: BaseTableRenderer<TestLearner> =
		BaseTableRenderer::new().with_columns(Columns::new().with("name", "Name"));
	let table = ListTable::new("learner", renderer, empty_context).with_items(sample_learners);

	// Act
	let mut out = String::new();
	let result = table.display(&mut out);

	// Assert
	let error = result.unwrap_err();
	assert!(error.is_missing_row_renderer());
	assert!(error.to_string().contains("row_data()"));
	assert!(!out.contains("</tbody>"));
}

#[rstest]
fn test_missing_row_renderer_fails_render_row(
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	let renderer: BaseTableRenderer<TestLearner> = BaseTableRenderer::new();
	let table = ListTable::new("learner", renderer, empty_context);

	let mut out = String::new();
	let result = table.render_row(&sample_learners[0], &mut out);

	assert!(result.unwrap_err().is_missing_row_renderer());
	assert!(out.is_empty());
}

/// Renders learners, refusing those without a name
#[derive(Debug)]
struct NamedLearnerTable;

impl TableRenderer for NamedLearnerTable {
	type Item = TestLearner;

	fn columns(&self) -> Columns {
		Columns::new().with("name", "Name")
	}

	fn row_data(&self, learner: &TestLearner) -> reinhardt_list_table::Result<RenderedRow> {
		if learner.name.is_empty() {
			return Err(ListTableError::missing_row_renderer("NamedLearnerTable"));
		}
		Ok(RenderedRow::new().with_cell("name", learner.name.clone()))
	}
}

#[rstest]
fn test_failed_row_does_not_advance_alternation(
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	// Arrange
	let table = ListTable::new("learner", NamedLearnerTable, empty_context);
	let unnamed = TestLearner {
		id: 9,
		name: String::new(),
	};

	// Act
	let mut failed = String::new();
	let result = table.render_row(&unnamed, &mut failed);
	let mut first = String::new();
	table.render_row(&sample_learners[0], &mut first).unwrap();

	// Assert
	assert!(result.is_err());
	assert!(failed.is_empty());
	assert_eq!(
		first,
		r#"<tr class="alternate"><td class="name column-name">Alice</td></tr>"#
	);
}

#[rstest]
fn test_empty_table_without_row_renderer_still_displays(empty_context: RenderContext) {
	let renderer: BaseTableRenderer<TestLearner> =
		BaseTableRenderer::new().with_columns(Columns::new().with("name", "Name"));
	let table = ListTable::new("learner", renderer, empty_context);

	let html = table.render().unwrap();

	assert!(html.contains(
		r#"<tr class="no-items"><td class="colspanchange" colspan="1">No items found.</td></tr>"#
	));
}

#[rstest]
fn test_empty_table_without_search_shows_no_form(
	learner_renderer: BaseTableRenderer<TestLearner>,
	empty_context: RenderContext,
) {
	// Arrange
	let table = ListTable::new("learner", learner_renderer, empty_context);

	// Act
	let mut form = String::new();
	table.render_search_form(&mut form);
	let mut empty_state = String::new();
	table.render_empty_state(&mut empty_state);
	let html = table.render().unwrap();

	// Assert
	assert!(form.is_empty());
	assert_eq!(empty_state, "No items found.");
	assert!(!html.contains("<form"));
	assert!(html.contains(r#"colspan="2">No items found.</td>"#));
}

#[rstest]
fn test_empty_state_uses_filtered_text(
	learner_renderer: BaseTableRenderer<TestLearner>,
	empty_context: RenderContext,
) {
	let mut hooks = ListTableHooks::new();
	hooks.add_no_items_text_filter(DEFAULT_PRIORITY, |_| "No learners yet.".to_string());
	let table = ListTable::new("learner", learner_renderer, empty_context).with_hooks(hooks);

	let mut out = String::new();
	table.render_empty_state(&mut out);

	assert_eq!(out, "No learners yet.");
}

#[rstest]
fn test_empty_state_uses_configured_text(
	learner_renderer: BaseTableRenderer<TestLearner>,
	empty_context: RenderContext,
) {
	let settings = ListTableSettings::from_toml_str(r#"no_items_text = "Nothing here.""#).unwrap();
	let table = ListTable::new("learner", learner_renderer, empty_context).with_settings(settings);

	let mut out = String::new();
	table.render_empty_state(&mut out);

	assert_eq!(out, "Nothing here.");
}

#[rstest]
fn test_search_form_shown_for_active_search_on_empty_table(
	learner_renderer: BaseTableRenderer<TestLearner>,
) {
	let context =
		RenderContext::from_query_string("admin-learners", "page=learners&s=zed").unwrap();
	let table = ListTable::new("learner", learner_renderer, context);

	let mut out = String::new();
	table.render_search_form(&mut out);

	assert!(out.starts_with(r#"<form method="get"><input type="hidden" name="page" value="learners" />"#));
	assert!(out.contains(r#"name="s" value="zed""#));
	assert!(!out.contains(r#"type="hidden" name="s""#));
}

#[rstest]
fn test_search_box_with_explicit_label(
	learner_renderer: BaseTableRenderer<TestLearner>,
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	let table =
		ListTable::new("learner", learner_renderer, empty_context).with_items(sample_learners);

	let mut out = String::new();
	table.render_search_box("Find Learners", "learners", &mut out);

	assert!(out.contains(r#"<input type="search" id="learners-search-input" name="s" value="" />"#));
	assert!(out.contains(r#"value="Find Learners""#));
}

#[rstest]
fn test_sortable_columns_returned_verbatim(empty_context: RenderContext) {
	// Arrange
	let sortable = SortableColumns::new()
		.with("name", SortableColumn::new("name"))
		.with("not_a_column", SortableColumn::new("x").descending(true));
	let renderer: BaseTableRenderer<TestLearner> = BaseTableRenderer::new()
		.with_columns(Columns::new().with("name", "Name"))
		.with_sortable_columns(sortable.clone());

	// Act
	let table = ListTable::new("learner", renderer, empty_context);

	// Assert
	assert_eq!(table.sortable_columns(), sortable);
	assert_eq!(table.columns(), Columns::new().with("name", "Name"));
	assert_eq!(
		table
			.column_header_state()
			.sortable
			.keys()
			.collect::<Vec<_>>(),
		vec!["name"]
	);
}

#[rstest]
fn test_column_header_state_is_memoized(
	learner_renderer: BaseTableRenderer<TestLearner>,
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	// Arrange
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let mut hooks = ListTableHooks::new();
	hooks.add_sortable_columns_filter("admin-learners", DEFAULT_PRIORITY, move |columns| {
		counter.fetch_add(1, Ordering::SeqCst);
		columns
	});
	let table = ListTable::new("learner", learner_renderer, empty_context)
		.with_hooks(hooks)
		.with_items(sample_learners);

	// Act
	let first = table.column_header_state();
	let second = table.column_header_state();
	table.render().unwrap();

	// Assert
	assert!(std::ptr::eq(first, second));
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_remove_sortable_columns_filter_disables_sorting(
	learner_renderer: BaseTableRenderer<TestLearner>,
	empty_context: RenderContext,
) {
	let mut table = ListTable::new("learner", learner_renderer, empty_context);
	table
		.hooks_mut()
		.add_sortable_columns_filter("admin-learners", DEFAULT_PRIORITY, remove_sortable_columns);

	let state = table.column_header_state();

	assert!(state.sortable.is_empty());
	assert_eq!(state.columns.len(), 2);
}

#[rstest]
fn test_hooks_mut_invalidates_header_state(
	learner_renderer: BaseTableRenderer<TestLearner>,
	empty_context: RenderContext,
) {
	let mut table = ListTable::new("learner", learner_renderer, empty_context);
	assert_eq!(table.column_header_state().sortable.len(), 1);

	table
		.hooks_mut()
		.add_sortable_columns_filter("admin-learners", DEFAULT_PRIORITY, remove_sortable_columns);

	assert!(table.column_header_state().sortable.is_empty());
}

#[rstest]
fn test_sortable_filter_for_other_screen_is_ignored(
	learner_renderer: BaseTableRenderer<TestLearner>,
	empty_context: RenderContext,
) {
	let mut hooks = ListTableHooks::new();
	hooks.add_sortable_columns_filter("edit-course", DEFAULT_PRIORITY, remove_sortable_columns);
	let table = ListTable::new("learner", learner_renderer, empty_context).with_hooks(hooks);

	assert_eq!(table.column_header_state().sortable.len(), 1);
}

#[rstest]
fn test_display_resets_row_alternation(
	learner_renderer: BaseTableRenderer<TestLearner>,
	sample_learners: Vec<TestLearner>,
	empty_context: RenderContext,
) {
	let table =
		ListTable::new("learner", learner_renderer, empty_context).with_items(sample_learners);

	let first = table.render().unwrap();
	let second = table.render().unwrap();

	assert_eq!(first, second);
}

#[rstest]
fn test_labels_follow_token_and_settings(empty_context: RenderContext) {
	// Arrange
	let table = ListTable::new("course", CourseTable::default(), empty_context.clone());
	let settings = ListTableSettings {
		label_prefix: "lms_".to_string(),
		..ListTableSettings::default()
	};

	// Act
	let renamed = ListTable::new("course", CourseTable::default(), empty_context)
		.with_settings(settings);

	// Assert
	assert_eq!(table.labels().singular, "wp_list_table_course");
	assert_eq!(table.labels().plural, "wp_list_table_courses");
	assert!(table
		.render()
		.unwrap()
		.contains(r#"<table class="list-table widefat fixed wp_list_table_courses">"#));
	assert_eq!(renamed.labels().plural, "lms_courses");
}

#[rstest]
fn test_display_layout(sample_courses: Vec<TestCourse>) {
	// Arrange
	let context = RenderContext::new("edit-course").with_query_param("page", "courses");
	let table = ListTable::new("course", CourseTable::default(), context).with_items(sample_courses);

	// Act
	let html = table.render().unwrap();

	// Assert
	let order = [
		r#"<div class="tablenav top">"#,
		r#"<form method="get">"#,
		r#"<table class="list-table widefat fixed wp_list_table_courses">"#,
		r#"<thead><tr><th scope="col" id="id""#,
		r#"<tbody id="the-list"><tr class="alternate">"#,
		r#"</tbody><tfoot><tr><th scope="col" class="manage-column column-id">"#,
		r#"</tfoot></table><div class="tablenav bottom">"#,
	];
	let mut cursor = 0;
	for fragment in order {
		let found = html[cursor..]
			.find(fragment)
			.unwrap_or_else(|| panic!("missing {fragment} after byte {cursor}"));
		cursor += found + fragment.len();
	}
	assert!(html.ends_with(r#"<br class="clear" /></div>"#));
}

#[rstest]
fn test_empty_state_colspan_counts_visible_columns() {
	let context = RenderContext::new("edit-course").with_hidden_columns(["learners"]);
	let table = ListTable::new("course", CourseTable::default(), context);

	let mut out = String::new();
	table.render_rows(&mut out).unwrap();

	assert_eq!(
		out,
		r#"<tr class="no-items"><td class="colspanchange" colspan="2">No items found.</td></tr>"#
	);
}

#[rstest]
fn test_pagination_rendered_in_tablenav(sample_courses: Vec<TestCourse>) {
	let context = RenderContext::new("edit-course").with_query_param("paged", "2");
	let table = ListTable::new("course", CourseTable::default(), context)
		.with_items(sample_courses)
		.with_pagination(45);

	let html = table.render().unwrap();

	assert_eq!(table.pagination().map(|p| p.current_page), Some(2));
	assert_eq!(html.matches(r#"<span class="displaying-num">45 items</span>"#).count(), 2);
	assert!(html.contains(r#"2 of <span class="total-pages">3</span>"#));
}

fn row_openers(html: &str) -> Vec<&str> {
	html.split("</tr>")
		.filter(|row| !row.is_empty())
		.map(|row| {
			if row.starts_with(r#"<tr class="alternate">"#) {
				"alternate"
			} else {
				""
			}
		})
		.collect()
}

proptest! {
	#[test]
	fn prop_rows_alternate_starting_with_alternate(count in 1usize..40) {
		let items: Vec<TestLearner> = (0..count)
			.map(|index| TestLearner { id: index as u32, name: format!("learner{index}") })
			.collect();
		let table = ListTable::new("learner", learner_renderer(), empty_context()).with_items(items);

		let mut out = String::new();
		table.render_rows(&mut out).unwrap();

		let expected: Vec<&str> = (0..count)
			.map(|index| if index % 2 == 0 { "alternate" } else { "" })
			.collect();
		prop_assert_eq!(row_openers(&out), expected);
	}

	#[test]
	fn prop_rows_keep_input_order(names in prop::collection::vec("[a-z]{1,8}", 1..20)) {
		let items: Vec<TestLearner> = names
			.iter()
			.enumerate()
			.map(|(index, name)| TestLearner { id: index as u32, name: name.clone() })
			.collect();
		let table = ListTable::new("learner", learner_renderer(), empty_context()).with_items(items);

		let mut out = String::new();
		table.render_rows(&mut out).unwrap();

		let marker = r#"<td class="name column-name">"#;
		let rendered: Vec<String> = out
			.split(marker)
			.skip(1)
			.map(|rest| rest.split("</td>").next().unwrap_or_default().to_string())
			.collect();
		prop_assert_eq!(rendered, names);
	}
}
