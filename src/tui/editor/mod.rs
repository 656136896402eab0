//! Create/edit workflow for items
//!
//! [`ItemEditor`] holds the draft state of one editor session: the selected
//! tab, the selected category, the category error flag, the item being edited
//! and the form inputs. It never touches the store; it produces [`Request`]s
//! for the app to dispatch and takes action results back through
//! [`ItemEditor::apply_initial_data`] and [`ItemEditor::apply_edit_data`].
//!
//! Invariants kept by every method:
//! - while a category is selected, the tab equals its type
//! - `category_error` is only set by a submit without a category

pub mod form;

use thiserror::Error;

use crate::actions::{EditData, InitialData, Request, SessionId};
use crate::models::{filter_by_type, Category, CategoryId, CategoryType, Item, ItemId};
use crate::tui::widgets::input::TextInput;

pub use form::{EditorField, ItemForm};

/// Why a submit produced no request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please select a category")]
    NoCategory,
    #[error("{0}")]
    InvalidForm(String),
    #[error("Already saving")]
    InFlight,
}

/// Draft state of one create or edit session
#[derive(Debug, Clone)]
pub struct ItemEditor {
    session: SessionId,
    edit_id: Option<ItemId>,
    selected_tab: CategoryType,
    selected_category_id: Option<CategoryId>,
    category_error: bool,
    edit_item: Option<Item>,
    categories: Vec<Category>,
    form_error: Option<String>,
    submitting: bool,
    touched: bool,

    /// Text inputs and field focus
    pub form: ItemForm,

    /// Highlighted row in the filtered category list
    pub category_cursor: usize,
}

impl ItemEditor {
    /// Start a create session
    pub fn create(session: SessionId, categories: Vec<Category>) -> Self {
        Self {
            session,
            edit_id: None,
            selected_tab: CategoryType::Outcome,
            selected_category_id: None,
            category_error: false,
            edit_item: None,
            categories,
            form_error: None,
            submitting: false,
            touched: false,
            form: ItemForm::new(),
            category_cursor: 0,
        }
    }

    /// Start an edit session seeded from the current store snapshot
    pub fn edit(
        session: SessionId,
        id: ItemId,
        edit_item: Option<Item>,
        categories: Vec<Category>,
    ) -> Self {
        let mut editor = Self::create(session, categories);
        editor.edit_id = Some(id);
        editor.edit_item = edit_item;
        editor.seed_from_edit_item();
        editor
    }

    /// Requests to dispatch when the session mounts, in order
    pub fn mount_requests(&self) -> Vec<Request> {
        let mut requests = vec![Request::GetInitialData];
        if let Some(id) = self.edit_id {
            requests.push(Request::GetEditData(id));
        }
        requests
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn edit_id(&self) -> Option<ItemId> {
        self.edit_id
    }

    pub fn is_edit(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn selected_tab(&self) -> CategoryType {
        self.selected_tab
    }

    pub fn selected_category_id(&self) -> Option<CategoryId> {
        self.selected_category_id
    }

    pub fn category_error(&self) -> bool {
        self.category_error
    }

    pub fn edit_item(&self) -> Option<&Item> {
        self.edit_item.as_ref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Switch tabs; always drops the category selection and error
    pub fn select_tab(&mut self, kind: CategoryType) {
        self.selected_tab = kind;
        self.selected_category_id = None;
        self.category_error = false;
        self.category_cursor = 0;
        self.touched = true;
    }

    /// Switch to the tab at `index`; out of range is ignored
    pub fn select_tab_index(&mut self, index: usize) {
        if let Some(kind) = CategoryType::from_index(index) {
            self.select_tab(kind);
        }
    }

    pub fn toggle_tab(&mut self) {
        self.select_tab(self.selected_tab.toggled());
    }

    /// Select a category; the tab follows the category's type
    pub fn select_category(&mut self, id: CategoryId) {
        if let Some(kind) = self.category(id).map(|c| c.kind) {
            self.selected_tab = kind;
        }
        self.selected_category_id = Some(id);
        self.category_error = false;
        self.touched = true;
        self.sync_cursor();
    }

    /// Select the highlighted row of the category list
    pub fn select_highlighted(&mut self) {
        let id = self
            .filtered_categories()
            .get(self.category_cursor)
            .map(|c| c.id);
        if let Some(id) = id {
            self.select_category(id);
        }
    }

    pub fn cursor_up(&mut self) {
        self.category_cursor = self.category_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let max = self.filtered_categories().len().saturating_sub(1);
        self.category_cursor = (self.category_cursor + 1).min(max);
    }

    /// Categories of the current tab, in store order
    pub fn filtered_categories(&self) -> Vec<&Category> {
        filter_by_type(&self.categories, self.selected_tab)
    }

    /// The selected category, if it resolves
    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_category_id.and_then(|id| self.category(id))
    }

    /// Edit the focused text input
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if let Some(input) = self.form.focused_input() {
            edit(input);
            self.form_error = None;
            self.touched = true;
        }
    }

    /// Take a fresh `get_initial_data` result
    pub fn apply_initial_data(&mut self, data: InitialData) {
        self.categories = data.categories;
        self.clamp_cursor();
    }

    /// Take a fresh `get_edit_data` result
    ///
    /// The draft is reseeded only if the user has not changed anything yet.
    pub fn apply_edit_data(&mut self, data: EditData) {
        self.categories = data.categories;
        self.edit_item = data.edit_item;
        if !self.touched {
            self.seed_from_edit_item();
        }
        self.clamp_cursor();
    }

    /// Validate and build the create or update request
    pub fn submit(&mut self) -> Result<Request, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }

        let Some(cid) = self.selected_category_id else {
            self.category_error = true;
            return Err(SubmitError::NoCategory);
        };

        let draft = self.form.build().map_err(|msg| {
            self.form_error = Some(msg.clone());
            SubmitError::InvalidForm(msg)
        })?;

        self.form_error = None;
        self.submitting = true;
        Ok(match self.edit_id {
            Some(id) => Request::UpdateItem { id, draft, cid },
            None => Request::CreateItem { draft, cid },
        })
    }

    /// Re-enable submit after the dispatched action failed
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.form_error = Some(message.into());
    }

    fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn seed_from_edit_item(&mut self) {
        let Some(item) = &self.edit_item else {
            self.selected_tab = CategoryType::Outcome;
            self.selected_category_id = None;
            return;
        };

        self.selected_tab = self
            .category(item.cid)
            .map(|c| c.kind)
            .unwrap_or(CategoryType::Outcome);
        self.selected_category_id = Some(item.cid);
        self.form = ItemForm::from_item(item);
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        let position = self.selected_category_id.and_then(|id| {
            self.filtered_categories()
                .iter()
                .position(|c| c.id == id)
        });
        if let Some(position) = position {
            self.category_cursor = position;
        }
    }

    fn clamp_cursor(&mut self) {
        let max = self.filtered_categories().len().saturating_sub(1);
        self.category_cursor = self.category_cursor.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemDraft, Money};
    use chrono::NaiveDate;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("Salary", CategoryType::Income),
            Category::new("Food", CategoryType::Outcome),
            Category::new("Bonus", CategoryType::Income),
            Category::new("Travel", CategoryType::Outcome),
        ]
    }

    fn item_in(cid: CategoryId) -> Item {
        Item::new(
            ItemDraft {
                title: "Dinner".into(),
                amount: Money::from_cents(3200),
                date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            },
            cid,
        )
    }

    fn fill_form(editor: &mut ItemEditor) {
        editor.form.title_input = TextInput::new().content("Lunch");
        editor.form.amount_input = TextInput::new().content("9.90");
        editor.form.date_input = TextInput::new().content("2024-06-01");
    }

    #[test]
    fn test_create_defaults_to_outcome() {
        let editor = ItemEditor::create(1, categories());
        assert_eq!(editor.selected_tab(), CategoryType::Outcome);
        assert_eq!(editor.selected_category_id(), None);
        assert!(!editor.category_error());
        assert_eq!(editor.mount_requests(), vec![Request::GetInitialData]);
    }

    #[test]
    fn test_edit_mount_requests_initial_then_edit_data() {
        let id = ItemId::new();
        let editor = ItemEditor::edit(1, id, None, categories());
        assert_eq!(
            editor.mount_requests(),
            vec![Request::GetInitialData, Request::GetEditData(id)]
        );
    }

    #[test]
    fn test_submit_without_category_sets_error() {
        let mut editor = ItemEditor::create(1, categories());
        fill_form(&mut editor);

        assert_eq!(editor.submit(), Err(SubmitError::NoCategory));
        assert!(editor.category_error());
        assert!(!editor.is_submitting());
    }

    #[test]
    fn test_submit_with_dangling_category_dispatches() {
        let mut editor = ItemEditor::create(1, categories());
        fill_form(&mut editor);
        let dangling = CategoryId::new();
        editor.select_category(dangling);

        assert!(editor.selected_category().is_none());
        let request = editor.submit().unwrap();
        assert!(matches!(request, Request::CreateItem { cid, .. } if cid == dangling));
        assert!(!editor.category_error());
    }

    #[test]
    fn test_orphan_item_update_keeps_its_category() {
        let orphan = item_in(CategoryId::new());
        let mut editor = ItemEditor::edit(1, orphan.id, Some(orphan.clone()), categories());
        assert_eq!(editor.selected_tab(), CategoryType::Outcome);

        let request = editor.submit().unwrap();
        assert!(matches!(
            request,
            Request::UpdateItem { id, cid, .. } if id == orphan.id && cid == orphan.cid
        ));
        assert!(!editor.category_error());

        editor.submit_failed("Category not found");
        assert!(!editor.is_submitting());
    }

    #[test]
    fn test_every_tab_change_resets_selection() {
        let cats = categories();
        let mut editor = ItemEditor::create(1, cats.clone());

        for kind in [CategoryType::Outcome, CategoryType::Income, CategoryType::Income] {
            editor.select_category(cats[1].id);
            let _ = editor.submit();
            editor.select_tab(kind);
            assert_eq!(editor.selected_tab(), kind);
            assert_eq!(editor.selected_category_id(), None);
            assert!(!editor.category_error());
        }

        let _ = editor.submit();
        assert!(editor.category_error());
        editor.select_tab_index(1);
        assert_eq!(editor.selected_tab(), CategoryType::Outcome);
        assert!(!editor.category_error());
    }

    #[test]
    fn test_select_category_aligns_tab() {
        let cats = categories();
        let mut editor = ItemEditor::create(1, cats.clone());

        editor.select_category(cats[2].id);
        assert_eq!(editor.selected_tab(), CategoryType::Income);
        assert_eq!(editor.selected_category().map(|c| c.id), Some(cats[2].id));
        assert_eq!(editor.category_cursor, 1);
    }

    #[test]
    fn test_filtering_keeps_original_order() {
        let cats = categories();
        let mut editor = ItemEditor::create(1, cats.clone());
        editor.select_tab(CategoryType::Income);

        let names: Vec<_> = editor
            .filtered_categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Salary", "Bonus"]);
    }

    #[test]
    fn test_edit_seeds_from_item_category() {
        let cats = categories();
        let item = item_in(cats[3].id);
        let editor = ItemEditor::edit(1, item.id, Some(item.clone()), cats);

        assert_eq!(editor.selected_tab(), CategoryType::Outcome);
        assert_eq!(editor.selected_category_id(), Some(item.cid));
        assert_eq!(editor.form.title_input.value(), "Dinner");
    }

    #[test]
    fn test_edit_data_with_missing_category_defaults_to_outcome() {
        let cats = categories();
        let mut editor = ItemEditor::edit(1, ItemId::new(), None, Vec::new());
        let orphan = item_in(CategoryId::new());

        editor.apply_edit_data(EditData {
            edit_item: Some(orphan.clone()),
            categories: cats,
        });
        assert_eq!(editor.selected_tab(), CategoryType::Outcome);
        assert_eq!(editor.selected_category_id(), Some(orphan.cid));
        assert!(editor.selected_category().is_none());
    }

    #[test]
    fn test_edit_data_for_income_item() {
        let cats = categories();
        let item = item_in(cats[0].id);
        let mut editor = ItemEditor::edit(1, item.id, None, Vec::new());
        assert_eq!(editor.selected_tab(), CategoryType::Outcome);

        editor.apply_edit_data(EditData {
            edit_item: Some(item.clone()),
            categories: cats,
        });
        assert_eq!(editor.selected_tab(), CategoryType::Income);
        assert_eq!(editor.edit_item().map(|i| i.id), Some(item.id));
    }

    #[test]
    fn test_edit_data_keeps_user_changes() {
        let cats = categories();
        let item = item_in(cats[0].id);
        let mut editor = ItemEditor::edit(1, item.id, Some(item.clone()), cats.clone());
        editor.select_category(cats[1].id);

        editor.apply_edit_data(EditData {
            edit_item: Some(item),
            categories: cats.clone(),
        });
        assert_eq!(editor.selected_category_id(), Some(cats[1].id));
        assert_eq!(editor.selected_tab(), CategoryType::Outcome);
    }

    #[test]
    fn test_submit_builds_create_and_update() {
        let cats = categories();
        let mut editor = ItemEditor::create(1, cats.clone());
        fill_form(&mut editor);
        editor.select_category(cats[3].id);
        match editor.submit().unwrap() {
            Request::CreateItem { draft, cid } => {
                assert_eq!(cid, cats[3].id);
                assert_eq!(draft.title, "Lunch");
            }
            other => panic!("unexpected request: {:?}", other),
        }

        let item = item_in(cats[1].id);
        let mut editor = ItemEditor::edit(2, item.id, Some(item.clone()), cats);
        match editor.submit().unwrap() {
            Request::UpdateItem { id, cid, .. } => {
                assert_eq!(id, item.id);
                assert_eq!(cid, item.cid);
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_form_blocks_submit() {
        let cats = categories();
        let mut editor = ItemEditor::create(1, cats.clone());
        editor.select_category(cats[1].id);

        assert!(matches!(editor.submit(), Err(SubmitError::InvalidForm(_))));
        assert!(editor.form_error().is_some());
        assert!(!editor.category_error());

        editor.form.set_focus(EditorField::Title);
        editor.edit_input(|input| input.insert('x'));
        assert!(editor.form_error().is_none());
        assert_eq!(editor.form.title_input.value(), "x");
    }

    #[test]
    fn test_double_submit_refused_until_failure() {
        let cats = categories();
        let mut editor = ItemEditor::create(1, cats.clone());
        fill_form(&mut editor);
        editor.select_category(cats[1].id);

        assert!(editor.submit().is_ok());
        assert_eq!(editor.submit(), Err(SubmitError::InFlight));

        editor.submit_failed("Category not found");
        assert_eq!(editor.form_error(), Some("Category not found"));
        assert!(editor.submit().is_ok());
    }

    #[test]
    fn test_income_outcome_scenario() {
        let income = Category::new("Wages", CategoryType::Income);
        let outcome = Category::new("Groceries", CategoryType::Outcome);
        let mut editor = ItemEditor::create(1, Vec::new());
        editor.apply_initial_data(InitialData {
            items: Vec::new(),
            categories: vec![income.clone(), outcome.clone()],
        });
        fill_form(&mut editor);

        assert_eq!(editor.selected_tab(), CategoryType::Outcome);
        let filtered: Vec<_> = editor.filtered_categories().iter().map(|c| c.id).collect();
        assert_eq!(filtered, vec![outcome.id]);

        assert_eq!(editor.submit(), Err(SubmitError::NoCategory));
        assert!(editor.category_error());

        editor.select_highlighted();
        assert!(!editor.category_error());
        assert_eq!(editor.selected_category_id(), Some(outcome.id));

        match editor.submit().unwrap() {
            Request::CreateItem { cid, .. } => assert_eq!(cid, outcome.id),
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut editor = ItemEditor::create(1, categories());
        editor.cursor_down();
        editor.cursor_down();
        editor.cursor_down();
        assert_eq!(editor.category_cursor, 1);
        editor.apply_initial_data(InitialData::default());
        assert_eq!(editor.category_cursor, 0);
        editor.cursor_up();
        assert_eq!(editor.category_cursor, 0);
    }
}
