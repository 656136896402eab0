//! Action set for Pocketbook
//!
//! The only code that mutates the [`DataStore`]. Each action looks records up
//! explicitly and reports a missing id as `NotFound`. The TUI runs actions
//! off the event loop through [`Worker`]; the CLI calls them directly.

mod task;

pub use task::{Completion, Request, RequestKind, Response, SessionId, Worker, SHELL_SESSION};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Category, CategoryId, Item, ItemDraft, ItemId};
use crate::storage::DataStore;

/// Everything a view needs on mount
#[derive(Debug, Clone, Default)]
pub struct InitialData {
    /// All items, newest first
    pub items: Vec<Item>,
    /// All categories in display order
    pub categories: Vec<Category>,
}

/// The item being edited plus the categories to choose from
#[derive(Debug, Clone, Default)]
pub struct EditData {
    pub edit_item: Option<Item>,
    pub categories: Vec<Category>,
}

impl EditData {
    /// Category of the edited item, if both resolve
    pub fn edit_category(&self) -> Option<&Category> {
        let item = self.edit_item.as_ref()?;
        self.categories.iter().find(|c| c.id == item.cid)
    }
}

/// Named actions over a shared data store
#[derive(Clone)]
pub struct Actions {
    store: Arc<DataStore>,
    audit: Option<Arc<AuditLogger>>,
}

impl Actions {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store, audit: None }
    }

    /// Record item mutations in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(Arc::new(logger));
        self
    }

    /// Read-only access to the store
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Snapshot of all items and categories
    pub fn get_initial_data(&self) -> PocketbookResult<InitialData> {
        let data = InitialData {
            items: self.store.items.get_all()?,
            categories: self.store.categories.get_all()?,
        };
        debug!(
            items = data.items.len(),
            categories = data.categories.len(),
            "loaded initial data"
        );
        Ok(data)
    }

    /// The item with `id` (if any) and all categories
    pub fn get_edit_data(&self, id: ItemId) -> PocketbookResult<EditData> {
        let edit_item = self.store.items.get(id)?;
        if edit_item.is_none() {
            debug!(item = %id, "edit data requested for unknown item");
        }
        Ok(EditData {
            edit_item,
            categories: self.store.categories.get_all()?,
        })
    }

    /// Create a new item in category `cid`
    pub fn create_item(&self, draft: ItemDraft, cid: CategoryId) -> PocketbookResult<Item> {
        validate_draft(&draft)?;
        self.require_category(cid)?;

        let item = Item::new(draft, cid);
        self.store.items.upsert(item.clone())?;
        info!(item = %item.id, category = %cid, "created item");

        self.audit(AuditEntry::create(
            EntityType::Item,
            item.id.to_string(),
            Some(item.title.clone()),
            &item,
        ));

        Ok(item)
    }

    /// Replace the editable fields of item `id`
    pub fn update_item(
        &self,
        id: ItemId,
        draft: ItemDraft,
        cid: CategoryId,
    ) -> PocketbookResult<Item> {
        validate_draft(&draft)?;
        self.require_category(cid)?;

        let before = self
            .store
            .items
            .get(id)?
            .ok_or_else(|| PocketbookError::item_not_found(id.to_string()))?;

        let mut item = before.clone();
        item.apply(draft, cid);
        self.store.items.upsert(item.clone())?;
        info!(item = %id, category = %cid, "updated item");

        self.audit(AuditEntry::update(
            EntityType::Item,
            id.to_string(),
            Some(item.title.clone()),
            &before,
            &item,
            Item::diff_summary(&before, &item),
        ));

        Ok(item)
    }

    /// Remove item `id`; categories are untouched
    pub fn delete_item(&self, id: ItemId) -> PocketbookResult<Item> {
        let removed = self
            .store
            .items
            .remove(id)?
            .ok_or_else(|| PocketbookError::item_not_found(id.to_string()))?;
        info!(item = %id, "deleted item");

        self.audit(AuditEntry::delete(
            EntityType::Item,
            id.to_string(),
            Some(removed.title.clone()),
            &removed,
        ));

        Ok(removed)
    }

    /// Run a queued request
    pub fn perform(&self, request: Request) -> PocketbookResult<Response> {
        match request {
            Request::GetInitialData => self.get_initial_data().map(Response::InitialData),
            Request::GetEditData(id) => self.get_edit_data(id).map(Response::EditData),
            Request::CreateItem { draft, cid } => {
                self.create_item(draft, cid).map(Response::Created)
            }
            Request::UpdateItem { id, draft, cid } => {
                self.update_item(id, draft, cid).map(Response::Updated)
            }
            Request::DeleteItem(id) => self.delete_item(id).map(Response::Deleted),
        }
    }

    fn require_category(&self, cid: CategoryId) -> PocketbookResult<Category> {
        self.store
            .categories
            .get(cid)?
            .ok_or_else(|| PocketbookError::category_not_found(cid.to_string()))
    }

    // The store is already mutated at this point, so a failed audit write
    // is reported but does not fail the action.
    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

fn validate_draft(draft: &ItemDraft) -> PocketbookResult<()> {
    draft
        .validate()
        .map_err(|e| PocketbookError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{CategoryType, Money};
    use crate::storage::SeedData;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn draft(title: &str, cents: i64) -> ItemDraft {
        ItemDraft {
            title: title.to_string(),
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    fn demo_actions() -> (Actions, SeedData) {
        let seed = SeedData::demo();
        let store = DataStore::seeded(seed.clone()).unwrap();
        (Actions::new(Arc::new(store)), seed)
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (actions, seed) = demo_actions();
        let target = seed.items[1].id;

        let removed = actions.delete_item(target).unwrap();
        assert_eq!(removed.id, target);

        let remaining = actions.store().items.get_all().unwrap();
        assert_eq!(remaining.len(), seed.items.len() - 1);
        for item in seed.items.iter().filter(|i| i.id != target) {
            let kept = remaining.iter().find(|r| r.id == item.id).unwrap();
            assert_eq!(kept, item);
        }
        assert_eq!(
            actions.store().categories.count().unwrap(),
            seed.categories.len()
        );
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let (actions, seed) = demo_actions();
        let err = actions.delete_item(ItemId::new()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(actions.store().items.count().unwrap(), seed.items.len());
    }

    #[test]
    fn test_create_requires_existing_category() {
        let (actions, _) = demo_actions();
        let err = actions
            .create_item(draft("Ghost", 100), CategoryId::new())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_and_update() {
        let (actions, seed) = demo_actions();
        let food = seed.categories[1].id;
        let salary = seed.categories[3].id;

        let created = actions.create_item(draft("Bakery", 480), food).unwrap();
        assert_eq!(actions.store().items.get(created.id).unwrap(), Some(created.clone()));

        let updated = actions
            .update_item(created.id, draft("Side gig", 9000), salary)
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.cid, salary);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn test_invalid_draft_rejected() {
        let (actions, seed) = demo_actions();
        let err = actions
            .create_item(draft("", 100), seed.categories[0].id)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_edit_data_resolves_category() {
        let (actions, seed) = demo_actions();
        let data = actions.get_edit_data(seed.items[0].id).unwrap();
        assert_eq!(data.edit_category().map(|c| c.kind), Some(CategoryType::Outcome));

        let missing = actions.get_edit_data(ItemId::new()).unwrap();
        assert!(missing.edit_item.is_none());
        assert!(missing.edit_category().is_none());
        assert_eq!(missing.categories.len(), seed.categories.len());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let (actions, seed) = demo_actions();
        let actions = actions.with_audit(AuditLogger::new(temp_dir.path().join("audit.log")));

        let created = actions
            .create_item(draft("Cinema", 1400), seed.categories[2].id)
            .unwrap();
        actions
            .update_item(created.id, draft("Cinema + snacks", 2100), seed.categories[2].id)
            .unwrap();
        actions.delete_item(created.id).unwrap();

        let entries = AuditLogger::new(temp_dir.path().join("audit.log"))
            .read_all()
            .unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
        assert!(entries[1].diff_summary.as_deref().unwrap().contains("amount"));
    }
}
