//! In-memory item repository

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{CategoryId, Item, ItemId};

use super::lock_poisoned;

/// Repository for items
#[derive(Default)]
pub struct ItemRepository {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl ItemRepository {
    /// Create an empty item repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with seeded items
    pub(crate) fn seed(&self, seeded: Vec<Item>) -> Result<(), PocketbookError> {
        let mut items = self.items.write().map_err(lock_poisoned)?;
        items.clear();
        items.extend(seeded.into_iter().map(|item| (item.id, item)));
        Ok(())
    }

    /// Insert or replace an item, returning the previous version
    pub(crate) fn upsert(&self, item: Item) -> Result<Option<Item>, PocketbookError> {
        let mut items = self.items.write().map_err(lock_poisoned)?;
        Ok(items.insert(item.id, item))
    }

    /// Remove an item, returning it if it existed
    pub(crate) fn remove(&self, id: ItemId) -> Result<Option<Item>, PocketbookError> {
        let mut items = self.items.write().map_err(lock_poisoned)?;
        Ok(items.remove(&id))
    }

    /// Get an item by ID
    pub fn get(&self, id: ItemId) -> Result<Option<Item>, PocketbookError> {
        let items = self.items.read().map_err(lock_poisoned)?;
        Ok(items.get(&id).cloned())
    }

    /// Get all items, newest first
    pub fn get_all(&self) -> Result<Vec<Item>, PocketbookError> {
        let items = self.items.read().map_err(lock_poisoned)?;
        let mut list: Vec<_> = items.values().cloned().collect();
        list.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(list)
    }

    /// Get the items of one category, newest first
    pub fn get_by_category(&self, cid: CategoryId) -> Result<Vec<Item>, PocketbookError> {
        Ok(self.get_all()?.into_iter().filter(|i| i.cid == cid).collect())
    }

    /// Find an item by full ID or unique ID prefix
    pub fn find(&self, identifier: &str) -> Result<Option<Item>, PocketbookError> {
        if let Ok(id) = identifier.parse::<ItemId>() {
            return self.get(id);
        }

        let items = self.items.read().map_err(lock_poisoned)?;
        let mut matches = items.values().filter(|i| i.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(Some(item.clone())),
            (Some(_), Some(_)) => Err(PocketbookError::Validation(format!(
                "Ambiguous item id: {}",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Number of items
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let items = self.items.read().map_err(lock_poisoned)?;
        Ok(items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemDraft, Money};
    use chrono::NaiveDate;

    fn item(title: &str, day: u32, cid: CategoryId) -> Item {
        Item::new(
            ItemDraft {
                title: title.to_string(),
                amount: Money::from_cents(100),
                date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            },
            cid,
        )
    }

    #[test]
    fn test_get_all_newest_first() {
        let repo = ItemRepository::new();
        let cid = CategoryId::new();
        repo.seed(vec![item("a", 1, cid), item("c", 3, cid), item("b", 2, cid)])
            .unwrap();

        let titles: Vec<_> = repo.get_all().unwrap().into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_upsert_and_remove() {
        let repo = ItemRepository::new();
        let entry = item("lunch", 4, CategoryId::new());
        let id = entry.id;

        assert!(repo.upsert(entry.clone()).unwrap().is_none());
        assert_eq!(repo.upsert(entry).unwrap().map(|i| i.id), Some(id));
        assert_eq!(repo.count().unwrap(), 1);

        assert!(repo.remove(id).unwrap().is_some());
        assert!(repo.remove(id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_find_by_prefix() {
        let repo = ItemRepository::new();
        let entry = item("rent", 1, CategoryId::new());
        let full = entry.id.to_full_string();
        repo.seed(vec![entry.clone()]).unwrap();

        assert_eq!(repo.find(&full).unwrap().unwrap().id, entry.id);
        assert_eq!(repo.find(&entry.id.to_string()).unwrap().unwrap().id, entry.id);
        assert!(repo.find("zzzz").unwrap().is_none());
    }

    #[test]
    fn test_get_by_category() {
        let repo = ItemRepository::new();
        let food = CategoryId::new();
        let travel = CategoryId::new();
        repo.seed(vec![item("bread", 1, food), item("train", 2, travel), item("milk", 3, food)])
            .unwrap();

        let titles: Vec<_> = repo
            .get_by_category(food)
            .unwrap()
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, vec!["milk", "bread"]);
    }
}
