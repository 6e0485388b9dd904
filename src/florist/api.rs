//! # API Facade
//!
//! `ShopApi` is the single entry point for every menu action. It owns the
//! in-process collections ([`Shop`]) and the storage backend, and dispatches to
//! the command layer.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no prompts, no stdout; the console client lives in the binary
//!
//! ## Generic Over DataStore
//!
//! - Production: `ShopApi<FileStore>`
//! - Testing: `ShopApi<InMemoryStore>`

use crate::commands::{self, Shop};
use crate::error::Result;
use crate::model::Flower;
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct ShopApi<S: DataStore> {
    shop: Shop,
    store: S,
}

impl<S: DataStore> ShopApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            shop: Shop::new(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn flower(&self, id: &str) -> Option<&Flower> {
        self.shop.catalog.find_by_id(id)
    }

    pub fn flower_exists(&self, id: &str) -> bool {
        self.shop.catalog.exists(id)
    }

    pub fn has_flowers(&self) -> bool {
        !self.shop.catalog.is_empty()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.shop.has_unsaved_changes()
    }

    pub fn add_flower(&mut self, flower: Flower) -> Result<commands::CmdResult> {
        commands::add_flower::run(&mut self.shop, flower)
    }

    pub fn find_flowers(&self, query: &FlowerQuery) -> Result<commands::CmdResult> {
        commands::find::run(&self.shop, query)
    }

    pub fn update_flower(&mut self, id: &str, patch: &FlowerPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.shop, id, patch)
    }

    pub fn check_delete(&self, id: &str) -> DeleteCheck {
        commands::delete::check(&self.shop, id)
    }

    pub fn delete_flower(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.shop, id)
    }

    pub fn add_order(&mut self, draft: OrderDraft) -> Result<commands::CmdResult> {
        commands::add_order::run(&mut self.shop, draft)
    }

    pub fn orders_between(&self, start: NaiveDate, end: NaiveDate) -> Result<commands::CmdResult> {
        commands::list_orders::run(&self.shop, start, end)
    }

    pub fn sort_orders(
        &self,
        field: SortField,
        direction: SortDirection,
    ) -> Result<commands::CmdResult> {
        commands::sort::run(&self.shop, field, direction)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::persist::save(&mut self.shop, &mut self.store)
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::persist::load(&mut self.shop, &self.store)
    }
}

pub use crate::catalog::FlowerPatch;
pub use crate::orders::{LineRequest, OrderDraft, SortDirection, SortField};
pub use commands::delete::DeleteCheck;
pub use commands::find::FlowerQuery;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{date, flower};
    use crate::store::memory::InMemoryStore;

    fn api() -> ShopApi<InMemoryStore> {
        let mut api = ShopApi::new(InMemoryStore::new());
        api.add_flower(flower("F001", "Rose", 2.0)).unwrap();
        api.add_flower(flower("F002", "Tulip", 1.0)).unwrap();
        api
    }

    fn order_rose(api: &mut ShopApi<InMemoryStore>, quantity: u32) -> CmdResult {
        api.add_order(OrderDraft {
            date: date(5, 5, 2024),
            customer: "Ann".into(),
            lines: vec![LineRequest::new("F001", quantity)],
        })
        .unwrap()
    }

    #[test]
    fn delete_is_blocked_while_ordered() {
        let mut api = api();
        order_rose(&mut api, 3);

        let result = api.delete_flower("F001").unwrap();
        assert!(result.has_errors());
        assert!(api.flower_exists("F001"));

        let result = api.delete_flower("F002").unwrap();
        assert!(!result.has_errors());
        assert!(!api.flower_exists("F002"));
    }

    #[test]
    fn price_edit_keeps_order_total() {
        let mut api = api();
        order_rose(&mut api, 3);

        let patch = FlowerPatch::from_answers("", "", "9.99", "");
        api.update_flower("F001", &patch).unwrap();

        let listed = api
            .orders_between(date(1, 1, 2024), date(31, 12, 2024))
            .unwrap()
            .listed_orders;
        assert!((listed[0].total_cost() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn save_clears_unsaved_changes() {
        let mut api = api();
        order_rose(&mut api, 1);
        assert!(api.has_unsaved_changes());

        api.save().unwrap();
        assert!(!api.has_unsaved_changes());
        assert_eq!(api.store().saves(), 2);
    }

    #[test]
    fn load_restores_saved_state() {
        let mut api = api();
        order_rose(&mut api, 1);
        api.save().unwrap();

        api.delete_flower("F002").unwrap();
        assert!(api.has_unsaved_changes());

        api.load().unwrap();
        assert!(api.flower_exists("F002"));
        assert!(!api.has_unsaved_changes());
    }

    #[test]
    fn sort_dispatches() {
        let mut api = api();
        order_rose(&mut api, 5);
        order_rose(&mut api, 1);

        let sorted = api
            .sort_orders(SortField::TotalCost, SortDirection::Ascending)
            .unwrap()
            .listed_orders;
        assert_eq!(sorted[0].id, "0002");
        assert_eq!(sorted[1].id, "0001");
    }
}
