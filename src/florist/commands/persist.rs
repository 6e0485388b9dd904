//! Saving and loading both collections, flowers first.
//!
//! Each collection succeeds or fails on its own: a failed flower save does not
//! stop the order save, and only a successful save clears that collection's
//! dirty flag.

use crate::commands::{CmdMessage, CmdResult, Shop};
use crate::error::{Result, ShopError};
use crate::store::DataStore;

pub fn save<S: DataStore>(shop: &mut Shop, store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.save_flowers(&shop.catalog.snapshot()) {
        Ok(()) => {
            shop.catalog.mark_saved();
            result.add_message(CmdMessage::success("Flower's list has been saved!"));
        }
        Err(e) => result.add_message(save_failure(e)),
    }

    match store.save_orders(&shop.orders.snapshot()) {
        Ok(()) => {
            shop.orders.mark_saved();
            result.add_message(CmdMessage::success("Order's list has been saved!"));
        }
        Err(e) => result.add_message(save_failure(e)),
    }

    Ok(result)
}

fn save_failure(e: ShopError) -> CmdMessage {
    if let ShopError::EmptyCollection(_) = e {
        return CmdMessage::error(format!("{}. Failure!", e));
    }
    tracing::warn!("save failed: {}", e);
    CmdMessage::error(format!("Failure! {}", e))
}

/// Loads both collections. An empty, missing or unreadable file leaves the
/// in-memory collection as it was.
pub fn load<S: DataStore>(shop: &mut Shop, store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let flowers = store.load_flowers().unwrap_or_else(|e| {
        tracing::warn!("could not read flowers: {}", e);
        Vec::new()
    });
    if flowers.is_empty() {
        result.add_message(CmdMessage::warning("Flower file is empty!"));
    } else {
        shop.catalog.replace_all(flowers);
        result.add_message(CmdMessage::success("Flower's list has been loaded!"));
    }

    let orders = store.load_orders().unwrap_or_else(|e| {
        tracing::warn!("could not read orders: {}", e);
        Vec::new()
    });
    if orders.is_empty() {
        result.add_message(CmdMessage::warning("Order file is empty!"));
    } else {
        shop.orders.replace_all(orders);
        result.add_message(CmdMessage::success("Order's list has been loaded!"));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{date, order, ShopFixture};
    use crate::store::memory::InMemoryStore;

    fn shop() -> Shop {
        ShopFixture::new()
            .with_flower("F001", "Rose", 2.0)
            .with_flower("F002", "Tulip", 1.0)
            .with_order(order("0001", date(1, 1, 2024), "Ann", &[("F001", 2, 4.0)]))
            .build()
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let mut original = shop();

        let saved = save(&mut original, &mut store).unwrap();
        assert!(!saved.has_errors());
        assert!(!original.has_unsaved_changes());

        let mut restored = Shop::new();
        load(&mut restored, &store).unwrap();
        assert_eq!(restored.catalog.snapshot(), original.catalog.snapshot());
        assert_eq!(restored.orders.snapshot(), original.orders.snapshot());
        assert!(!restored.has_unsaved_changes());
    }

    #[test]
    fn empty_orders_fail_alone() {
        let mut store = InMemoryStore::new();
        let mut shop = ShopFixture::new().with_flower("F001", "Rose", 2.0).build();

        let result = save(&mut shop, &mut store).unwrap();

        assert!(result.has_errors());
        assert!(!shop.catalog.is_dirty());
        assert_eq!(store.saves(), 1);
        assert!(store.load_orders().unwrap().is_empty());
    }

    #[test]
    fn loading_nothing_keeps_current_data() {
        let store = InMemoryStore::new();
        let mut shop = shop();

        load(&mut shop, &store).unwrap();

        assert_eq!(shop.catalog.len(), 2);
        assert_eq!(shop.orders.len(), 1);
    }
}
