use crate::commands::{CmdMessage, CmdResult, Shop};
use crate::error::{Result, ShopError};
use crate::orders::OrderDraft;

pub fn run(shop: &mut Shop, draft: OrderDraft) -> Result<CmdResult> {
    if shop.catalog.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("There is no flower in store!")));
    }

    match shop.orders.add(draft, &shop.catalog) {
        Ok(order) => {
            let order = order.clone();
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!(
                    "{}'s order has been added to store!",
                    order.customer
                )))
                .with_listed_orders(vec![order]))
        }
        Err(e @ (ShopError::Invalid { .. } | ShopError::FlowerNotFound(_))) => {
            Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::LineRequest;
    use crate::store::memory::fixtures::{date, ShopFixture};

    fn draft(lines: Vec<LineRequest>) -> OrderDraft {
        OrderDraft {
            date: date(10, 3, 2024),
            customer: "Ann Lee".into(),
            lines,
        }
    }

    #[test]
    fn takes_order_against_catalog() {
        let mut shop = ShopFixture::new()
            .with_flower("F001", "Rose", 2.5)
            .clean()
            .build();

        let result = run(&mut shop, draft(vec![LineRequest::new("F001", 4)])).unwrap();

        assert!(!result.has_errors());
        let order = &result.listed_orders[0];
        assert_eq!(order.id, "0001");
        assert!((order.total_cost() - 10.0).abs() < 1e-9);
        assert!(shop.orders.is_dirty());
        assert!(!shop.catalog.is_dirty());
    }

    #[test]
    fn empty_catalog_refuses_orders() {
        let mut shop = Shop::new();
        let result = run(&mut shop, draft(vec![LineRequest::new("F001", 1)])).unwrap();
        assert!(result.listed_orders.is_empty());
        assert!(shop.orders.is_empty());
    }

    #[test]
    fn unknown_flower_is_reported() {
        let mut shop = ShopFixture::new().with_flower("F001", "Rose", 2.5).build();
        let result = run(&mut shop, draft(vec![LineRequest::new("F002", 1)])).unwrap();
        assert!(result.has_errors());
        assert!(shop.orders.is_empty());
    }

    #[test]
    fn overflowing_order_is_refused_and_saved_book_reloads() {
        use crate::commands::persist;
        use crate::store::fs::FileStore;

        let mut shop = ShopFixture::new()
            .with_flower("F001", "Rose", 2.5)
            .with_flower("F002", "Gold Orchid", 1e300)
            .build();
        run(&mut shop, draft(vec![LineRequest::new("F001", 2)])).unwrap();

        let result = run(&mut shop, draft(vec![LineRequest::new("F002", 4_000_000_000)])).unwrap();
        assert!(result.has_errors());
        assert_eq!(shop.orders.len(), 1);

        let dir = tempfile::TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(!persist::save(&mut shop, &mut store).unwrap().has_errors());

        let mut restored = Shop::new();
        persist::load(&mut restored, &store).unwrap();
        assert_eq!(restored.orders.snapshot(), shop.orders.snapshot());
    }
}
