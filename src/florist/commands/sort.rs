use crate::commands::{CmdMessage, CmdResult, Shop};
use crate::error::Result;
use crate::orders::{SortDirection, SortField};

pub fn run(shop: &Shop, field: SortField, direction: SortDirection) -> Result<CmdResult> {
    let orders: Vec<_> = shop
        .orders
        .sort_by(field, direction)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if orders.is_empty() {
        result.add_message(CmdMessage::info("Order's list empty!"));
    }
    Ok(result.with_listed_orders(orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{date, order, ShopFixture};

    #[test]
    fn sorts_by_customer_descending() {
        let shop = ShopFixture::new()
            .with_order(order("0001", date(1, 1, 2024), "Bob", &[("F001", 1, 1.0)]))
            .with_order(order("0002", date(1, 1, 2024), "Ann", &[("F001", 1, 1.0)]))
            .with_order(order("0003", date(1, 1, 2024), "Cat", &[("F001", 1, 1.0)]))
            .build();

        let result = run(&shop, SortField::Customer, SortDirection::Descending).unwrap();
        let names: Vec<_> = result
            .listed_orders
            .iter()
            .map(|o| o.customer.as_str())
            .collect();
        assert_eq!(names, vec!["Cat", "Bob", "Ann"]);
    }

    #[test]
    fn empty_book() {
        let result = run(&Shop::new(), SortField::Id, SortDirection::Ascending).unwrap();
        assert!(result.listed_orders.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
