use crate::commands::{CmdMessage, CmdResult, Shop};
use crate::error::{Result, ShopError};
use crate::model::DATE_FORMAT;
use chrono::NaiveDate;

/// Orders dated between `start` and `end`, both inclusive.
pub fn run(shop: &Shop, start: NaiveDate, end: NaiveDate) -> Result<CmdResult> {
    if end < start {
        return Err(ShopError::invalid(
            "date range",
            format!("the end date must be after {}", start.format(DATE_FORMAT)),
        ));
    }

    let orders: Vec<_> = shop.orders.query(start, end).into_iter().cloned().collect();
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

    fn shop() -> Shop {
        ShopFixture::new()
            .with_order(order("0001", date(1, 1, 2024), "Ann", &[("F001", 1, 1.0)]))
            .with_order(order("0002", date(15, 1, 2024), "Bob", &[("F001", 1, 1.0)]))
            .with_order(order("0003", date(1, 2, 2024), "Cat", &[("F001", 1, 1.0)]))
            .build()
    }

    #[test]
    fn january_orders() {
        let result = run(&shop(), date(1, 1, 2024), date(31, 1, 2024)).unwrap();
        let ids: Vec<_> = result.listed_orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["0001", "0002"]);
    }

    #[test]
    fn empty_range_is_reported() {
        let result = run(&shop(), date(1, 3, 2024), date(31, 3, 2024)).unwrap();
        assert!(result.listed_orders.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn reversed_range_is_an_error() {
        assert!(run(&shop(), date(31, 1, 2024), date(1, 1, 2024)).is_err());
    }
}
