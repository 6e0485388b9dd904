use crate::commands::{CmdMessage, CmdResult, Shop};
use crate::error::Result;
use crate::model::Flower;

/// What would happen if the flower were deleted now.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteCheck {
    Missing,
    /// At least one order line references the flower.
    InUse(Flower),
    Deletable(Flower),
}

pub fn check(shop: &Shop, id: &str) -> DeleteCheck {
    match shop.catalog.find_by_id(id) {
        None => DeleteCheck::Missing,
        Some(flower) if shop.orders.is_referenced_by(&flower.id) => {
            DeleteCheck::InUse(flower.clone())
        }
        Some(flower) => DeleteCheck::Deletable(flower.clone()),
    }
}

/// Deletes the flower unless it is missing or still ordered. Both refusals are
/// reported as messages and leave the catalog untouched.
pub fn run(shop: &mut Shop, id: &str) -> Result<CmdResult> {
    let result = match check(shop, id) {
        DeleteCheck::Missing => {
            CmdResult::default().with_message(CmdMessage::warning("The flower does not exist!"))
        }
        DeleteCheck::InUse(flower) => {
            tracing::debug!("refusing to delete {}: referenced by an order", flower.id);
            CmdResult::default().with_message(CmdMessage::error(
                "Cannot be deleted because this flower is being ordered!",
            ))
        }
        DeleteCheck::Deletable(flower) => {
            shop.catalog.remove(&flower.id);
            CmdResult::default()
                .with_message(CmdMessage::success("Delete success!"))
                .with_affected_flowers(vec![flower])
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{date, order, ShopFixture};

    fn shop() -> Shop {
        ShopFixture::new()
            .with_flower("F001", "Rose", 2.0)
            .with_flower("F002", "Tulip", 1.0)
            .with_order(order("0001", date(1, 1, 2024), "Ann", &[("F001", 2, 4.0)]))
            .clean()
            .build()
    }

    #[test]
    fn referenced_flower_is_protected() {
        let mut shop = shop();
        assert!(matches!(check(&shop, "f001"), DeleteCheck::InUse(_)));

        let result = run(&mut shop, "F001").unwrap();

        assert!(result.has_errors());
        assert!(shop.catalog.exists("F001"));
        assert!(!shop.has_unsaved_changes());
    }

    #[test]
    fn unreferenced_flower_is_deleted() {
        let mut shop = shop();
        assert!(matches!(check(&shop, "F002"), DeleteCheck::Deletable(_)));

        let result = run(&mut shop, "f002").unwrap();

        assert!(!result.has_errors());
        assert_eq!(result.affected_flowers[0].id, "F002");
        assert!(!shop.catalog.exists("F002"));
        assert!(shop.catalog.is_dirty());
    }

    #[test]
    fn missing_flower() {
        let mut shop = shop();
        assert_eq!(check(&shop, "F404"), DeleteCheck::Missing);
        let result = run(&mut shop, "F404").unwrap();
        assert!(result.affected_flowers.is_empty());
        assert_eq!(shop.catalog.len(), 2);
    }
}
