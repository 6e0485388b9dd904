use crate::catalog::FlowerPatch;
use crate::commands::{CmdMessage, CmdResult, Shop};
use crate::error::{Result, ShopError};

pub fn run(shop: &mut Shop, id: &str, patch: &FlowerPatch) -> Result<CmdResult> {
    match shop.catalog.update(id, patch) {
        Ok(flower) => {
            let flower = flower.clone();
            Ok(CmdResult::default()
                .with_message(CmdMessage::success("Update success!"))
                .with_affected_flowers(vec![flower]))
        }
        Err(e @ ShopError::Invalid { .. }) => Ok(CmdResult::default()
            .with_message(CmdMessage::error(format!("Wrong format, {}", e)))
            .with_message(CmdMessage::error("Failure!"))),
        Err(ShopError::FlowerNotFound(_)) => {
            Ok(CmdResult::default().with_message(CmdMessage::warning("The flower does not exist!")))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::ShopFixture;

    fn shop() -> Shop {
        ShopFixture::new()
            .with_flower("F001", "Rose", 2.0)
            .clean()
            .build()
    }

    #[test]
    fn updates_fields() {
        let mut shop = shop();
        let patch = FlowerPatch::from_answers("Pink Rose", "", "3.5", "Wedding");

        let result = run(&mut shop, "F001", &patch).unwrap();

        assert!(!result.has_errors());
        let flower = shop.catalog.find_by_id("F001").unwrap();
        assert_eq!(flower.name, "Pink Rose");
        assert_eq!(flower.unit_price, 3.5);
        assert_eq!(flower.category, "Wedding");
        assert!(shop.has_unsaved_changes());
    }

    #[test]
    fn invalid_field_reports_failure_and_changes_nothing() {
        let mut shop = shop();
        let patch = FlowerPatch::from_answers("No", "", "", "Wedding");

        let result = run(&mut shop, "F001", &patch).unwrap();

        assert!(result.has_errors());
        assert!(result.affected_flowers.is_empty());
        let flower = shop.catalog.find_by_id("F001").unwrap();
        assert_eq!(flower.name, "Rose");
        assert_eq!(flower.category, "Bouquet");
        assert!(!shop.has_unsaved_changes());
    }

    #[test]
    fn missing_flower_is_a_warning() {
        let mut shop = shop();
        let result = run(&mut shop, "F404", &FlowerPatch::default()).unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
    }
}
