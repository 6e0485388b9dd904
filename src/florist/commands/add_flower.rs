use crate::commands::{CmdMessage, CmdResult, Shop};
use crate::error::{Result, ShopError};
use crate::model::Flower;

pub fn run(shop: &mut Shop, flower: Flower) -> Result<CmdResult> {
    match shop.catalog.add(flower) {
        Ok(added) => {
            let added = added.clone();
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!(
                    "{} has been added to store!",
                    added.name
                )))
                .with_affected_flowers(vec![added]))
        }
        Err(ShopError::DuplicateFlower(id)) => Ok(CmdResult::default()
            .with_message(CmdMessage::error(format!("The flower {} already exists!", id)))),
        Err(e) => Err(e),
    }
}
