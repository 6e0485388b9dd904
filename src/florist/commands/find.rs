use crate::commands::{CmdMessage, CmdResult, Shop};
use crate::error::Result;
use crate::model::Flower;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowerQuery {
    /// Case-insensitive substring of the name
    Name(String),
    /// Exact stored id
    Id(String),
}

pub fn run(shop: &Shop, query: &FlowerQuery) -> Result<CmdResult> {
    let found: Vec<Flower> = match query {
        FlowerQuery::Name(fragment) => shop.catalog.find_by_name(fragment),
        FlowerQuery::Id(id) => shop.catalog.find_by_exact_id(id),
    }
    .into_iter()
    .cloned()
    .collect();

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::warning("The flower does not exist!"));
    }
    Ok(result.with_listed_flowers(found))
}
