use crate::catalog::Catalog;
use crate::model::{Flower, Order};
use crate::orders::OrderBook;

pub mod add_flower;
pub mod add_order;
pub mod delete;
pub mod find;
pub mod list_orders;
pub mod persist;
pub mod sort;
pub mod update;

/// The two in-process collections every command works on.
#[derive(Debug, Default)]
pub struct Shop {
    pub catalog: Catalog,
    pub orders: OrderBook,
}

impl Shop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.catalog.is_dirty() || self.orders.is_dirty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_flowers: Vec<Flower>,
    pub listed_flowers: Vec<Flower>,
    pub listed_orders: Vec<Order>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_flowers(mut self, flowers: Vec<Flower>) -> Self {
        self.affected_flowers = flowers;
        self
    }

    pub fn with_listed_flowers(mut self, flowers: Vec<Flower>) -> Self {
        self.listed_flowers = flowers;
        self
    }

    pub fn with_listed_orders(mut self, orders: Vec<Order>) -> Self {
        self.listed_orders = orders;
        self
    }

    /// True if any message reports a failure.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
