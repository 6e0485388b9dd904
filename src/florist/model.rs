use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display format for every date the shop prints or accepts.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub id: String,
    pub name: String,
    pub import_date: NaiveDate,
    pub unit_price: f64,
    pub category: String,
}

impl Flower {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        import_date: NaiveDate,
        unit_price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            import_date,
            unit_price,
            category: category.into(),
        }
    }
}

/// One flower/quantity entry of an order.
///
/// `cost` is quantity times the unit price at the moment the order was taken,
/// so later price edits in the catalog never reach historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    pub flower_id: String,
    pub quantity: u32,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub customer: String,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.lines.iter().map(|l| l.cost).sum()
    }

    pub fn references(&self, flower_id: &str) -> bool {
        self.lines
            .iter()
            .any(|l| l.flower_id.eq_ignore_ascii_case(flower_id))
    }
}

/// Formats a sequence number the way order and line ids are written: `0001`.
pub fn sequence_id(n: usize) -> String {
    format!("{:04}", n)
}
