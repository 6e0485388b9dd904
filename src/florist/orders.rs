//! # Order Book
//!
//! Orders are immutable once taken. Each line freezes its cost at the price the
//! catalog had when the order was added, so the book never needs to consult the
//! catalog again after [`OrderBook::add`].

use crate::catalog::Catalog;
use crate::error::{Result, ShopError};
use crate::model::{sequence_id, Order, OrderLine};
use crate::validate;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Date,
    Customer,
    TotalCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A flower and how many of it the customer wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRequest {
    pub flower_id: String,
    pub quantity: u32,
}

impl LineRequest {
    pub fn new(flower_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            flower_id: flower_id.into(),
            quantity,
        }
    }
}

/// Everything needed to take an order, before ids and costs are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub date: NaiveDate,
    pub customer: String,
    pub lines: Vec<LineRequest>,
}

#[derive(Debug, Default)]
pub struct OrderBook {
    orders: IndexMap<String, Order>,
    dirty: bool,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// True if any line of any order points at `flower_id`.
    pub fn is_referenced_by(&self, flower_id: &str) -> bool {
        self.orders.values().any(|o| o.references(flower_id))
    }

    /// Id the next order will receive: one past the highest numeric id in the
    /// book. Without deletions this is always `len() + 1`.
    pub fn next_id(&self) -> String {
        let highest = self
            .orders
            .keys()
            .filter_map(|id| id.parse::<usize>().ok())
            .max()
            .unwrap_or(0);
        sequence_id(highest.max(self.orders.len()) + 1)
    }

    /// Takes an order. Line costs are computed from the catalog's current
    /// prices and never recomputed.
    pub fn add(&mut self, draft: OrderDraft, catalog: &Catalog) -> Result<&Order> {
        let customer = validate::customer_name(&draft.customer)?;
        if draft.lines.is_empty() {
            return Err(ShopError::invalid(
                "order",
                "an order needs at least one flower",
            ));
        }

        let mut lines = Vec::with_capacity(draft.lines.len());
        for (i, request) in draft.lines.iter().enumerate() {
            let flower = catalog
                .find_by_id(&request.flower_id)
                .ok_or_else(|| ShopError::FlowerNotFound(request.flower_id.clone()))?;
            if request.quantity == 0 {
                return Err(ShopError::invalid(
                    "quantity",
                    "quantity must be greater than 0",
                ));
            }
            let cost = flower.unit_price * f64::from(request.quantity);
            if !cost.is_finite() {
                return Err(ShopError::invalid(
                    "quantity",
                    format!("the cost of {} x {} is too large", request.quantity, flower.id),
                ));
            }
            lines.push(OrderLine {
                id: sequence_id(i + 1),
                flower_id: flower.id.clone(),
                quantity: request.quantity,
                cost,
            });
        }

        let order = Order {
            id: self.next_id(),
            date: draft.date,
            customer,
            lines,
        };
        tracing::debug!("order {} taken for {}", order.id, order.customer);

        let id = order.id.clone();
        self.orders.insert(id.clone(), order);
        self.dirty = true;
        Ok(&self.orders[&id])
    }

    /// Appends an already built order as is.
    pub fn insert(&mut self, order: Order) {
        self.orders.insert(order.id.clone(), order);
        self.dirty = true;
    }

    /// Orders dated within `start..=end`, in book order.
    pub fn query(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Order> {
        self.orders
            .values()
            .filter(|o| o.date >= start && o.date <= end)
            .collect()
    }

    /// Stable sort on `field`. Descending is the exact reverse of ascending,
    /// so ties come out in reverse book order.
    pub fn sort_by(&self, field: SortField, direction: SortDirection) -> Vec<&Order> {
        let mut sorted: Vec<&Order> = self.orders.values().collect();
        sorted.sort_by(|a, b| compare(a, b, field));
        if direction == SortDirection::Descending {
            sorted.reverse();
        }
        sorted
    }

    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.values().cloned().collect()
    }

    /// Replaces the whole book with a loaded snapshot and clears the dirty flag.
    pub fn replace_all(&mut self, orders: Vec<Order>) {
        self.orders = orders.into_iter().map(|o| (o.id.clone(), o)).collect();
        self.dirty = false;
    }
}

fn compare(a: &Order, b: &Order, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Date => a.date.cmp(&b.date),
        SortField::Customer => a.customer.cmp(&b.customer),
        SortField::TotalCost => a.total_cost().total_cmp(&b.total_cost()),
    }
}
