use super::{ensure_not_empty, DataStore};
use crate::error::Result;
use crate::model::{Flower, Order};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    flowers: Vec<Flower>,
    orders: Vec<Order>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves, across both collections
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn save_flowers(&mut self, flowers: &[Flower]) -> Result<()> {
        ensure_not_empty(flowers, "flower")?;
        self.flowers = flowers.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_flowers(&self) -> Result<Vec<Flower>> {
        Ok(self.flowers.clone())
    }

    fn save_orders(&mut self, orders: &[Order]) -> Result<()> {
        ensure_not_empty(orders, "order")?;
        self.orders = orders.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::commands::Shop;
    use crate::model::{Flower, Order, OrderLine};
    use chrono::NaiveDate;

    pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn flower(id: &str, name: &str, price: f64) -> Flower {
        Flower::new(id, name, date(1, 1, 2024), price, "Bouquet")
    }

    /// An order with one line per `(flower_id, quantity, cost)` triple.
    pub fn order(id: &str, on: chrono::NaiveDate, customer: &str, lines: &[(&str, u32, f64)]) -> Order {
        Order {
            id: id.to_string(),
            date: on,
            customer: customer.to_string(),
            lines: lines
                .iter()
                .enumerate()
                .map(|(i, (flower_id, quantity, cost))| OrderLine {
                    id: crate::model::sequence_id(i + 1),
                    flower_id: flower_id.to_string(),
                    quantity: *quantity,
                    cost: *cost,
                })
                .collect(),
        }
    }

    pub struct ShopFixture {
        pub shop: Shop,
    }

    impl Default for ShopFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ShopFixture {
        pub fn new() -> Self {
            Self {
                shop: Shop::default(),
            }
        }

        pub fn with_flower(mut self, id: &str, name: &str, price: f64) -> Self {
            self.shop.catalog.add(flower(id, name, price)).unwrap();
            self
        }

        pub fn with_order(mut self, order: Order) -> Self {
            self.shop.orders.insert(order);
            self
        }

        /// Leaves both collections flagged as saved.
        pub fn clean(mut self) -> Self {
            self.shop.catalog.mark_saved();
            self.shop.orders.mark_saved();
            self
        }

        pub fn build(self) -> Shop {
            self.shop
        }
    }
}
