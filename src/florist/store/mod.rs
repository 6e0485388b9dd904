//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the shop. The catalog and
//! the order book are always saved and loaded as whole snapshots.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per collection inside a
//!   data directory. Each file is a sentinel-terminated record stream
//!   (see [`stream`]).
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! ## Contract
//!
//! - Saving an empty collection fails with [`ShopError::EmptyCollection`] and
//!   leaves whatever was stored before untouched.
//! - Loading a collection that was never saved yields an empty `Vec`.

use crate::error::{Result, ShopError};
use crate::model::{Flower, Order};

pub mod fs;
pub mod memory;
pub mod stream;

pub trait DataStore {
    /// Replace the stored flower snapshot
    fn save_flowers(&mut self, flowers: &[Flower]) -> Result<()>;

    /// Load the flower snapshot (empty if none was saved)
    fn load_flowers(&self) -> Result<Vec<Flower>>;

    /// Replace the stored order snapshot
    fn save_orders(&mut self, orders: &[Order]) -> Result<()>;

    /// Load the order snapshot (empty if none was saved)
    fn load_orders(&self) -> Result<Vec<Order>>;
}

pub(crate) fn ensure_not_empty<T>(records: &[T], what: &'static str) -> Result<()> {
    if records.is_empty() {
        return Err(ShopError::EmptyCollection(what));
    }
    Ok(())
}
