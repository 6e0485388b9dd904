//! # Flower Catalog
//!
//! The catalog owns every flower record, keyed by its upper-cased id in
//! insertion order. Lookups by id are therefore case-insensitive and
//! deterministic across save/load cycles.
//!
//! The catalog knows nothing about orders: refusing to delete a flower that is
//! still ordered is the facade's job (see `commands::delete`).

use crate::error::{Result, ShopError};
use crate::model::Flower;
use crate::validate;
use indexmap::map::Entry;
use indexmap::IndexMap;

fn key(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}

/// Raw, optional replacement values for a flower's mutable fields.
///
/// `None` keeps the current value. Values are validated by [`Catalog::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowerPatch {
    pub name: Option<String>,
    pub import_date: Option<String>,
    pub unit_price: Option<String>,
    pub category: Option<String>,
}

impl FlowerPatch {
    /// Builds a patch from prompt answers, where a blank answer means "keep".
    pub fn from_answers(name: &str, import_date: &str, unit_price: &str, category: &str) -> Self {
        let keep_blank = |s: &str| {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        Self {
            name: keep_blank(name),
            import_date: keep_blank(import_date),
            unit_price: keep_blank(unit_price),
            category: keep_blank(category),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.import_date.is_none()
            && self.unit_price.is_none()
            && self.category.is_none()
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    flowers: IndexMap<String, Flower>,
    dirty: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flower> {
        self.flowers.values()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Flower> {
        self.flowers.get(&key(id))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.flowers.contains_key(&key(id))
    }

    /// Adds a flower, normalizing its id to upper case.
    /// A flower whose id is already present (in any case) is refused.
    pub fn add(&mut self, mut flower: Flower) -> Result<&Flower> {
        flower.id = key(&flower.id);
        match self.flowers.entry(flower.id.clone()) {
            Entry::Occupied(existing) => Err(ShopError::DuplicateFlower(existing.get().id.clone())),
            Entry::Vacant(slot) => {
                self.dirty = true;
                Ok(&*slot.insert(flower))
            }
        }
    }

    /// Case-insensitive substring match on the name, in catalog order.
    pub fn find_by_name(&self, fragment: &str) -> Vec<&Flower> {
        let fragment = fragment.to_lowercase();
        self.flowers
            .values()
            .filter(|f| f.name.to_lowercase().contains(&fragment))
            .collect()
    }

    /// Exact, case-sensitive match against the stored id.
    ///
    /// Stored ids are upper case, so `f001` finds nothing here while
    /// [`Catalog::find_by_id`] would find `F001`.
    pub fn find_by_exact_id(&self, id: &str) -> Vec<&Flower> {
        self.flowers.values().filter(|f| f.id == id).collect()
    }

    /// Overwrites the fields present in `patch`.
    ///
    /// Every provided field is validated before anything is written: if one
    /// fails, the flower is left exactly as it was.
    pub fn update(&mut self, id: &str, patch: &FlowerPatch) -> Result<&Flower> {
        let flower = self
            .flowers
            .get_mut(&key(id))
            .ok_or_else(|| ShopError::FlowerNotFound(id.to_string()))?;

        let name = patch.name.as_deref().map(validate::flower_name).transpose()?;
        let import_date = patch.import_date.as_deref().map(validate::date).transpose()?;
        let unit_price = patch.unit_price.as_deref().map(validate::unit_price).transpose()?;

        if let Some(name) = name {
            flower.name = name;
        }
        if let Some(import_date) = import_date {
            flower.import_date = import_date;
        }
        if let Some(unit_price) = unit_price {
            flower.unit_price = unit_price;
        }
        if let Some(category) = &patch.category {
            flower.category = category.clone();
        }

        if !patch.is_empty() {
            self.dirty = true;
        }
        Ok(&*flower)
    }

    /// Removes the flower unconditionally.
    pub fn remove(&mut self, id: &str) -> Option<Flower> {
        let removed = self.flowers.shift_remove(&key(id));
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    pub fn snapshot(&self) -> Vec<Flower> {
        self.flowers.values().cloned().collect()
    }

    /// Replaces the whole catalog with a loaded snapshot and clears the dirty
    /// flag. If the snapshot repeats an id, the first record wins.
    pub fn replace_all(&mut self, flowers: Vec<Flower>) {
        self.flowers.clear();
        for mut flower in flowers {
            flower.id = key(&flower.id);
            self.flowers.entry(flower.id.clone()).or_insert(flower);
        }
        self.dirty = false;
    }
}
