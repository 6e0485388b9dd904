use super::{ensure_not_empty, stream, DataStore};
use crate::config::ShopConfig;
use crate::error::{Result, ShopError};
use crate::model::{Flower, Order};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    flower_file: String,
    order_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let defaults = ShopConfig::default();
        Self {
            root,
            flower_file: defaults.flower_file,
            order_file: defaults.order_file,
        }
    }

    pub fn with_config(mut self, config: &ShopConfig) -> Self {
        self.flower_file = config.flower_file.clone();
        self.order_file = config.order_file.clone();
        self
    }

    pub fn flowers_path(&self) -> PathBuf {
        self.root.join(&self.flower_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.root.join(&self.order_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShopError::Io)?;
        }
        Ok(())
    }

    fn save_records<T: Serialize>(
        &self,
        path: &Path,
        records: &[T],
        what: &'static str,
    ) -> Result<()> {
        ensure_not_empty(records, what)?;
        self.ensure_dir(&self.root)?;

        let file = File::create(path).map_err(ShopError::Io)?;
        let mut writer = BufWriter::new(file);
        stream::write_records(&mut writer, records)?;

        tracing::debug!("saved {} {} records to {}", records.len(), what, path.display());
        Ok(())
    }

    fn load_records<T: DeserializeOwned>(&self, path: &Path, what: &'static str) -> Result<Vec<T>> {
        if !path.exists() {
            tracing::debug!("no {} file at {}", what, path.display());
            return Ok(Vec::new());
        }

        let file = File::open(path).map_err(ShopError::Io)?;
        let records: Vec<T> = stream::read_records(BufReader::new(file))?;

        tracing::debug!("loaded {} {} records from {}", records.len(), what, path.display());
        Ok(records)
    }
}

impl DataStore for FileStore {
    fn save_flowers(&mut self, flowers: &[Flower]) -> Result<()> {
        self.save_records(&self.flowers_path(), flowers, "flower")
    }

    fn load_flowers(&self) -> Result<Vec<Flower>> {
        self.load_records(&self.flowers_path(), "flower")
    }

    fn save_orders(&mut self, orders: &[Order]) -> Result<()> {
        self.save_records(&self.orders_path(), orders, "order")
    }

    fn load_orders(&self) -> Result<Vec<Order>> {
        self.load_records(&self.orders_path(), "order")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    fn rose() -> Flower {
        Flower::new(
            "F001",
            "Rose",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            2.5,
            "Classic",
        )
    }

    fn tulip() -> Flower {
        Flower::new(
            "F002",
            "Tulip",
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            1.25,
            "Spring",
        )
    }

    #[test]
    fn flowers_round_trip() {
        let (_dir, mut store) = setup();
        let flowers = vec![rose(), tulip()];

        store.save_flowers(&flowers).unwrap();
        assert_eq!(store.load_flowers().unwrap(), flowers);
    }

    #[test]
    fn orders_round_trip() {
        let (_dir, mut store) = setup();
        let orders = vec![Order {
            id: "0001".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            customer: "Ann Lee".into(),
            lines: vec![OrderLine {
                id: "0001".into(),
                flower_id: "F001".into(),
                quantity: 4,
                cost: 10.0,
            }],
        }];

        store.save_orders(&orders).unwrap();
        assert_eq!(store.load_orders().unwrap(), orders);
    }

    #[test]
    fn missing_files_load_empty() {
        let (_dir, store) = setup();
        assert!(store.load_flowers().unwrap().is_empty());
        assert!(store.load_orders().unwrap().is_empty());
    }

    #[test]
    fn empty_save_does_not_touch_the_file() {
        let (_dir, mut store) = setup();

        let err = store.save_flowers(&[]).unwrap_err();
        assert!(matches!(err, ShopError::EmptyCollection("flower")));
        assert!(!store.flowers_path().exists());

        store.save_flowers(&[rose()]).unwrap();
        let before = fs::read_to_string(store.flowers_path()).unwrap();
        assert!(store.save_flowers(&[]).is_err());
        let after = fs::read_to_string(store.flowers_path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let (_dir, mut store) = setup();
        store.save_flowers(&[rose(), tulip()]).unwrap();
        store.save_flowers(&[tulip()]).unwrap();
        assert_eq!(store.load_flowers().unwrap(), vec![tulip()]);
    }

    #[test]
    fn truncated_file_is_an_error() {
        let (_dir, mut store) = setup();
        store.save_flowers(&[rose()]).unwrap();

        let content = fs::read_to_string(store.flowers_path()).unwrap();
        let first_line = content.lines().next().unwrap();
        fs::write(store.flowers_path(), format!("{}\n", first_line)).unwrap();

        assert!(matches!(
            store.load_flowers().unwrap_err(),
            ShopError::TruncatedStream(1)
        ));
    }

    #[test]
    fn file_names_follow_config() {
        let dir = TempDir::new().unwrap();
        let config = ShopConfig {
            flower_file: "stock.dat".into(),
            order_file: "sales.dat".into(),
        };
        let mut store = FileStore::new(dir.path().to_path_buf()).with_config(&config);

        store.save_flowers(&[rose()]).unwrap();
        assert!(dir.path().join("stock.dat").exists());
        assert_eq!(store.orders_path(), dir.path().join("sales.dat"));
    }
}
