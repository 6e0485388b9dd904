//! Sentinel-terminated record stream.
//!
//! Records are written one JSON frame per line and the stream is closed with an
//! explicit end frame. There is no count prefix: readers consume frames until
//! they meet the end marker.
//!
//! ```text
//! {"kind":"record","data":{...}}
//! {"kind":"record","data":{...}}
//! {"kind":"end"}
//! ```

use crate::error::{Result, ShopError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
enum Frame<T> {
    Record(T),
    End,
}

pub fn write_records<T: Serialize, W: Write>(writer: &mut W, records: &[T]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, &Frame::Record(record))?;
        writer.write_all(b"\n")?;
    }
    serde_json::to_writer(&mut *writer, &Frame::<T>::End)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Reads frames until the end marker. Anything after the marker is ignored;
/// running out of input before it is a [`ShopError::TruncatedStream`].
pub fn read_records<T: DeserializeOwned, R: BufRead>(reader: R) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Frame<T>>(&line)? {
            Frame::Record(record) => records.push(record),
            Frame::End => return Ok(records),
        }
    }

    Err(ShopError::TruncatedStream(records.len()))
}
