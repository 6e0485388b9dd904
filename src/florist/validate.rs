//! Field parsing for everything the operator types.
//!
//! Each function takes raw text and returns the typed value or a
//! [`ShopError::Invalid`] carrying the message shown before re-prompting.

use crate::error::{Result, ShopError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static FLOWER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[fF][0-9]{3}$").unwrap());
static FLOWER_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]{3,50}$").unwrap());
static CUSTOMER_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z ]+$").unwrap());
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])[- /.](0[1-9]|1[012])[- /.]((?:19|20)[0-9]{2})$")
        .unwrap()
});

pub const FLOWER_ID_FORMAT: &str = "Flower Id must be in FXXX (with X is digit) format!";

/// Flower ids are stored upper-cased.
pub fn flower_id(input: &str) -> Result<String> {
    let input = input.trim();
    if FLOWER_ID.is_match(input) {
        Ok(input.to_ascii_uppercase())
    } else {
        Err(ShopError::invalid("flower id", FLOWER_ID_FORMAT))
    }
}

pub fn flower_name(input: &str) -> Result<String> {
    if FLOWER_NAME.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(ShopError::invalid(
            "flower name",
            "the name must be 3 to 50 letters, digits or spaces",
        ))
    }
}

pub fn customer_name(input: &str) -> Result<String> {
    if CUSTOMER_NAME.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(ShopError::invalid(
            "customer name",
            "the name may only contain letters and spaces",
        ))
    }
}

/// Parses `dd/mm/yyyy`; `-`, `.` and space are accepted as separators too.
pub fn date(input: &str) -> Result<NaiveDate> {
    let bad_format = || ShopError::invalid("date", "the date must be in dd/mm/yyyy format");
    let caps = DATE.captures(input.trim()).ok_or_else(bad_format)?;

    let day: u32 = caps[1].parse().map_err(|_| bad_format())?;
    let month: u32 = caps[2].parse().map_err(|_| bad_format())?;
    let year: i32 = caps[3].parse().map_err(|_| bad_format())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ShopError::invalid(
            "date",
            format!("{} does not exist in month {:02}/{}", day, month, year),
        )
    })
}

pub fn unit_price(input: &str) -> Result<f64> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| ShopError::invalid("unit price", "the unit price must be a number"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(ShopError::invalid(
            "unit price",
            "the unit price must not be negative",
        ));
    }
    Ok(price)
}

pub fn quantity(input: &str) -> Result<u32> {
    match input.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ShopError::invalid(
            "quantity",
            "quantity must be greater than 0",
        )),
    }
}

pub fn yes_no(input: &str) -> Result<bool> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if input.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(ShopError::invalid("answer", "Yes or No? (Y/N)"))
    }
}

/// Parses an integer choice within `min..=max`.
pub fn choice(input: &str, min: usize, max: usize) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        _ => Err(ShopError::invalid(
            "choice",
            format!("choose from {} to {}", min, max),
        )),
    }
}
