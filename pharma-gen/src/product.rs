use std::convert::TryFrom;
use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::prelude::*;
use serde::Serialize;

use crate::error::GenError;

pub const NUM_DECIMAL_PLACES: u32 = 2;

pub const DRUG_NAMES: &[&str] = &[
    "Paracetamol",
    "Amoxicillin",
    "Ibuprofen",
    "Fluoxetine",
    "Oseltamivir",
    "Ciprofloxacin",
    "Risperidone",
    "Sertraline",
];

pub const DRUG_BRANDS: &[&str] = &[
    "Emzor",
    "GSK",
    "Pfizer",
    "May & Baker",
    "Fidson",
    "Swiss Pharma",
    "Evans",
    "Orange Drugs",
];

pub const DRUG_CATEGORIES: &[&str] = &[
    "Antibiotic",
    "Antiviral",
    "Antipsychotic",
    "Antidepressant",
    "Analgesic",
];

const PRICE_RANGE: std::ops::Range<f64> = 500.0..10_000.0;
const STOCK_RANGE: RangeInclusive<u32> = 20..=500;
/// Stock records are refreshed at most this many days before the run date
const MAX_STALE_DAYS: i64 = 30;

/// A non-negative currency amount, always carried with two decimal places
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub brand: &'static str,
    pub category: &'static str,
    pub price: Price,
    pub quantity_in_stock: u32,
    pub last_updated: NaiveDate,
}

impl TryFrom<Decimal> for Price {
    type Error = GenError;
    fn try_from(mut decimal: Decimal) -> Result<Self, Self::Error> {
        if decimal >= Decimal::ZERO {
            decimal.rescale(NUM_DECIMAL_PLACES);
            Ok(Price(decimal))
        } else {
            Err(GenError::InvalidPrice)
        }
    }
}

impl TryFrom<f64> for Price {
    type Error = GenError;
    fn try_from(price: f64) -> Result<Self, Self::Error> {
        Price::try_from(Decimal::from_f64(price).ok_or(GenError::InvalidPrice)?)
    }
}

impl Product {
    fn sample<R: Rng>(today: NaiveDate, rng: &mut R) -> Result<Self, GenError> {
        let name = DRUG_NAMES[rng.gen_range(0..DRUG_NAMES.len())];
        let brand = DRUG_BRANDS[rng.gen_range(0..DRUG_BRANDS.len())];
        let category = DRUG_CATEGORIES[rng.gen_range(0..DRUG_CATEGORIES.len())];
        let price = Price::try_from(rng.gen_range(PRICE_RANGE))?;
        let quantity_in_stock = rng.gen_range(STOCK_RANGE);
        let last_updated = today - Duration::days(rng.gen_range(0..=MAX_STALE_DAYS));
        Ok(Product {
            name,
            brand,
            category,
            price,
            quantity_in_stock,
            last_updated,
        })
    }
}

/// Field combinations may repeat across the pool; products are not deduplicated
///
/// # Errors
/// Errors when a sampled price cannot be represented as a two-decimal amount
pub fn build_products<R: Rng>(
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<Product>, GenError> {
    (0..count).map(|_| Product::sample(today, rng)).collect()
}
