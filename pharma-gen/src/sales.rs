use std::fs::File;
use std::io;
use std::ops::RangeInclusive;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use csv::WriterBuilder;
use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::customer::{self, Customer};
use crate::error::GenError;
use crate::product::{self, Price, Product};
use crate::store::{self, Role, SalarySchedule, Store};

/// Sales are back-dated up to this many days before the run date
pub const SALE_WINDOW_DAYS: i64 = 5 * 365;
const QUANTITY_RANGE: RangeInclusive<u32> = 1..=10;

pub const COLUMNS: [&str; 20] = [
    "id_of_sale",
    "product_name",
    "drug_brand",
    "drug_category",
    "price",
    "quantity_purchased",
    "quantity_in_stock",
    "last_updated_date",
    "sale_date",
    "customer",
    "customer_email",
    "customer_mobile_number",
    "customer_city",
    "customer_state",
    "employee",
    "employee_role",
    "employee_salary",
    "store_name",
    "store_city",
    "store_state",
];

/// Pool sizes and row count for one run; defaults match the shipped dataset
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub products: usize,
    pub customers: usize,
    pub stores: usize,
    pub transactions: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            products: 400,
            customers: 200,
            stores: 15,
            transactions: 10_000,
        }
    }
}

/// One flattened sales row; field order must match [`COLUMNS`]
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SaleRecord {
    pub id_of_sale: u32,
    pub product_name: &'static str,
    pub drug_brand: &'static str,
    pub drug_category: &'static str,
    pub price: Price,
    pub quantity_purchased: u32,
    pub quantity_in_stock: u32,
    pub last_updated_date: NaiveDate,
    pub sale_date: NaiveDate,
    pub customer: String,
    pub customer_email: String,
    pub customer_mobile_number: String,
    pub customer_city: &'static str,
    pub customer_state: &'static str,
    pub employee: String,
    pub employee_role: Role,
    pub employee_salary: u32,
    pub store_name: String,
    pub store_city: &'static str,
    pub store_state: &'static str,
}

/// Draws sales rows from read-only reference pools
#[derive(Debug)]
pub struct Sampler<'a> {
    products: &'a [Product],
    customers: &'a [Customer],
    stores: &'a [Store],
    start_date: NaiveDate,
    window_days: i64,
}

impl<'a> Sampler<'a> {
    /// # Errors
    /// Errors when any pool, or any store's roster, is empty
    pub fn new(
        products: &'a [Product],
        customers: &'a [Customer],
        stores: &'a [Store],
        today: NaiveDate,
    ) -> Result<Self, GenError> {
        if products.is_empty() {
            return Err(GenError::EmptyPool("product"));
        }
        if customers.is_empty() {
            return Err(GenError::EmptyPool("customer"));
        }
        if stores.is_empty() {
            return Err(GenError::EmptyPool("store"));
        }
        if stores.iter().any(|store| store.roster.is_empty()) {
            return Err(GenError::EmptyPool("roster"));
        }

        let start_date = today - Duration::days(SALE_WINDOW_DAYS);
        let window_days = (today - start_date).num_days();
        Ok(Sampler {
            products,
            customers,
            stores,
            start_date,
            window_days,
        })
    }

    /// Each draw is independent and with replacement; only `id_of_sale`
    /// depends on generation order
    pub fn sale<R: Rng>(&self, id_of_sale: u32, rng: &mut R) -> SaleRecord {
        let product = &self.products[rng.gen_range(0..self.products.len())];
        let customer = &self.customers[rng.gen_range(0..self.customers.len())];
        let sale_date = self.start_date + Duration::days(rng.gen_range(0..=self.window_days));
        let store = &self.stores[rng.gen_range(0..self.stores.len())];
        let employee = &store.roster[rng.gen_range(0..store.roster.len())];
        let quantity_purchased = rng.gen_range(QUANTITY_RANGE);

        SaleRecord {
            id_of_sale,
            product_name: product.name,
            drug_brand: product.brand,
            drug_category: product.category,
            price: product.price,
            quantity_purchased,
            quantity_in_stock: product.quantity_in_stock,
            last_updated_date: product.last_updated,
            sale_date,
            customer: customer.name.clone(),
            customer_email: customer.email.clone(),
            customer_mobile_number: customer.mobile.clone(),
            customer_city: customer.city,
            customer_state: customer.state,
            employee: employee.name.clone(),
            employee_role: employee.role,
            employee_salary: employee.salary,
            store_name: store.name.clone(),
            store_city: store.city,
            store_state: store.state,
        }
    }

    pub fn generate<R: Rng>(&self, count: u32, rng: &mut R) -> Vec<SaleRecord> {
        (1..=count).map(|id| self.sale(id, rng)).collect()
    }
}

/// Runs the whole pipeline: build the reference pools, then sample
/// `config.transactions` rows from them
///
/// # Errors
/// Errors when a price draw cannot be represented or a configured pool size
/// is zero
pub fn generate<R: Rng>(
    config: &GenConfig,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<SaleRecord>, GenError> {
    let products = product::build_products(config.products, today, rng)?;
    debug!("built {} products", products.len());
    let customers = customer::build_customers(config.customers, rng);
    debug!("built {} customers", customers.len());
    let salaries = SalarySchedule::sample(rng);
    let stores = store::build_stores(config.stores, &salaries, rng);
    debug!("built {} store rosters", stores.len());

    let sampler = Sampler::new(&products, &customers, &stores, today)?;
    Ok(sampler.generate(config.transactions, rng))
}

/// # Errors
/// Errors when a record cannot be serialized or the sink cannot be written
pub fn write_csv<W: io::Write>(records: &[SaleRecord], sink: W) -> Result<(), GenError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// # Errors
/// Errors when the destination file cannot be created or written
pub fn write_csv_path<P: AsRef<Path>>(path: P, records: &[SaleRecord]) -> Result<(), GenError> {
    write_csv(records, File::create(path)?)
}
