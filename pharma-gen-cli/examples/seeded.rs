//! Generates a small deterministic dataset and prints it to stdout.
//! can be run with `cargo run --example seeded`

use std::io;

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pharma_gen::sales::{self, GenConfig};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = GenConfig {
        products: 20,
        customers: 10,
        stores: 3,
        transactions: 25,
    };
    let records = sales::generate(&config, Local::now().date_naive(), &mut rng).unwrap();
    sales::write_csv(&records, io::stdout()).unwrap();
}
