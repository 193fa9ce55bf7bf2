use std::error::Error;

use chrono::Local;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pharma_gen::sales::{self, GenConfig};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The output file for the generated dataset
    #[clap(default_value = "lekwo_pharmacy_sales_inventory.csv")]
    pub(crate) output_file: String,
    /// How many sales rows to generate
    #[clap(long, default_value_t = 10_000)]
    pub(crate) transactions: u32,
    /// Seed for the random source, for reproducible datasets
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = GenConfig {
        transactions: cli.transactions,
        ..GenConfig::default()
    };
    let records = sales::generate(&config, Local::now().date_naive(), &mut rng)?;
    sales::write_csv_path(&cli.output_file, &records)?;
    info!("{} sales rows written to {}", records.len(), cli.output_file);

    Ok(())
}
