use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Prices must be non-negative amounts")]
    InvalidPrice,
    #[error("Cannot sample from an empty {0} pool")]
    EmptyPool(&'static str),
}
