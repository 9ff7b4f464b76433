//! Dataset loading and on-disk configuration for convolens

mod delimited;
mod error;
mod io;
mod paths;
mod store;

pub use delimited::{coerce_cell, parse_csv};
pub use error::{DatasetError, Result};
pub use io::{atomic_write, read_jsonl, JsonlBatch};
pub use paths::{Paths, HOME_ENV};
pub use store::{load_config, load_records, save_config};
