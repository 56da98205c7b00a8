#![forbid(unsafe_code)]

mod output;
mod points;
mod stamps;

pub use output::{init_tracing, save_png, write_png};
pub use points::{gaussian_cloud, parse_points};
pub use stamps::showcase_stamps;
