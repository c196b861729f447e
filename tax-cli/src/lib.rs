pub mod app;
pub mod config;
pub mod csv_loader;
pub mod display;
pub mod form;
pub mod logging;
pub mod utils;

pub use config::{Config, OutputFormat};
pub use form::{FormError, TaxForm};
