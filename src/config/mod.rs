//! Configuration loading for the payroll event engine.
//!
//! Configuration is optional. Every field has a default that reproduces the
//! standard `employee_details.txt` layout, so a missing file on the command
//! line simply means "use the defaults".
//!
//! # Example
//!
//! ```no_run
//! use payroll_events::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Reading events from {}", loader.config().input.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MonthOrder, ReportConfig};
