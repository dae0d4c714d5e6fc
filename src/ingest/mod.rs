//! Event ingestion.
//!
//! This module turns delimited event rows into an [`EmployeeRegistry`]:
//! rows are decoded by [`parse_row`], routed by the [`PayrollProcessor`],
//! and anything that cannot be applied is collected as a [`Diagnostic`].

mod diagnostics;
mod processor;
mod registry;
mod row;

pub use diagnostics::{Diagnostic, ErrorKind};
pub use processor::{Ingested, PayrollProcessor, RowOutcome, ingest_file};
pub use registry::EmployeeRegistry;
pub use row::{ParsedRow, RowKind, TAG_INDEX, parse_row};
