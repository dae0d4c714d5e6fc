//! Payroll event ingestion and reporting.
//!
//! This crate reads a delimited file of payroll events (onboarding, salary,
//! bonus and reimbursement payments, exits), rebuilds each employee's event
//! history, and produces headcount, monthly roster, per-employee, monthly
//! disbursement and yearly reports.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod reports;
