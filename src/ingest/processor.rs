//! Event routing.
//!
//! The [`PayrollProcessor`] reads rows in order, decodes each one and applies
//! it to the [`EmployeeRegistry`]. Decoding failures abort ingestion; rows
//! that decode but cannot be applied become [`Diagnostic`]s.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info, warn};

use crate::config::ReportConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;
use crate::reports::PayrollReport;

use super::diagnostics::{Diagnostic, ErrorKind};
use super::registry::EmployeeRegistry;
use super::row::{RowKind, parse_row};

/// What happened to a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// An onboarding row created a new employee record.
    Registered,
    /// The event was appended to an existing record.
    Recorded,
    /// The row was skipped and a diagnostic was recorded.
    Skipped,
}

/// The result of a completed ingestion pass.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    /// Every onboarded employee with their event history.
    pub registry: EmployeeRegistry,
    /// Rows that were skipped, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds the employee registry from payroll event rows.
///
/// # Example
///
/// ```
/// use payroll_events::config::ReportConfig;
/// use payroll_events::ingest::PayrollProcessor;
///
/// let input = "1,E1,John,Doe,Engineer,ONBOARD,,01-01-2023,welcome\n\
///              2,E1,SALARY,5000,15-01-2023,SALARY\n\
///              3,E9,SALARY,100,15-01-2023,SALARY\n";
///
/// let mut processor = PayrollProcessor::new(ReportConfig::default());
/// processor.load_reader(input.as_bytes())?;
///
/// assert_eq!(processor.registry().len(), 1);
/// assert_eq!(processor.diagnostics().len(), 1);
/// # Ok::<(), payroll_events::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollProcessor {
    config: ReportConfig,
    registry: EmployeeRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl PayrollProcessor {
    /// Creates a processor with an empty registry.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            registry: EmployeeRegistry::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Reads and processes every row of the file at `path`.
    ///
    /// The file handle is released when this returns, on success or failure.
    ///
    /// # Errors
    ///
    /// - `InputNotFound` if the file cannot be opened
    /// - `InputRead` if the file is not valid delimited text
    /// - Any parse error from [`parse_row`]
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> PayrollResult<()> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let reader = self
            .reader_builder()?
            .from_path(path)
            .map_err(|_| PayrollError::InputNotFound {
                path: path_str.clone(),
            })?;

        self.consume(reader, &path_str)
    }

    /// Reads and processes every row from an arbitrary reader.
    pub fn load_reader<R: io::Read>(&mut self, reader: R) -> PayrollResult<()> {
        let reader = self.reader_builder()?.from_reader(reader);
        self.consume(reader, "<reader>")
    }

    fn reader_builder(&self) -> PayrollResult<ReaderBuilder> {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(self.config.delimiter_byte()?);
        Ok(builder)
    }

    fn consume<R: io::Read>(
        &mut self,
        mut reader: csv::Reader<R>,
        origin: &str,
    ) -> PayrollResult<()> {
        let mut rows = 0u64;

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| PayrollError::InputRead {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
            let line = record
                .position()
                .map_or(index as u64 + 1, |position| position.line());
            let fields: Vec<&str> = record.iter().collect();

            self.process_row(&fields, line)?;
            rows += 1;
        }

        info!(
            origin = %origin,
            rows,
            employees = self.registry.len(),
            diagnostics = self.diagnostics.len(),
            "Ingestion completed"
        );
        Ok(())
    }

    /// Decodes one row and applies it to the registry.
    ///
    /// Onboarding always appends an event; it creates the record only the
    /// first time an id is seen. Payments and exits for ids that were never
    /// onboarded, and rows with unknown tags, are recorded as diagnostics.
    pub fn process_row(&mut self, fields: &[&str], line: u64) -> PayrollResult<RowOutcome> {
        let row = parse_row(fields, line, &self.config.date_format)?;

        let outcome = match row.kind {
            RowKind::Onboard {
                first_name,
                last_name,
                designation,
                event,
            } => {
                let is_new = !self.registry.contains(&row.employee_id);
                self.registry
                    .get_or_insert_with(&row.employee_id, || {
                        Employee::new(row.employee_id.as_str(), first_name, last_name, designation)
                    })
                    .add_event(event);
                if is_new {
                    RowOutcome::Registered
                } else {
                    RowOutcome::Recorded
                }
            }
            RowKind::Event(event) => match self.registry.get_mut(&row.employee_id) {
                Some(employee) => {
                    employee.add_event(event);
                    RowOutcome::Recorded
                }
                None => {
                    self.skip(
                        line,
                        row.sequence_no,
                        row.employee_id,
                        ErrorKind::UnknownEmployee,
                    );
                    RowOutcome::Skipped
                }
            },
            RowKind::Unrecognized { tag } => {
                self.skip(
                    line,
                    row.sequence_no,
                    row.employee_id,
                    ErrorKind::UnknownEventTag { tag },
                );
                RowOutcome::Skipped
            }
        };

        debug!(line, outcome = ?outcome, "Processed row");
        Ok(outcome)
    }

    fn skip(&mut self, line: u64, sequence_no: String, employee_id: String, kind: ErrorKind) {
        let diagnostic = Diagnostic {
            line,
            sequence_no,
            employee_id,
            kind,
        };
        warn!(
            line,
            employee_id = %diagnostic.employee_id,
            "{}",
            diagnostic
        );
        self.diagnostics.push(diagnostic);
    }

    /// Returns the registry built so far.
    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    /// Returns the rows skipped so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Runs the five report passes over the current registry.
    pub fn generate_reports(&self) -> PayrollResult<PayrollReport> {
        PayrollReport::generate(&self.registry, &self.config)
    }

    /// Consumes the processor, returning the registry and diagnostics.
    pub fn finish(self) -> Ingested {
        Ingested {
            registry: self.registry,
            diagnostics: self.diagnostics,
        }
    }
}

/// Loads `path` with `config` in a single pass.
///
/// Either the whole file is ingested or an error is returned; no partial
/// registry escapes on failure.
pub fn ingest_file<P: AsRef<Path>>(path: P, config: &ReportConfig) -> PayrollResult<Ingested> {
    let mut processor = PayrollProcessor::new(config.clone());
    processor.load_file(path)?;
    Ok(processor.finish())
}
