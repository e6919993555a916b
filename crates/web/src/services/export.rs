//! Append-only tabular order log.
//!
//! An operator-facing export sink: each call appends one row of
//! `{customer name, service type, price, timestamp}` to a CSV file, writing
//! the header row first when the file does not exist yet. This capability is
//! deliberately not wired into the booking flow.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

/// Column headers, in file order.
const HEADER: &str = "Customer Name,Service Type,Price,Date";

/// Timestamp format for the date column.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only CSV order log.
#[derive(Debug, Clone)]
pub struct OrderLog {
    path: PathBuf,
}

impl OrderLog {
    /// Create an order log writing to `path`.
    ///
    /// The file is created lazily on the first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this log writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an order record, stamping it with the current local time.
    ///
    /// # Errors
    ///
    /// Returns `std::io::Error` if the file cannot be created or written.
    pub fn append(
        &self,
        customer_name: &str,
        service_type: &str,
        price: Decimal,
    ) -> std::io::Result<()> {
        let timestamp = chrono::Local::now().format(DATE_FORMAT).to_string();
        self.append_at(customer_name, service_type, price, &timestamp)
    }

    fn append_at(
        &self,
        customer_name: &str,
        service_type: &str,
        price: Decimal,
        timestamp: &str,
    ) -> std::io::Result<()> {
        let is_new = !self.path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if is_new {
            writeln!(file, "{HEADER}")?;
        }
        writeln!(
            file,
            "{},{},{},{}",
            escape(customer_name),
            escape(service_type),
            price,
            timestamp
        )
    }
}

/// Quote a CSV field if it contains a delimiter, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
