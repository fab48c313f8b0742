//! # rechnungsleser
//!
//! Reader for ZUGFeRD 1.x electronic invoices (UN/CEFACT Cross-Industry-Invoice
//! XML). The input tree is materialized once, fields are located with small
//! namespace-aware path expressions, coerced into typed values and assembled
//! into an [`InvoiceDocument`].
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rechnungsleser::reader;
//!
//! let invoice = reader::load_path("rechnung.xml")?;
//! println!("{} vom {}", invoice.invoice_no, invoice.invoice_date);
//! for item in &invoice.line_items {
//!     if let rechnungsleser::TradeLineItem::Item(line) = item {
//!         println!("{} x {}", line.billed_quantity, line.name);
//!     }
//! }
//! # Ok::<(), rechnungsleser::ReaderError>(())
//! ```
//!
//! ## Defaulting policy
//!
//! Missing or unparsable string, boolean and numeric fields fall back to a
//! per-field default and are never reported; enumerated codes resolve to an
//! explicit `Unspecified` sentinel. Dates are the exception: a date that is
//! absent, not an 8-digit `YYYYMMDD` value, or tagged with a `format` other
//! than `"102"` aborts the whole load.

pub mod core;
pub mod reader;

// Re-export core types at crate root for convenience
pub use crate::core::*;
pub use crate::reader::{load_path, load_reader, load_str};
