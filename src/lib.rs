//! Extract transaction history from TBank PDF account statements.
//!
//! ```rust,ignore
//! use tbank_statement_rs::ExtractorBuilder;
//!
//! let transactions = ExtractorBuilder::new()
//!     .filepath("statement.pdf")
//!     .extract()?;
//! ```

mod builder;
mod document;
mod types;

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod extract;

pub use builder::ExtractorBuilder;
pub use config::ExtractorConfig;
pub use extract::prelude::*;
pub use types::Transaction;
