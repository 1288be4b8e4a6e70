//! Housing Allowance - track a minister's housing allowance from the terminal
//!
//! This library records the annual housing allowance designated by a church,
//! the housing expenses paid against it, and the categories those expenses
//! fall into. It also carries a reference FAQ on housing allowance rules.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (money, expenses, attachments, state)
//! - `state`: Actions, the reducer and the `ExpenseStore` container
//! - `storage`: State persistence adapters and the attachment blob store
//! - `services`: Expense filtering and document import
//! - `reports`: Dashboard summary and category breakdown
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `faq`: Static FAQ content
//! - `cli`: Command handlers for the `housing` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use housing_allowance::config::HousingPaths;
//! use housing_allowance::models::Money;
//! use housing_allowance::state::ExpenseStore;
//! use housing_allowance::storage::JsonFileStore;
//!
//! let paths = HousingPaths::new()?;
//! let mut store = ExpenseStore::open(JsonFileStore::new(paths.state_file()))?;
//! store.set_annual_allowance(Money::from_dollars(30000))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod faq;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod state;
pub mod storage;

pub use error::HousingError;
