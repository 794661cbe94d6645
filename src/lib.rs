//! splitbill - Text-mode bill splitter
//!
//! Keeps running balances with a list of friends and splits bills with them.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: Configuration file loading
//! - [`keys`]: Key binding definitions
//! - [`ledger`]: Friend list, balances and selection state
//! - [`logging`]: Log file setup
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod keys;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod ui;
