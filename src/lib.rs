//! Trading risk calculator.
//!
//! The `risk-calculator` binary serves `POST /calculate`, `GET /data` and the
//! host page markup at `/`. The served page has no script of its own: the
//! page pipeline in [`page`] is driven by the `calc_client` binary (or any
//! other [`page::Document`] implementation), not by a browser.

pub mod client;
pub mod config;
pub mod core;
pub mod exchange;
pub mod models;
pub mod page;
pub mod server;
#[cfg(test)]
pub mod test_helpers;
