#![doc(test(attr(deny(warnings))))]

//! Cashbook Core maintains a single-tenant cash ledger: dated inflow and
//! outflow entries per monthly period, a derived running balance, period and
//! annual summaries, and JSON persistence with backups.

pub mod access;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod format;
pub mod ledger;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashbook Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
