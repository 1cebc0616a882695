//! # Config Store
//!
//! Rate constants and the append-only quote log shared by every component.
//!
//! The store has two halves with different access rules:
//!
//! - the [`RateTable`] is fixed at construction and read without locking;
//! - the log is a sequence of [`LogEntry`] values guarded by a mutex, so an
//!   append is a critical section even when the store is shared across
//!   threads.
//!
//! ## Process-wide instance
//!
//! [`ConfigStore::global`] hands out the single process-wide store, creating
//! it from [`RateTable::default`] on first access. [`ConfigStore::init_global`]
//! installs a store built from loaded settings instead, and only succeeds
//! before anything else has touched the global. Components never reach for
//! the global themselves: the engine receives its store as an `Arc`.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::LogEntry;
//! use freight_quote::domain::value_objects::{RateTable, Timestamp};
//! use freight_quote::infrastructure::config_store::ConfigStore;
//!
//! let store = ConfigStore::new(RateTable::default()).unwrap();
//! assert!(store.is_empty());
//!
//! let seq = store.append(LogEntry::new(Timestamp::now(), "first quote"));
//! assert_eq!(seq, 1);
//! assert_eq!(store.len(), 1);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::log_entry::LogEntry;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::rate_table::RateTable;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Name reported by [`ConfigStore::system_info`].
pub const SYSTEM_NAME: &str = "Freight Quote";

/// Version reported by [`ConfigStore::system_info`].
pub const SYSTEM_VERSION: &str = env!("CARGO_PKG_VERSION");

static GLOBAL: OnceCell<Arc<ConfigStore>> = OnceCell::new();

/// Rate constants plus the quote audit log.
pub struct ConfigStore {
    rates: RateTable,
    log: Mutex<Vec<LogEntry>>,
}

impl ConfigStore {
    /// Creates an isolated store.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRate` if the table fails validation.
    pub fn new(rates: RateTable) -> DomainResult<Self> {
        rates.validate()?;
        Ok(Self {
            rates,
            log: Mutex::new(Vec::new()),
        })
    }

    /// Returns the process-wide store, creating it with default rates on
    /// first access. Every call returns the same instance.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| {
            tracing::debug!("initialising process-wide config store with default rates");
            Arc::new(Self {
                rates: RateTable::default(),
                log: Mutex::new(Vec::new()),
            })
        }))
    }

    /// Installs the process-wide store.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` if the table fails validation
    /// - `ApplicationError::StoreAlreadyInitialized` if the global store
    ///   already exists, whether installed or lazily created
    pub fn init_global(rates: RateTable) -> ApplicationResult<Arc<Self>> {
        let store = Arc::new(Self::new(rates)?);
        GLOBAL
            .set(Arc::clone(&store))
            .map_err(|_| ApplicationError::StoreAlreadyInitialized)?;
        tracing::info!(currency = %store.currency(), "installed process-wide config store");
        Ok(store)
    }

    /// Returns the rate table.
    #[inline]
    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the currency symbol.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.rates.currency
    }

    /// Returns the system name and version, e.g. `Freight Quote v0.1.0`.
    #[must_use]
    pub fn system_info(&self) -> String {
        format!("{SYSTEM_NAME} v{SYSTEM_VERSION}")
    }

    /// Appends an entry and returns its 1-based sequence number.
    pub fn append(&self, entry: LogEntry) -> u64 {
        let mut log = self.log.lock();
        log.push(entry);
        let sequence = log.len() as u64;
        if let Some(last) = log.last() {
            tracing::info!(sequence, entry = %last.summary(), "quote logged");
        }
        sequence
    }

    /// Returns the number of log entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    /// Returns true if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of every log entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.log.lock().clone()
    }

    /// Returns a copy of the last `n` entries, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let log = self.log.lock();
        let start = log.len().saturating_sub(n);
        log.iter().skip(start).cloned().collect()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("rates", &self.rates)
            .field("log_len", &self.len())
            .finish()
    }
}
