//! # Log Entry
//!
//! Audit record of one successful quote.

use crate::domain::entities::quote::Quote;
use crate::domain::entities::shipment::ShipmentRequest;
use crate::domain::value_objects::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable line in the quote audit log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    timestamp: Timestamp,
    summary: String,
}

impl LogEntry {
    /// Creates an entry with an explicit timestamp.
    #[must_use]
    pub fn new(timestamp: Timestamp, summary: impl Into<String>) -> Self {
        Self {
            timestamp,
            summary: summary.into(),
        }
    }

    /// Summarises a request and the quote computed for it, stamped now.
    #[must_use]
    pub fn for_quote(request: &ShipmentRequest, quote: &Quote) -> Self {
        Self::new(
            Timestamp::now(),
            format!(
                "quote {request} strategy={} sla={} => {quote}",
                quote.strategy(),
                quote.service_level()
            ),
        )
    }

    /// Returns when the entry was created.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the summary text.
    #[inline]
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp.to_log_format(), self.summary)
    }
}
