//! Access record entity for redirect audit entries.

use chrono::{DateTime, Utc};

/// Audit metadata captured for a single access of a short URL.
///
/// Every field is supplied by the caller, including the timestamp; the
/// registry never reads the clock. Records are append-only and kept in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    pub ip: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

impl AccessRecord {
    /// Creates a new access record.
    pub fn new(ip: String, user_agent: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            ip,
            user_agent,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_record_creation() {
        let now = Utc::now();
        let record = AccessRecord::new(
            "203.0.113.7".to_string(),
            "curl/8.5.0".to_string(),
            now,
        );

        assert_eq!(record.ip, "203.0.113.7");
        assert_eq!(record.user_agent, "curl/8.5.0");
        assert_eq!(record.timestamp, now);
    }
}
