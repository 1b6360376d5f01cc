//! Operation Context
//!
//! Metadata about the current operation: the correlation id used in logs
//! and the business date that derived statuses and ledger entries use.

use chrono::{Local, NaiveDate};
use std::net::IpAddr;
use uuid::Uuid;

/// Context for an operation, used for tracing and date-dependent rules.
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Correlation ID for request tracing
    pub correlation_id: Option<Uuid>,

    /// Client IP address, when a proxy forwarded it
    pub client_ip: Option<IpAddr>,

    /// The local calendar date the operation runs on
    pub today: NaiveDate,
}

impl OperationContext {
    /// Create a context dated today (local time)
    pub fn new() -> Self {
        Self {
            correlation_id: None,
            client_ip: None,
            today: Local::now().date_naive(),
        }
    }

    /// Create context with correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Create context with client IP
    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    /// Pin the business date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let correlation_id = Uuid::new_v4();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let ip: IpAddr = "10.0.0.7".parse().unwrap();

        let context = OperationContext::new()
            .with_correlation_id(correlation_id)
            .with_client_ip(ip)
            .with_today(today);

        assert_eq!(context.correlation_id, Some(correlation_id));
        assert_eq!(context.client_ip, Some(ip));
        assert_eq!(context.today, today);
    }
}
