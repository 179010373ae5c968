//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use crate::DateResult;

/// The `HostClock` trait defines an accessor to the host's clock.
///
/// Implementors return the current time as milliseconds since the Unix epoch.
pub trait HostClock {
    fn get_host_epoch_milliseconds(&self) -> DateResult<i64>;
}

// Implement empty providers

impl HostClock for () {
    fn get_host_epoch_milliseconds(&self) -> DateResult<i64> {
        Ok(0)
    }
}
