use crate::host::HostClock;
use crate::{DateError, DateResult};

use web_time::{SystemTime, UNIX_EPOCH};

/// A UTC host system implementation that returns the current time of the
/// system clock.
///
/// This implementation is backed by [`std::time::SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcHostSystem;

impl HostClock for UtcHostSystem {
    fn get_host_epoch_milliseconds(&self) -> DateResult<i64> {
        get_system_milliseconds()
    }
}

/// Returns the system time in milliseconds.
pub(crate) fn get_system_milliseconds() -> DateResult<i64> {
    let now = SystemTime::now();
    // A clock set before 1970 reports the distance as an error.
    let (duration, sign) = match now.duration_since(UNIX_EPOCH) {
        Ok(duration) => (duration, 1),
        Err(err) => (err.duration(), -1),
    };
    i64::try_from(duration.as_millis())
        .map(|ms| ms * sign)
        .map_err(|_| DateError::range().with_message("Error fetching system time"))
}
