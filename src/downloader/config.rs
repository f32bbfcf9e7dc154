//! Download tuning constants

use std::time::Duration;

/// Maximum number of passes over a batch, counting the initial one.
/// A task that keeps failing transiently is attempted at most this many
/// times before it lands in the failure set for good.
pub const MAX_PASSES: u32 = 4;

/// Base delay for the adaptive throttle. Both the exponential escalation
/// and the linear post-success pause scale from this value.
pub const BACKOFF_BASE: Duration = Duration::from_millis(500);

/// Upper bound on any single backoff sleep.
pub const BACKOFF_CEILING: Duration = Duration::from_secs(64);

/// Smallest post-success pause worth sleeping for. Delays at or below the
/// floor are skipped entirely and leave the throttle state untouched.
pub const WAIT_FLOOR: Duration = Duration::from_millis(10);

/// Multiplier applied to the throttle count after each slept-through
/// success. Five consecutive applications roughly halve the count.
pub const DECAY_FACTOR: f64 = 0.8705;

/// Status the provider answers with when it is rate limiting us. BSE
/// signals "blocked/over quota" with 401 rather than 429.
pub const RATE_LIMIT_STATUS: u16 = 401;

/// Status that marks a file as permanently absent; never retried.
pub const NOT_FOUND_STATUS: u16 = 404;
