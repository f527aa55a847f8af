use std::time::Duration;

/// Single-attempt budget for the motivational-text API. There is no retry
/// policy anywhere in the system; a slow provider must never hold up the
/// wake-up flow longer than this.
pub const MOTIVATION_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Budget for one webhook notification delivery.
pub const WEBHOOK_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
