//! Wall-clock-bounded retry for single-shot catalog requests.
//!
//! Each public client operation wraps its whole body (request, decode,
//! validation) in [`retry_with_deadline`]. Only failures the error type
//! classifies as retryable are attempted again; permanent failures such as
//! a rejected target name or a malformed payload return immediately instead
//! of burning the budget.

use std::fmt;
use std::time::{Duration, Instant};

/// Classifies a failure as worth retrying or permanent.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

/// Runs `op` until it succeeds, fails permanently, or the wall-clock budget
/// elapses, then returns the last error.
///
/// The budget bounds the whole retrying sequence, not a single attempt;
/// per-attempt duration is bounded by the caller (the HTTP client's request
/// timeout). Attempts are issued back to back with no added backoff.
pub fn retry_with_deadline<T, E, F>(budget: Duration, mut op: F) -> Result<T, E>
where
    E: Retryable + fmt::Display,
    F: FnMut() -> Result<T, E>,
{
    let deadline = Instant::now() + budget;
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && Instant::now() < deadline => {
                log::debug!("attempt {} failed, retrying: {}", attempt, err);
            }
            Err(err) => return Err(err),
        }
    }
}
