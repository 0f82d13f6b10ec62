//! Wraparound-safe millisecond arithmetic.
//!
//! The reference clock is a `u32` millisecond counter that rolls over after
//! about 49.7 days.  Every "has the interval elapsed" decision in the
//! control core goes through [`expired`], which computes elapsed time with
//! wrapping subtraction — an ordinary `now >= last + interval` comparison
//! would mis-fire around the rollover.

/// Millisecond timestamp in the monotonic clock's native width.
pub type Millis = u32;

/// Milliseconds elapsed between `since` and `now`, correct across rollover.
#[inline]
pub fn elapsed_ms(now: Millis, since: Millis) -> u32 {
    now.wrapping_sub(since)
}

/// True when at least `interval_ms` has passed since `since`.
#[inline]
pub fn expired(now: Millis, since: Millis, interval_ms: u32) -> bool {
    elapsed_ms(now, since) >= interval_ms
}
