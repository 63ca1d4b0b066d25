//! Delays around a unit of work.

use std::thread;
use std::time::Duration;

/// Runs `f` between two optional pauses and returns its result.
///
/// A zero duration skips the corresponding sleep.
///
/// ```
/// use std::time::Duration;
/// use sift_files::wait::waits;
///
/// let value = waits(Duration::ZERO, Duration::from_millis(1), || 42);
/// assert_eq!(value, 42);
/// ```
pub fn waits<R>(before: Duration, after: Duration, f: impl FnOnce() -> R) -> R {
    if !before.is_zero() {
        thread::sleep(before);
    }

    let result = f();

    if !after.is_zero() {
        thread::sleep(after);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn zero_durations_do_not_sleep() {
        let started = Instant::now();
        let value = waits(Duration::ZERO, Duration::ZERO, || "done");
        assert_eq!(value, "done");
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn sleeps_before_and_after() {
        let started = Instant::now();
        let mut ran_at = None;
        waits(Duration::from_millis(20), Duration::from_millis(20), || {
            ran_at = Some(started.elapsed());
        });

        let ran_at = ran_at.unwrap();
        assert!(ran_at >= Duration::from_millis(20));
        assert!(started.elapsed() >= ran_at + Duration::from_millis(20));
    }
}
