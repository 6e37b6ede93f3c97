use portable_atomic::{AtomicU64, Ordering};

/// Live count of snowflakes constructed with a defaulted increment.
static INCREMENT: AtomicU64 = AtomicU64::new(0);

/// Returns the number of snowflakes constructed so far in this process with
/// a defaulted increment.
///
/// The counter is shared across every layout and epoch, starts at zero, and
/// keeps counting past 4096 even though the packed increment field wraps
/// there.
pub fn generated_count() -> u64 {
    INCREMENT.load(Ordering::Relaxed)
}

/// Claims the next default increment.
///
/// Read-modify-write as a single atomic step, so every construction that
/// omits an explicit increment observes a distinct, strictly increasing
/// value, even across threads.
pub(crate) fn next_increment() -> u64 {
    INCREMENT.fetch_add(1, Ordering::Relaxed)
}
