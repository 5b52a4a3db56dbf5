use std::time::{Duration, Instant};

/// measures the wall clock time spent in the given function
pub fn measure_time<R, F: FnOnce() -> R>(function: F) -> (Duration, R) {
    let start = Instant::now();
    let result = function();

    (start.elapsed(), result)
}
