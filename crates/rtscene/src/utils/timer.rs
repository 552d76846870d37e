use std::time::{Duration, Instant};

pub struct TimedResult<T> {
    pub res: T,
    pub elapsed: Duration,
}

pub fn timed_scope<R, F: FnOnce() -> R>(f: F) -> TimedResult<R> {
    let begin = Instant::now();
    let res = f();

    TimedResult {
        res,
        elapsed: begin.elapsed(),
    }
}

/// Exports take from microseconds to a few seconds for huge scenes
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_millis(1) {
        let micro = elapsed.as_secs_f32() * 1000. * 1000.;
        format!("{micro:.3}µs")
    } else if elapsed < Duration::from_secs(1) {
        let milli = elapsed.as_secs_f32() * 1000.;
        format!("{milli:.3}ms")
    } else {
        let s = elapsed.as_secs_f32();
        format!("{s:.3}s")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{format_elapsed, timed_scope};

    #[test]
    fn units() {
        assert_eq!(format_elapsed(Duration::from_micros(250)), "250.000µs");
        assert_eq!(format_elapsed(Duration::from_millis(12)), "12.000ms");
        assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.500s");
    }

    #[test]
    fn result_is_kept() {
        let timed = timed_scope(|| 40 + 2);
        assert_eq!(timed.res, 42);
    }
}
