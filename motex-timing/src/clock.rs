use std::cell::Cell;
use std::time::{Duration, Instant};

/// Session time source. `now` is elapsed time since the clock was
/// created; the sampling loop only ever works with elapsed durations,
/// never absolute timestamps.
pub trait Clock {
    fn now(&self) -> Duration;
    fn sleep(&self, d: Duration);
}

/// Wall-clock backed by `Instant`, with an OS-level precise sleep so
/// the poll cadence holds at human-motor timescales.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&self, d: Duration) {
        precise_sleep(d);
    }
}

#[cfg(target_os = "linux")]
fn precise_sleep(duration: Duration) {
    use libc::{CLOCK_MONOTONIC, clock_nanosleep, timespec};

    let req = timespec {
        tv_sec: duration.as_secs() as libc::time_t,
        tv_nsec: duration.subsec_nanos() as libc::c_long,
    };

    unsafe {
        clock_nanosleep(CLOCK_MONOTONIC, 0, &req, std::ptr::null_mut());
    }
}

#[cfg(not(target_os = "linux"))]
fn precise_sleep(duration: Duration) {
    std::thread::sleep(duration);
}

/// Virtual clock for tests: `sleep` advances `now` by exactly the
/// requested duration, so sampling loops run instantly and produce
/// reproducible timestamps.
#[derive(Debug, Default)]
pub struct SimulatedClock {
    now: Cell<Duration>,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, d: Duration) {
        self.now.set(self.now.get() + d);
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&self, d: Duration) {
        self.advance(d);
    }
}
