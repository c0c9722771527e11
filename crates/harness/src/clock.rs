use std::{cell::Cell, rc::Rc, time::Instant};

/// Monotonic time source with nanosecond resolution
pub trait Clock {
    fn now_ns(&mut self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_ns(&mut self) -> u64 {
        (**self).now_ns()
    }
}

/// Wall clock time measured from the moment the clock was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> MonotonicClock {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        MonotonicClock::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ns(&mut self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time so a measured operation can advance the clock
/// the runner reads from.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock::default()
    }

    pub fn advance(&self, ns: u64) {
        self.now.set(self.now.get() + ns);
    }

    pub fn set(&self, ns: u64) {
        self.now.set(ns);
    }

    pub fn get(&self) -> u64 {
        self.now.get()
    }
}

impl Clock for ManualClock {
    fn now_ns(&mut self) -> u64 {
        self.now.get()
    }
}
