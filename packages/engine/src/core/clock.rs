//! Time sources for the step driver.
//!
//! On wasm32 the wall clock comes from `Date.now()`, natively from `Instant`.
//! Tests drive time explicitly through `ManualClock`.

use std::cell::Cell;
use std::rc::Rc;

/// Millisecond time source
pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy)]
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            SystemClock {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            SystemClock { origin: std::time::Instant::now() }
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Hand-advanced clock. Clones share the same time, so a test can keep a
/// handle after moving the clock into a world.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_ms(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    pub fn set_ms(&self, ms: f64) {
        self.now_ms.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}
