use wasm_bindgen::prelude::*;

use crate::collision::ResolveSummary;

/// Counters for the last completed step
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) frame: u64,
    pub(super) dt: f32,
    pub(super) step_ms: f64,
    pub(super) bodies: u32,
    pub(super) integrated: u32,
    pub(super) pairs_tested: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
    pub(super) skipped_pairs: u32,
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn integrated(&self) -> u32 { self.integrated }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn skipped_pairs(&self) -> u32 { self.skipped_pairs }
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }

    pub(super) fn record_collisions(&mut self, summary: ResolveSummary) {
        self.pairs_tested = summary.pairs_tested;
        self.contacts = summary.contacts;
        self.impulses = summary.impulses;
        self.skipped_pairs = summary.skipped;
    }
}
