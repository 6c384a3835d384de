// Copyright 2026 Docmaster Interactive. All rights reserved.
// CSI Document Master ("Site Office") - Session Engine

pub mod catalog;
pub mod deck;
pub mod score;
pub mod session;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use score::compute_score;
pub use session::GameSession;
pub use types::*;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── WASM Interface ──────────────────────────────────────────────────────────
//
// The JS view owns exactly one session, renders the snapshot this surface
// hands back, and re-arms or cancels its 1-second interval according to
// `clock_active`.

#[wasm_bindgen]
impl GameSession {
    /// Build a session over the built-in catalog. The seed fixes the
    /// scenario order; pass something varying (e.g. `Date.now() >>> 0`) for
    /// casual play.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        GameSession::standard(seed as u64)
    }

    pub fn start_session(&mut self) -> JsValue {
        self.start_core();
        self.snapshot()
    }

    pub fn restart_session(&mut self) -> JsValue {
        self.start_core();
        self.snapshot()
    }

    /// Record the player's current pick. No validation and no side effects;
    /// only the id in place at submission time matters.
    pub fn select_document(&mut self, id: String) {
        self.state.selected_document = Some(id);
    }

    pub fn submit_answer(&mut self) -> JsValue {
        self.submit_core();

        #[cfg(target_arch = "wasm32")]
        if let (true, Some(reason)) = (self.state.over, self.state.end_reason) {
            log(&format!("session over: {:?}", reason));
        }

        self.snapshot()
    }

    /// One second off the clock; call from the view's 1 Hz interval.
    pub fn tick_clock(&mut self) -> JsValue {
        self.tick_core();
        self.snapshot()
    }

    pub fn show_tutorial(&mut self) {
        self.state.show_tutorial = true;
    }

    pub fn hide_tutorial(&mut self) {
        self.state.show_tutorial = false;
    }

    /// True exactly while the view must keep its interval armed.
    pub fn clock_active(&self) -> bool {
        self.clock_running()
    }

    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.state).unwrap_or(JsValue::NULL)
    }

    pub fn document_types(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.catalog.documents).unwrap_or(JsValue::NULL)
    }

    pub fn final_score(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.score_breakdown()).unwrap_or(JsValue::NULL)
    }

    // Host controls for tests and demos.

    pub fn set_reputation(&mut self, value: i32) {
        self.state.reputation = value.clamp(0, 100);
    }

    pub fn set_budget(&mut self, value: i64) {
        self.state.budget = value;
    }

    pub fn set_day(&mut self, value: u32) {
        self.state.day = value.clamp(1, session::DAY_HORIZON + 1);
    }

    pub fn set_time_remaining(&mut self, value: u32) {
        self.state.time_remaining = value;
    }
}
