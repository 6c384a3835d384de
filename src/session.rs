// Copyright 2026 Docmaster Interactive. All rights reserved.
// CSI Document Master ("Site Office") - Session Controller

use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::catalog::{Catalog, CatalogError};
use crate::deck;
use crate::score;
use crate::types::*;

// ─── Session parameters ──────────────────────────────────────────────────────

/// Days played before the session ends on its own.
pub const DAY_HORIZON: u32 = 10;
/// Seconds on the session clock at start.
pub const SESSION_CLOCK_SECS: u32 = 120;

pub const STARTING_REPUTATION: i32 = 50;
pub const STARTING_BUDGET: i64 = 1000;

const REPUTATION_MIN: i32 = 0;
const REPUTATION_MAX: i32 = 100;

// Per-unit-weight deltas applied on submission.
const CORRECT_REPUTATION_DELTA: i32 = 5;
const CORRECT_BUDGET_DELTA: i64 = 200;
const INCORRECT_REPUTATION_DELTA: i32 = -7;
const INCORRECT_BUDGET_DELTA: i64 = -100;

// ─── GameSession struct ──────────────────────────────────────────────────────

#[wasm_bindgen]
pub struct GameSession {
    pub(crate) catalog: Catalog,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) state: SessionState,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl GameSession {
    /// Session over the built-in catalog. The built-in catalog is pinned
    /// valid by its own tests, so this cannot fail.
    pub fn standard(seed: u64) -> Self {
        Self::with_catalog(Catalog::standard(), seed)
            .expect("built-in catalog is valid")
    }

    /// Session over a caller-supplied catalog, rejected up front when the
    /// catalog violates a precondition the controller relies on.
    pub fn with_catalog(catalog: Catalog, seed: u64) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: initial_state(),
        })
    }

    /// Reset to initial values, draw the first scenario and seed history
    /// with its id. Serves both the first start and every restart.
    pub fn start_core(&mut self) {
        self.state = initial_state();
        self.state.show_tutorial = false;
        self.state.started = true;

        let (next, exhausted) = self.draw_next();
        match next {
            Some(scenario) => self.commit_draw(scenario, exhausted),
            // Unreachable with a validated catalog; kept as a termination
            // trigger rather than a panic.
            None => {
                self.state.over = true;
                self.state.end_reason = Some(EndReason::NoScenarioAvailable);
            }
        }
    }

    /// Resolve the current round against the selected document.
    ///
    /// A no-op (returns `None`, mutates nothing) outside an active round or
    /// while the tutorial overlay is up, and whenever either the scenario or
    /// the selection is missing.
    pub fn submit_core(&mut self) -> Option<LastResult> {
        if !self.state.started || self.state.over || self.state.show_tutorial {
            return None;
        }
        let (scenario, selected) = match (
            &self.state.current_scenario,
            &self.state.selected_document,
        ) {
            (Some(s), Some(d)) => (s.clone(), d.clone()),
            _ => return None,
        };

        let correct = scenario.correct_documents.iter().any(|d| *d == selected);
        let weight = scenario.difficulty.weight();
        let (reputation_delta, budget_delta) = if correct {
            (
                CORRECT_REPUTATION_DELTA * weight,
                CORRECT_BUDGET_DELTA * weight as i64,
            )
        } else {
            (
                INCORRECT_REPUTATION_DELTA * weight,
                INCORRECT_BUDGET_DELTA * weight as i64,
            )
        };

        self.state.reputation =
            (self.state.reputation + reputation_delta).clamp(REPUTATION_MIN, REPUTATION_MAX);
        self.state.budget += budget_delta;
        self.state.day += 1;
        self.state.scenarios_completed += 1;
        if correct {
            self.state.correct_decisions += 1;
        }

        let (next, exhausted) = self.draw_next();
        let over = self.state.reputation <= 0
            || self.state.budget <= 0
            || self.state.day > DAY_HORIZON
            || next.is_none();

        if over {
            // The last-seen scenario stays frozen and history is left alone.
            self.state.over = true;
            self.state.end_reason = Some(self.end_reason_now());
        } else if let Some(scenario) = next {
            self.commit_draw(scenario, exhausted);
        }

        let result = LastResult {
            is_correct: correct,
            explanation: scenario.explanation.clone(),
            correct_documents: self.catalog.correct_document_names(&scenario),
        };
        self.state.last_result = Some(result.clone());
        self.state.selected_document = None;
        Some(result)
    }

    /// One second of the session clock. A no-op unless the clock is
    /// running; reaching zero terminates the session unconditionally.
    pub fn tick_core(&mut self) -> u32 {
        if !self.clock_running() {
            return self.state.time_remaining;
        }
        self.state.time_remaining -= 1;
        if self.state.time_remaining == 0 {
            self.state.over = true;
            self.state.end_reason = Some(EndReason::ClockExpired);
        }
        self.state.time_remaining
    }

    /// Arm/disarm predicate for the view's 1 Hz interval: true exactly while
    /// a round is active. Turns false on every exit path (game over, tutorial
    /// overlay, expiry); ticks outside the window are no-ops.
    pub fn clock_running(&self) -> bool {
        self.state.started
            && !self.state.over
            && !self.state.show_tutorial
            && self.state.time_remaining > 0
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn score_breakdown(&self) -> ScoreBreakdown {
        score::compute_score(
            self.state.correct_decisions,
            self.state.time_remaining,
            self.state.reputation,
        )
    }

    // -----------------------------------------------------------------------
    // Scenario draw
    // -----------------------------------------------------------------------

    /// Select the next scenario without committing it. The `exhausted` flag
    /// records whether this draw came from a reset deck, so the caller can
    /// clear history if (and only if) it commits.
    fn draw_next(&mut self) -> (Option<Scenario>, bool) {
        let exhausted =
            deck::is_exhausted(&self.catalog.scenarios, &self.state.scenario_history);
        let just_shown = self.state.current_scenario.as_ref().map(|s| s.id);
        let next = deck::select_next(
            &self.catalog.scenarios,
            &self.state.scenario_history,
            just_shown,
            &mut self.rng,
        )
        .cloned();
        (next, exhausted)
    }

    fn commit_draw(&mut self, scenario: Scenario, exhausted: bool) {
        if exhausted {
            self.state.scenario_history.clear();
        }
        self.state.scenario_history.push(scenario.id);
        self.state.current_scenario = Some(scenario);
    }

    /// First matching reason, in the order the game-over screen reports
    /// them: reputation, budget, horizon, then an empty deck.
    fn end_reason_now(&self) -> EndReason {
        if self.state.reputation <= 0 {
            EndReason::ReputationLost
        } else if self.state.budget <= 0 {
            EndReason::BudgetExhausted
        } else if self.state.day > DAY_HORIZON {
            EndReason::HorizonReached
        } else {
            EndReason::NoScenarioAvailable
        }
    }
}

fn initial_state() -> SessionState {
    SessionState {
        day: 1,
        reputation: STARTING_REPUTATION,
        budget: STARTING_BUDGET,
        current_scenario: None,
        selected_document: None,
        scenario_history: Vec::new(),
        scenarios_completed: 0,
        correct_decisions: 0,
        time_remaining: SESSION_CLOCK_SECS,
        last_result: None,
        end_reason: None,
        show_tutorial: true,
        started: false,
        over: false,
    }
}
