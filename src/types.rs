// Copyright 2026 Docmaster Interactive. All rights reserved.
// CSI Document Master ("Site Office") - Type Definitions

use serde::{Deserialize, Serialize};

// ─── Difficulty ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self { Difficulty::Easy }
}

impl Difficulty {
    /// Scoring multiplier applied to every reputation/budget delta.
    pub fn weight(&self) -> i32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

// ─── DocumentType ────────────────────────────────────────────────────────────

/// One selectable entry in the document catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentType {
    pub id: String,
    pub name: String,
    pub description: String,
}

// ─── Scenario ────────────────────────────────────────────────────────────────

/// A static case study with one or more acceptable correct documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Non-empty; the submitted id only has to match one of these.
    pub correct_documents: Vec<String>,
    /// Shown to the player after the round resolves.
    pub explanation: String,
    pub difficulty: Difficulty,
}

// ─── LastResult ──────────────────────────────────────────────────────────────

/// Outcome of the most recently submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastResult {
    pub is_correct: bool,
    pub explanation: String,
    /// Display names (not ids) of the scenario's correct documents.
    pub correct_documents: Vec<String>,
}

// ─── EndReason ───────────────────────────────────────────────────────────────

/// Why the session terminated. When several conditions hold on the same
/// submission, the first in this order is recorded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    ReputationLost = 0,
    BudgetExhausted = 1,
    HorizonReached = 2,
    NoScenarioAvailable = 3,
    ClockExpired = 4,
}

// ─── SessionPhase ────────────────────────────────────────────────────────────

/// Presentation mode derived from the lifecycle flags. Exactly one phase
/// holds at any instant; the tutorial overlay also covers the
/// not-yet-started state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Tutorial = 0,
    InRound = 1,
    Over = 2,
}

// ─── SessionState ────────────────────────────────────────────────────────────

/// The render-ready snapshot of one game session. The view reads this and
/// dispatches commands; it never mutates state directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// In-game day, 1..=11 (11 means the horizon was exceeded).
    pub day: u32,
    /// Clamped to [0, 100] on every update.
    pub reputation: i32,
    /// Unbounded above; a non-positive value ends the session.
    pub budget: i64,
    pub current_scenario: Option<Scenario>,
    pub selected_document: Option<String>,
    /// Scenario ids already shown; reset once the catalog is exhausted.
    pub scenario_history: Vec<u32>,
    pub scenarios_completed: u32,
    pub correct_decisions: u32,
    /// Seconds left on the session clock.
    pub time_remaining: u32,
    pub last_result: Option<LastResult>,
    pub end_reason: Option<EndReason>,
    pub show_tutorial: bool,
    pub started: bool,
    pub over: bool,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.show_tutorial {
            SessionPhase::Tutorial
        } else if self.over {
            SessionPhase::Over
        } else if self.started {
            SessionPhase::InRound
        } else {
            SessionPhase::Tutorial
        }
    }
}

// ─── ScoreBreakdown ──────────────────────────────────────────────────────────

/// End-of-session score decomposition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub time_bonus: u32,
    pub reputation_bonus: u32,
    pub total: u32,
}
