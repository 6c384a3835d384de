// Copyright 2026 Docmaster Interactive. All rights reserved.
// CSI Document Master ("Site Office") - Final Score

use crate::types::ScoreBreakdown;

const POINTS_PER_CORRECT: u32 = 100;
const TIME_BONUS_STEP_SECS: u32 = 10;
const TIME_BONUS_PER_STEP: u32 = 10;
const REPUTATION_BONUS_STEP: u32 = 10;
const REPUTATION_BONUS_PER_STEP: u32 = 20;

/// End-of-session score: 100 per correct decision, 10 per full 10 seconds
/// left on the clock, 20 per full 10 points of reputation. Pure function of
/// final state; display only.
pub fn compute_score(
    correct_decisions: u32,
    time_remaining: u32,
    reputation: i32,
) -> ScoreBreakdown {
    let base = correct_decisions * POINTS_PER_CORRECT;
    let time_bonus = time_remaining / TIME_BONUS_STEP_SECS * TIME_BONUS_PER_STEP;
    let reputation_bonus =
        reputation.max(0) as u32 / REPUTATION_BONUS_STEP * REPUTATION_BONUS_PER_STEP;

    ScoreBreakdown {
        base,
        time_bonus,
        reputation_bonus,
        total: base + time_bonus + reputation_bonus,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
