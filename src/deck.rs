// Copyright 2026 Docmaster Interactive. All rights reserved.
// CSI Document Master ("Site Office") - Scenario Selection

use rand_core::RngCore;

use crate::types::Scenario;

/// Pick the next scenario to present.
///
/// Candidates are the scenarios whose id is not in `history`. Once every
/// scenario has been shown the candidate set falls back to the full list
/// minus `just_shown`, so consecutive draws never repeat even across a full
/// cycle. Selection within the candidate set is uniform.
///
/// Pure selection: the caller commits the draw by appending the chosen id to
/// its history (clearing it first if the deck was exhausted). Returns `None`
/// only when the fallback set is empty as well — an empty scenario list, or
/// a single-scenario list after its first cycle.
pub fn select_next<'a, R: RngCore>(
    scenarios: &'a [Scenario],
    history: &[u32],
    just_shown: Option<u32>,
    rng: &mut R,
) -> Option<&'a Scenario> {
    let fresh: Vec<&Scenario> = scenarios
        .iter()
        .filter(|s| !history.contains(&s.id))
        .collect();

    let pool = if fresh.is_empty() {
        scenarios
            .iter()
            .filter(|s| Some(s.id) != just_shown)
            .collect()
    } else {
        fresh
    };

    if pool.is_empty() {
        return None;
    }
    Some(pool[uniform_index(rng, pool.len())])
}

/// True when every scenario id already appears in `history`.
pub fn is_exhausted(scenarios: &[Scenario], history: &[u32]) -> bool {
    scenarios.iter().all(|s| history.contains(&s.id))
}

fn uniform_index<R: RngCore>(rng: &mut R, len: usize) -> usize {
    (rng.next_u64() % len as u64) as usize
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
