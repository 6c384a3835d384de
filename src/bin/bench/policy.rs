// Clerk Policies — deterministic document pickers driven by a seeded PRNG
// Think time per round is Poisson-sampled so the session clock matters

use docmaster_engine::{DocumentType, Scenario};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

// ─── Policy Configuration ───────────────────────────────────────────────────

pub struct Policy {
    pub name: &'static str,
    pub label: &'static str,
    /// Mean seconds spent "reading" a scenario before answering.
    pub think_lambda: f64,
    pub pick: fn(&Scenario, &[DocumentType], &mut ChaCha8Rng) -> String,
}

pub fn policies() -> Vec<Policy> {
    vec![
        Policy {
            name: "ORACLE",
            label: "Oracle (always correct)",
            think_lambda: 2.5,
            pick: pick_correct,
        },
        Policy {
            name: "RANDOM",
            label: "Random catalog pick",
            think_lambda: 4.0,
            pick: pick_random,
        },
        Policy {
            name: "COIN_FLIP",
            label: "Correct on a coin flip",
            think_lambda: 4.0,
            pick: pick_coin_flip,
        },
        Policy {
            name: "SABOTEUR",
            label: "Always incorrect",
            think_lambda: 1.5,
            pick: pick_incorrect,
        },
        Policy {
            name: "PONDEROUS",
            label: "Correct but slow (clock pressure)",
            think_lambda: 30.0,
            pick: pick_correct,
        },
    ]
}

// ─── Pickers ────────────────────────────────────────────────────────────────

fn pick_correct(
    scenario: &Scenario,
    _catalog: &[DocumentType],
    rng: &mut ChaCha8Rng,
) -> String {
    let answers = &scenario.correct_documents;
    answers[rng.gen_range(0..answers.len())].clone()
}

fn pick_random(
    _scenario: &Scenario,
    catalog: &[DocumentType],
    rng: &mut ChaCha8Rng,
) -> String {
    catalog[rng.gen_range(0..catalog.len())].id.clone()
}

fn pick_coin_flip(
    scenario: &Scenario,
    catalog: &[DocumentType],
    rng: &mut ChaCha8Rng,
) -> String {
    if rng.gen_bool(0.5) {
        pick_correct(scenario, catalog, rng)
    } else {
        pick_incorrect(scenario, catalog, rng)
    }
}

fn pick_incorrect(
    scenario: &Scenario,
    catalog: &[DocumentType],
    rng: &mut ChaCha8Rng,
) -> String {
    let wrong: Vec<&DocumentType> = catalog
        .iter()
        .filter(|d| !scenario.correct_documents.contains(&d.id))
        .collect();
    if wrong.is_empty() {
        // Every catalog entry is an accepted answer; nothing wrong to pick.
        return catalog[0].id.clone();
    }
    wrong[rng.gen_range(0..wrong.len())].id.clone()
}

// ─── Think Time ─────────────────────────────────────────────────────────────

/// Poisson sampling via Knuth algorithm (λ is small here, so the direct
/// method is always fine).
pub fn poisson_sample(rng: &mut ChaCha8Rng, lambda: f64) -> u32 {
    if lambda <= 0.0 {
        return 0;
    }
    let l = (-lambda).exp();
    let mut k: u32 = 0;
    let mut p: f64 = 1.0;
    loop {
        k += 1;
        p *= rng.gen::<f64>();
        if p <= l {
            return k - 1;
        }
    }
}
