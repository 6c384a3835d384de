// Monte Carlo Infrastructure — N sessions per policy with statistical
// aggregation; each run is seeded so results reproduce exactly

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use docmaster_engine::{EndReason, GameSession};

use crate::policy::{poisson_sample, Policy};
use crate::report::{EndReasonTally, PolicyReport, RunResult, Stats};

/// Play one full session under a policy with a specific seed.
pub fn run_single(policy: &Policy, seed: u64) -> RunResult {
    let mut session = GameSession::standard(seed);
    // Decorrelate the clerk's own choices from the scenario deck.
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);

    session.start_core();
    while !session.state().over {
        let think = poisson_sample(&mut rng, policy.think_lambda);
        for _ in 0..think {
            session.tick_core();
            if session.state().over {
                break;
            }
        }
        if session.state().over {
            break;
        }

        let scenario = session
            .state()
            .current_scenario
            .clone()
            .expect("active round always has a scenario");
        let pick = (policy.pick)(&scenario, &session.catalog().documents, &mut rng);
        session.select_document(pick);
        session.submit_core();
    }

    let state = session.state();
    let score = session.score_breakdown();
    let accuracy_pct = if state.scenarios_completed > 0 {
        state.correct_decisions as f64 / state.scenarios_completed as f64 * 100.0
    } else {
        0.0
    };

    RunResult {
        policy: policy.name.to_string(),
        seed,
        score: score.total,
        days_completed: state.day - 1,
        scenarios_completed: state.scenarios_completed,
        correct_decisions: state.correct_decisions,
        accuracy_pct,
        final_reputation: state.reputation,
        final_budget: state.budget,
        time_remaining: state.time_remaining,
        end_reason: end_reason_name(state.end_reason).to_string(),
        reached_horizon: state.end_reason == Some(EndReason::HorizonReached),
    }
}

/// Run Monte Carlo: N seeded runs of a policy, aggregate stats.
pub fn run_monte_carlo(policy: &Policy, n_runs: usize, base_seed: u64) -> PolicyReport {
    let mut results = Vec::with_capacity(n_runs);
    for i in 0..n_runs {
        results.push(run_single(policy, base_seed + i as u64));
    }
    aggregate(policy, results)
}

fn aggregate(policy: &Policy, results: Vec<RunResult>) -> PolicyReport {
    let n = results.len();
    let horizon = results.iter().filter(|r| r.reached_horizon).count();

    let score = Stats::from_samples(
        &results.iter().map(|r| r.score as f64).collect::<Vec<_>>(),
    );
    let accuracy_pct = Stats::from_samples(
        &results.iter().map(|r| r.accuracy_pct).collect::<Vec<_>>(),
    );
    let days_completed = Stats::from_samples(
        &results.iter().map(|r| r.days_completed as f64).collect::<Vec<_>>(),
    );
    let final_reputation = Stats::from_samples(
        &results.iter().map(|r| r.final_reputation as f64).collect::<Vec<_>>(),
    );
    let final_budget = Stats::from_samples(
        &results.iter().map(|r| r.final_budget as f64).collect::<Vec<_>>(),
    );
    let time_remaining = Stats::from_samples(
        &results.iter().map(|r| r.time_remaining as f64).collect::<Vec<_>>(),
    );

    let mut end_reasons = EndReasonTally::default();
    for r in &results {
        match r.end_reason.as_str() {
            "reputation_lost" => end_reasons.reputation_lost += 1,
            "budget_exhausted" => end_reasons.budget_exhausted += 1,
            "horizon_reached" => end_reasons.horizon_reached += 1,
            "no_scenario_available" => end_reasons.no_scenario_available += 1,
            _ => end_reasons.clock_expired += 1,
        }
    }

    PolicyReport {
        policy_name: policy.name.to_string(),
        label: policy.label.to_string(),
        n_runs: n,
        horizon_rate: if n > 0 { horizon as f64 / n as f64 } else { 0.0 },
        score,
        accuracy_pct,
        days_completed,
        final_reputation,
        final_budget,
        time_remaining,
        end_reasons,
        individual_runs: results,
    }
}

fn end_reason_name(reason: Option<EndReason>) -> &'static str {
    match reason {
        Some(EndReason::ReputationLost) => "reputation_lost",
        Some(EndReason::BudgetExhausted) => "budget_exhausted",
        Some(EndReason::HorizonReached) => "horizon_reached",
        Some(EndReason::NoScenarioAvailable) => "no_scenario_available",
        Some(EndReason::ClockExpired) => "clock_expired",
        None => "none",
    }
}
