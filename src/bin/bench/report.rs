// Benchmark Report Types — structured output for policy comparison

use serde::Serialize;

// ─── Statistics (per-metric Monte Carlo aggregation) ────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Single-Run Result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub policy: String,
    pub seed: u64,
    pub score: u32,
    pub days_completed: u32,
    pub scenarios_completed: u32,
    pub correct_decisions: u32,
    pub accuracy_pct: f64,
    pub final_reputation: i32,
    pub final_budget: i64,
    pub time_remaining: u32,
    pub end_reason: String,
    pub reached_horizon: bool,
}

// ─── End-Reason Tally ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct EndReasonTally {
    pub reputation_lost: u32,
    pub budget_exhausted: u32,
    pub horizon_reached: u32,
    pub no_scenario_available: u32,
    pub clock_expired: u32,
}

// ─── Policy Report (per-policy aggregation) ─────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct PolicyReport {
    pub policy_name: String,
    pub label: String,
    pub n_runs: usize,
    pub horizon_rate: f64,
    pub score: Stats,
    pub accuracy_pct: Stats,
    pub days_completed: Stats,
    pub final_reputation: Stats,
    pub final_budget: Stats,
    pub time_remaining: Stats,
    pub end_reasons: EndReasonTally,
    pub individual_runs: Vec<RunResult>,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub n_runs_per_policy: usize,
    pub policies: Vec<PolicyReport>,
}
