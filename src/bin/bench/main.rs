// Docmaster Benchmark Runner v0.1.0 — Policy Monte Carlo
// N seeded sessions per clerk policy, Poisson think time, JSON audit trail
//
// Usage:
//   cargo run --release --bin bench                 # All policies (30 runs each)
//   cargo run --release --bin bench -- --runs 5     # Quick mode
//   cargo run --release --bin bench -- ORACLE       # Filter by name
//   cargo run --release --bin bench -- --seed 42    # Custom base seed

mod policy;
mod report;
mod runner;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use policy::policies;
use report::BenchReport;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 30,
        seed: 0,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let all_policies = policies();

    let to_run: Vec<_> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_policies
                .iter()
                .filter(|p| {
                    p.name.to_lowercase().contains(&f_lower)
                        || p.label.to_lowercase().contains(&f_lower)
                })
                .collect()
        }
        None => all_policies.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No policies match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    println!("\n  Docmaster Benchmark Runner v0.1.0");
    println!(
        "  PRNG: ChaCha8Rng | Runs/policy: {} | Base seed: {}",
        cli.runs, cli.seed
    );
    println!("  Running {} policy(ies)...\n", to_run.len());
    println!(
        "  {:<34} {:>9} {:>14} {:>7} {:>7} {:>8} {:>7}",
        "Policy", "Horizon%", "Score", "Acc%", "Rep", "Budget", "Clock"
    );
    println!("  {}", "-".repeat(92));

    let suite_start = Instant::now();
    let mut reports = Vec::new();

    for policy in &to_run {
        let report = runner::run_monte_carlo(policy, cli.runs, cli.seed);

        let score_ci = (report.score.ci_upper - report.score.ci_lower) / 2.0;
        println!(
            "  {:<34} {:>8.0}% {:>8.0}±{:<5.0} {:>6.1} {:>7.1} {:>8.0} {:>7}",
            report.label,
            report.horizon_rate * 100.0,
            report.score.mean,
            score_ci,
            report.accuracy_pct.mean,
            report.final_reputation.mean,
            report.final_budget.mean,
            report.end_reasons.clock_expired,
        );

        reports.push(report);
    }

    let suite_elapsed = suite_start.elapsed();
    println!("  {}", "-".repeat(92));
    println!(
        "  Policies: {}  Runs/policy: {}  Suite time: {:.2}s\n",
        reports.len(),
        cli.runs,
        suite_elapsed.as_secs_f64()
    );

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let timestamp = format!("{}", ts);

    let report = BenchReport {
        timestamp: timestamp.clone(),
        version: "0.1.0",
        prng: "ChaCha8Rng",
        n_runs_per_policy: cli.runs,
        policies: reports,
    };

    let dir = std::path::Path::new("bench-results");
    if !dir.exists() {
        std::fs::create_dir_all(dir).expect("Failed to create bench-results/");
    }
    let path = dir.join(format!("bench-{}.json", timestamp));
    let json = serde_json::to_string_pretty(&report).expect("Failed to serialize");
    std::fs::write(&path, &json).expect("Failed to write benchmark file");
    println!("  Results saved to: {}\n", path.display());
}
