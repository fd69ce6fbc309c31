// frogger_cli/src/main.rs
#![forbid(unsafe_code)]

mod rollout;

use clap::Parser;

use crate::rollout::{NoopSink, RolloutSink, Runner, RunnerConfig, TableSink};
use frogger_engine::{GreedyPolicy, Policy, RandomPolicy};

#[derive(Parser, Debug)]
#[command(name = "frogger_cli")]
struct Args {
    // ---------------- rollout sizing ----------------
    /// Total steps to execute across episodes.
    #[arg(long, default_value_t = 500)]
    steps: u64,

    /// Environment RNG seed (episode start columns). If omitted, a fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Policy: random | greedy
    #[arg(long, default_value = "random")]
    policy: String,

    // ---------------- visualization ----------------
    /**
     * Render the grid as ASCII every step; value is sleep in ms (e.g. 500). Omit to disable rendering.
     * Examples:
     *   --render 0    (render as fast as possible)
     *   --render 500  (sleep 500ms between frames, the reference demo's pacing)
     */
    #[arg(long, value_name = "ms")]
    render: Option<u64>,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Print a table row every N steps (only used with --verbosity 2).
    #[arg(long, default_value_t = 100)]
    report_every: u64,
}

fn main() {
    let args = Args::parse();

    let base_seed = args.seed.unwrap_or(12345);

    // Policy instance (boxed so the CLI can switch implementations at runtime).
    let mut policy: Box<dyn Policy> = match args.policy.as_str() {
        "greedy" => Box::new(GreedyPolicy::new()),
        _ => Box::new(RandomPolicy::new(base_seed.wrapping_add(999))),
    };

    // Rollout configuration (data only; no logic).
    let cfg = RunnerConfig {
        steps: args.steps,
        base_seed,

        policy_name: args.policy.clone(),

        verbosity: args.verbosity,
        report_every: args.report_every,

        render_ms: args.render,
    };

    // Reporting sink:
    // - verbosity 2 => periodic table (unless report_every == 0)
    // - otherwise   => no-op
    let sink: Box<dyn RolloutSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        // Header cadence is a formatting detail; cadence in *steps* is handled by Runner.
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run(&mut *policy);

    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: policy={} steps_done={} elapsed={:.3}s steps/s={:.1} episodes_finished={} goals={} crashes={} goal_rate={:.3} avg_ep_len={:.2} max_ep_len={} reward/step={:.2} total_reward={} (last_ep_len={} last_done={})",
        report.policy,
        report.steps_done,
        report.elapsed_s,
        report.steps_per_s,
        report.episodes_finished,
        report.goals,
        report.crashes,
        report.goal_rate,
        report.avg_ep_len,
        report.max_ep_len,
        report.reward_per_step,
        report.total_reward,
        report.last_ep_len,
        report.last_done,
    );
}
