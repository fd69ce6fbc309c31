// frogger_cli/src/rollout/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use frogger_engine::engine::Env;
use frogger_engine::policy::Policy;
use frogger_engine::GOAL_REWARD;

use super::sinks::{ReportRow, RolloutSink};
use super::stats::{FinalReport, RolloutStats};

/// Fixed internal cadence for progress-bar live message updates.
/// (No CLI knob on purpose.)
const LIVE_EVERY: u64 = 200;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core rollout ----------------
    /// Total steps to execute across episodes.
    pub steps: u64,
    /// Seed for the environment's RNG (episode start columns).
    pub base_seed: u64,

    /// Used only for the final report string.
    pub policy_name: String,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N steps (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,

    // ---------------- rendering ----------------
    /// If Some(ms): render every step; sleep ms between frames (0 = no sleep).
    /// Rendering happens here, outside the core transition, and cannot feed
    /// back into environment state.
    pub render_ms: Option<u64>,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn RolloutSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn RolloutSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, policy: &mut dyn Policy) -> FinalReport {
        let cfg = self.cfg.clone();

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.steps);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .unwrap()
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = RolloutStats::new();
        let mut env = Env::new(cfg.base_seed);
        let mut last_done = false;

        if cfg.render_ms.is_some() {
            print!("{}", env.render_ascii());
        }

        while stats.steps_done < cfg.steps {
            let action = policy.choose_action(&env);
            let out = env.step(action);
            stats.on_step(out.reward);

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            // Rendering (ASCII) every step when enabled.
            if let Some(ms) = cfg.render_ms {
                println!(
                    "step={} action={:?} state={} reward={} done={}",
                    stats.steps_done, action, out.state, out.reward, out.done
                );
                print!("{}", env.render_ascii());
                if ms > 0 {
                    std::thread::sleep(Duration::from_millis(ms));
                }
            }

            last_done = out.done;

            // ------------------------------------------------------------
            // Episode boundary: the environment does not latch `done`, so
            // the reset-on-termination decision lives here.
            // ------------------------------------------------------------
            if out.done {
                stats.on_episode_end(out.reward == GOAL_REWARD);
                env.reset();

                if cfg.render_ms.is_some() {
                    println!(
                        "=== reset: episodes_finished={} goals={} crashes={} avg_ep_len={:.2} ===",
                        stats.episodes_finished,
                        stats.goals,
                        stats.crashes,
                        stats.avg_ep_len()
                    );
                    print!("{}", env.render_ascii());
                }
            }

            // ------------------------------------------------------------
            // Periodic table report (verbosity == 2 only).
            // ------------------------------------------------------------
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && (stats.steps_done % cfg.report_every == 0)
            {
                let row = ReportRow {
                    step: stats.steps_done,
                    steps_total: cfg.steps,
                    sps: stats.steps_per_sec(),

                    episodes_finished: stats.episodes_finished,
                    goals: stats.goals,
                    crashes: stats.crashes,
                    goal_rate: stats.goal_rate(),

                    avg_ep_len: stats.avg_ep_len(),
                    max_ep_len: stats.episode_len_max,

                    reward_per_step: stats.reward_per_step(),
                    total_reward: stats.total_reward,
                };

                self.sink.on_report_row(&row, pb.as_ref());
            }

            // ------------------------------------------------------------
            // Live progress message cadence (fixed internal cadence).
            // ------------------------------------------------------------
            if cfg.verbosity >= 1 && (stats.steps_done % LIVE_EVERY == 0) {
                if let Some(ref pb) = pb {
                    pb.set_message(stats.live_msg());
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        stats.final_report(&cfg.policy_name, stats.ep_len, last_done)
    }
}
