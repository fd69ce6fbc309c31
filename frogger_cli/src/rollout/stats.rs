// frogger_cli/src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct RolloutStats {
    pub episodes_finished: u64,
    pub ep_len: u64,
    pub episode_len_sum: u64,
    pub episode_len_max: u64,

    /// Episodes ending on the goal bank vs. under a car.
    pub goals: u64,
    pub crashes: u64,

    pub steps_done: u64,
    pub total_reward: i64,

    t0: Instant,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            episodes_finished: 0,
            ep_len: 0,
            episode_len_sum: 0,
            episode_len_max: 0,
            goals: 0,
            crashes: 0,
            steps_done: 0,
            total_reward: 0,
            t0: Instant::now(),
        }
    }

    /// Call once per step.
    pub fn on_step(&mut self, reward: i32) {
        self.steps_done += 1;
        self.ep_len += 1;
        self.total_reward += i64::from(reward);
    }

    /// Call when an episode terminates, before resetting the environment.
    pub fn on_episode_end(&mut self, reached_goal: bool) {
        self.episodes_finished += 1;
        self.episode_len_sum += self.ep_len;
        self.episode_len_max = self.episode_len_max.max(self.ep_len);

        if reached_goal {
            self.goals += 1;
        } else {
            self.crashes += 1;
        }

        self.ep_len = 0;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn steps_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.steps_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_ep_len(&self) -> f64 {
        if self.episodes_finished > 0 {
            self.episode_len_sum as f64 / self.episodes_finished as f64
        } else {
            0.0
        }
    }

    pub fn goal_rate(&self) -> f64 {
        if self.episodes_finished > 0 {
            self.goals as f64 / self.episodes_finished as f64
        } else {
            0.0
        }
    }

    pub fn reward_per_step(&self) -> f64 {
        if self.steps_done > 0 {
            self.total_reward as f64 / self.steps_done as f64
        } else {
            0.0
        }
    }

    pub fn live_msg(&self) -> String {
        format!(
            "sps={:.1} eps={} goals={} crashes={} goal%={:.3} avg_ep={:.1} max_ep={} r/step={:.2}",
            self.steps_per_sec(),
            self.episodes_finished,
            self.goals,
            self.crashes,
            self.goal_rate(),
            self.avg_ep_len(),
            self.episode_len_max,
            self.reward_per_step(),
        )
    }

    pub fn final_report(
        &self,
        policy_name: &str,
        last_ep_len: u64,
        last_done: bool,
    ) -> FinalReport {
        FinalReport {
            policy: policy_name.to_string(),

            steps_done: self.steps_done,
            elapsed_s: self.elapsed_secs(),
            steps_per_s: self.steps_per_sec(),

            episodes_finished: self.episodes_finished,
            goals: self.goals,
            crashes: self.crashes,
            goal_rate: self.goal_rate(),

            avg_ep_len: self.avg_ep_len(),
            max_ep_len: self.episode_len_max,

            reward_per_step: self.reward_per_step(),
            total_reward: self.total_reward,

            last_ep_len,
            last_done,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub policy: String,

    pub steps_done: u64,
    pub elapsed_s: f64,
    pub steps_per_s: f64,

    pub episodes_finished: u64,
    pub goals: u64,
    pub crashes: u64,
    pub goal_rate: f64,

    pub avg_ep_len: f64,
    pub max_ep_len: u64,

    pub reward_per_step: f64,
    pub total_reward: i64,

    pub last_ep_len: u64,
    pub last_done: bool,
}
