// engine/tests/policy_contracts.rs
#![forbid(unsafe_code)]

/**
 * Cross-policy contract tests.
 *
 * Purpose:
 * - Enforce shared behavior contracts for policy implementations:
 *   seeded determinism (where applicable) and input-state purity.
 *
 * Covered policy families:
 * - `RandomPolicy` (seeded deterministic RNG path)
 * - `GreedyPolicy` (deterministic one-step lookahead path)
 */
use frogger_engine::{
    Action, Env, GreedyPolicy, LANE_LEN, N_ROWS, Policy, RandomPolicy, Tile,
};

#[derive(Clone, Debug, Eq, PartialEq)]
struct EnvSnapshot {
    lanes: [[Tile; LANE_LEN]; N_ROWS],
    phase: u32,
    frog_row: usize,
    frog_col: usize,
    steps: u64,
}

fn snapshot(env: &Env) -> EnvSnapshot {
    EnvSnapshot {
        lanes: env.lanes,
        phase: env.phase,
        frog_row: env.frog_row,
        frog_col: env.frog_col,
        steps: env.steps,
    }
}

fn fixture_env() -> Env {
    let mut env = Env::new(987654);
    env.reset_to(5);
    for i in 0..9usize {
        env.step_id(i % 5);
    }
    env
}

#[test]
fn random_policy_is_seed_deterministic_for_fixed_state() {
    let env = fixture_env();
    let mut p1 = RandomPolicy::new(42);
    let mut p2 = RandomPolicy::new(42);
    for _ in 0..12 {
        assert_eq!(p1.choose_action(&env), p2.choose_action(&env));
    }
}

#[test]
fn random_policy_does_not_mutate_env() {
    let env = fixture_env();
    let before = snapshot(&env);
    let mut p = RandomPolicy::new(99);
    let _ = p.choose_action(&env);
    assert_eq!(before, snapshot(&env));
}

#[test]
fn greedy_policy_is_deterministic_for_fixed_state() {
    let env = fixture_env();
    let mut p = GreedyPolicy::new();
    let a1 = p.choose_action(&env);
    let a2 = p.choose_action(&env);
    assert_eq!(a1, a2);
}

#[test]
fn greedy_policy_does_not_mutate_env() {
    let env = fixture_env();
    let before = snapshot(&env);
    let mut p = GreedyPolicy::new();
    let _ = p.choose_action(&env);
    assert_eq!(before, snapshot(&env));
}

#[test]
fn greedy_policy_picks_a_safe_action_when_one_exists() {
    let mut env = Env::new(31337);
    let mut p = GreedyPolicy::new();

    for _ in 0..300 {
        let safe_exists = Action::all()
            .iter()
            .any(|&a| env.simulate_action(a).2 != Tile::Car);

        let chosen = p.choose_action(&env);
        if safe_exists {
            assert_ne!(env.simulate_action(chosen).2, Tile::Car);
        }

        let out = env.step(chosen);
        if out.done {
            env.reset();
        }
    }
}
