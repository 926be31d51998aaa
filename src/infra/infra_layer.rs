// The infra module contains implementations of core traits and the
// process-level adapters (environment, randomness).

#[path = "config/env_config.rs"]
pub mod config;

#[path = "random/thread_rng_source.rs"]
pub mod random;
