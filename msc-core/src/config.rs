//! Environment configuration loading from .env files
//!
//! Names the environment keys and their defaults. The `msc` command line
//! binds each key to a flag through clap, so `.env` must be loaded before
//! arguments are parsed.

use once_cell::sync::Lazy;

use crate::arena::DEFAULT_CAPACITY;

/// Arena capacity (`--capacity`)
pub const ARENA_CAPACITY_KEY: &str = "MSC_ARENA_CAPACITY";
/// Propagation steps (`--steps`)
pub const MAX_STEPS_KEY: &str = "MSC_MAX_STEPS";
/// Fixed-point detection (`--stable`)
pub const DETECT_STABLE_KEY: &str = "MSC_DETECT_STABLE";
/// Log correlation id (`--cid`)
pub const CORRELATION_ID_KEY: &str = "MSC_CORRELATION_ID";

/// Default arena capacity: 64 registers
pub const DEFAULT_ARENA_CAPACITY: i64 = DEFAULT_CAPACITY as i64;
/// Default propagation steps
pub const DEFAULT_MAX_STEPS: usize = 16;
/// Default correlation id
pub const DEFAULT_CORRELATION_ID: &str = "SYSTEM";

// Load .env at most once per process
static DOTENV_INIT: Lazy<bool> = Lazy::new(|| dotenv::dotenv().is_ok());

/// Load `.env` into the process environment
///
/// Variables already set are left untouched. Returns whether a `.env` file
/// was found; repeated calls return the first result.
pub fn load_dotenv() -> bool {
    *DOTENV_INIT
}
