use crate::consts::TEST_ENV_VAR;
use std::env;
use std::sync::OnceLock;

fn has_env_var(key: &str) -> bool {
    match env::var(key) {
        Ok(var) => !var.is_empty(),
        Err(_) => false,
    }
}

pub fn is_ci() -> bool {
    static CI_CACHE: OnceLock<bool> = OnceLock::new();

    *CI_CACHE.get_or_init(ci_env::is_ci)
}

#[inline]
pub fn is_test_env() -> bool {
    static TEST_CACHE: OnceLock<bool> = OnceLock::new();

    *TEST_CACHE.get_or_init(|| has_env_var(TEST_ENV_VAR) || has_env_var("STARBASE_TEST"))
}

/// Read an environment variable, treating empty values as missing.
pub fn get_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
