#[cfg(windows)]
pub const BIN_NAME: &str = "depman.exe";

#[cfg(not(windows))]
pub const BIN_NAME: &str = "depman";

pub const LOG_ENV_VAR: &str = "DEPMAN_LOG";

pub const TEST_ENV_VAR: &str = "DEPMAN_TEST";
