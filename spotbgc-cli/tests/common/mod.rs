#![allow(dead_code)]

use assert_cmd::Command;
pub use spotbgc_test::fixtures::*;
pub use spotbgc_test::TestEnvironment;

/// `spotbgc` binary isolated from the caller's configuration and log settings
pub fn spotbgc_cmd(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("spotbgc").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SPOTBGC_LOG")
        .env_remove("SPOTBGC_CONFIG")
        .env("SPOTBGC_HOME", env.root().join("home"))
        .env("NO_COLOR", "1");
    cmd
}

/// Number of `>` header lines in a FASTA text
pub fn count_sequences(content: &str) -> usize {
    content.lines().filter(|l| l.starts_with('>')).count()
}
