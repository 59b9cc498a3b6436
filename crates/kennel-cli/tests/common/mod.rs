use std::process::{Command, Output};

/// Run the CLI binary against the given collection URL.
pub fn run_cli(url: &str, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kennel"));
    cmd.arg("--url").arg(url);
    cmd.args(args);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(url: &str, args: &[&str]) -> String {
    let output = run_cli(url, args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
