// File: tests/test_helpers.rs

use std::io::Write;
use std::process::{Command, Output, Stdio};

// Run one scripted session against the ledger binary
//
// Spawns the session driver through cargo, feeds it the given commands on
// stdin, and returns the captured output once the session ends. Logging is
// forced down to errors so stdout carries only the session responses.
pub fn run_session(commands: &[&str]) -> Result<Output, String> {
    let mut child = Command::new("cargo")
        .args([
            "run",
            "-p",
            "ledger-service",
            "--",
            "--log-level",
            "error",
            "start",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to start ledger session: {}", e))?;

    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| "Failed to open session stdin".to_string())?;

        for command in commands {
            writeln!(stdin, "{}", command)
                .map_err(|e| format!("Failed to write session command: {}", e))?;
        }
    }

    // Closing stdin above ends the session even without an explicit quit
    child
        .wait_with_output()
        .map_err(|e| format!("Failed to wait for session: {}", e))
}
