use std::env;
use std::env::consts::EXE_SUFFIX;
use std::process::Command;

fn main() {
    // This is a simple proxy to launch the session binary built by the
    // ledger-service member crate
    println!("Starting account ledger...");

    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };
    let binary_name = format!("ledger-service{}", EXE_SUFFIX);

    // Prefer the workspace target directory, then the launcher's own directory
    let mut binary_path = env::current_dir()
        .expect("Failed to get current directory")
        .join("target")
        .join(profile)
        .join(&binary_name);

    if !binary_path.exists() {
        if let Some(dir) = env::current_exe().ok().and_then(|exe| {
            exe.parent().map(|d| d.to_path_buf())
        }) {
            binary_path = dir.join(&binary_name);
        }
    }

    println!("Launching: {:?}", binary_path);

    // Run the session binary and mirror its exit status
    let status = Command::new(&binary_path)
        .args(env::args().skip(1))
        .status()
        .unwrap_or_else(|e| {
            eprintln!("Failed to execute {:?}: {}", binary_path, e);
            std::process::exit(1);
        });

    std::process::exit(status.code().unwrap_or(1));
}
