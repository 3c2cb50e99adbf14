use std::process::Command;

fn main() {
    // Capture the short git commit hash at build time so `--version`
    // identifies exactly which tree a binary came from.
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={git_hash}");

    // rerun the build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
