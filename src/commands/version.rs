//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("ghreport {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported rustc from the manifest
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_profile_is_known() {
        assert!(matches!(build_profile(), "debug" | "release"));
    }

    #[test]
    fn test_rustc_version_set() {
        assert!(!rustc_version().is_empty());
    }
}
