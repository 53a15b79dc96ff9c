//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "coin-clicker 0.1.0 (2026-10-19, abc1234)"
pub fn version_line() -> String {
    format!(
        "{} {} ({}, {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_mentions_build() {
        let line = version_line();
        assert!(line.starts_with("coin-clicker "));
        assert!(line.contains(BUILD_DATE));
        assert!(line.contains(BUILD_COMMIT));
    }

    #[test]
    fn test_build_commit_format() {
        // 7-char short hash, or "unknown" outside a git checkout
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }
}
