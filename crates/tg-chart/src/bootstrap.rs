use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chart_data::reader;

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.tg-chart/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.tg-chart/`
/// - `~/.tg-chart/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let chart_dir = home.join(".tg-chart");
    std::fs::create_dir_all(&chart_dir)?;
    std::fs::create_dir_all(chart_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

/// Map a CLI log-level name to a tracing directive (lowercase).
///
/// Only the names the `--log-level` parser admits get a dedicated arm;
/// anything else is passed through lowercased for `EnvFilter` to judge.
fn normalise_level(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        other => other.to_lowercase(),
    }
}

// ── Export-path discovery ──────────────────────────────────────────────────────

/// `true` when `dir` exists and holds at least the first export file.
pub fn is_export_dir(dir: &Path) -> bool {
    dir.is_dir() && reader::export_file_path(dir, 1).is_file()
}

/// Attempt to locate a Telegram chat export on the local system.
///
/// Checks the following paths in order and returns the first that contains a
/// `messages1.html`:
/// 1. `~/Downloads/Telegram Desktop/ChatExport/`
/// 2. `~/Downloads/Telegram Desktop/`
/// 3. `~/Telegram Desktop/`
///
/// Returns `None` when no candidate qualifies.
pub fn discover_export_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let candidates = [
        home.join("Downloads")
            .join("Telegram Desktop")
            .join("ChatExport"),
        home.join("Downloads").join("Telegram Desktop"),
        home.join("Telegram Desktop"),
    ];
    candidates.into_iter().find(|p| is_export_dir(p))
}

/// Ask the user for the export directory on stdin, re-prompting until the
/// answer names an existing directory.
pub fn prompt_for_directory() -> anyhow::Result<PathBuf> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "Path to the Telegram chat export directory: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a directory was given");
        }
        let candidate = PathBuf::from(line.trim());
        if candidate.is_dir() {
            return Ok(candidate);
        }
        writeln!(stdout, "'{}' is not a directory.", candidate.display())?;
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── test_ensure_directories ───────────────────────────────────────────────

    #[test]
    fn test_ensure_directories() {
        let tmp = TempDir::new().expect("tempdir");

        // Override HOME so that dirs::home_dir() resolves to our temp dir.
        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let result = ensure_directories();

        // Restore HOME.
        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        result.expect("ensure_directories should succeed");

        let chart_dir = tmp.path().join(".tg-chart");
        assert!(chart_dir.is_dir(), ".tg-chart dir must exist");
        assert!(chart_dir.join("logs").is_dir(), "logs subdir must exist");
    }

    // ── test_normalise_level ──────────────────────────────────────────────────

    #[test]
    fn test_normalise_level_maps_cli_names() {
        assert_eq!(normalise_level("DEBUG"), "debug");
        assert_eq!(normalise_level("INFO"), "info");
        assert_eq!(normalise_level("WARNING"), "warn");
        assert_eq!(normalise_level("ERROR"), "error");
    }

    #[test]
    fn test_normalise_level_case_insensitive() {
        assert_eq!(normalise_level("warning"), "warn");
        assert_eq!(normalise_level("Info"), "info");
    }

    #[test]
    fn test_normalise_level_passes_unknown_through() {
        assert_eq!(normalise_level("trace"), "trace");
    }

    // ── test_is_export_dir ────────────────────────────────────────────────────

    #[test]
    fn test_is_export_dir_requires_first_file() {
        let tmp = TempDir::new().expect("tempdir");
        assert!(!is_export_dir(tmp.path()));

        std::fs::write(tmp.path().join("messages1.html"), "<html></html>").expect("write");
        assert!(is_export_dir(tmp.path()));
    }

    #[test]
    fn test_is_export_dir_rejects_nonexistent() {
        let tmp = TempDir::new().expect("tempdir");
        assert!(!is_export_dir(&tmp.path().join("missing")));
    }

    // ── test_discover_export_path ─────────────────────────────────────────────

    #[test]
    fn test_discover_export_path_returns_none_when_absent() {
        let tmp = TempDir::new().expect("tempdir");

        // Point HOME at a directory that has no candidate path.
        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let path = discover_export_path();

        // Restore HOME.
        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        assert!(
            path.is_none(),
            "should return None when no candidate exists"
        );
    }

    #[test]
    fn test_discover_export_path_finds_chat_export() {
        let tmp = TempDir::new().expect("tempdir");
        let export = tmp
            .path()
            .join("Downloads")
            .join("Telegram Desktop")
            .join("ChatExport");
        std::fs::create_dir_all(&export).expect("create export dir");
        std::fs::write(export.join("messages1.html"), "<html></html>").expect("write");

        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let path = discover_export_path();

        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        assert_eq!(path, Some(export));
    }

    #[test]
    fn test_discover_export_path_skips_empty_candidate() {
        let tmp = TempDir::new().expect("tempdir");
        // ChatExport exists but holds no export; the parent holds one.
        let desktop = tmp.path().join("Downloads").join("Telegram Desktop");
        std::fs::create_dir_all(desktop.join("ChatExport")).expect("create dirs");
        std::fs::write(desktop.join("messages1.html"), "<html></html>").expect("write");

        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let path = discover_export_path();

        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        assert_eq!(path, Some(desktop));
    }
}
