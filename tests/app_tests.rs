mod common;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use swiftlint_annotate::app::ActionApp;
use swiftlint_annotate::config::ActionConfig;
use swiftlint_annotate::errors::{ActionError, ConfigError};
use swiftlint_annotate::models::{AnnotationLevel, Arch, Os, Platform, VersionSelector};
use swiftlint_annotate::output::RecordingSink;
use swiftlint_annotate::tools::DirToolCache;

use common::offline_downloader;

fn config(version: VersionSelector, workspace: &Path, tool_cache: &Path) -> ActionConfig {
    ActionConfig {
        version,
        strict: false,
        extra_args: None,
        workspace: Some(workspace.to_path_buf()),
        tool_cache: tool_cache.to_path_buf(),
        temp_dir: None,
        releases_url: "https://releases.invalid/SwiftLint/releases".to_string(),
    }
}

fn darwin() -> Platform {
    Platform::new(Os::Darwin, Arch::Arm64)
}

#[tokio::test]
async fn test_unsupported_platform_fails_before_download() {
    let workspace = TempDir::new().expect("Failed to create temp directory");
    let cache = TempDir::new().expect("Failed to create temp directory");
    let mut sink = RecordingSink::new();

    let mut app = ActionApp::new(
        config(VersionSelector::Latest, workspace.path(), cache.path()),
        Platform::new(Os::Linux, Arch::Arm64),
        offline_downloader(),
        DirToolCache::new(cache.path()),
        &mut sink,
    );
    let err = app.run().await.unwrap_err();
    drop(app);

    assert!(matches!(
        err,
        ActionError::Config(ConfigError::UnsupportedArch { .. })
    ));
    assert!(sink.annotations.is_empty());
}

#[tokio::test]
async fn test_invalid_extra_args_fail_before_download() {
    let workspace = TempDir::new().expect("Failed to create temp directory");
    let cache = TempDir::new().expect("Failed to create temp directory");

    let mut config = config(VersionSelector::Latest, workspace.path(), cache.path());
    config.extra_args = Some("--config 'unterminated".to_string());

    let mut app = ActionApp::new(
        config,
        darwin(),
        offline_downloader(),
        DirToolCache::new(cache.path()),
        RecordingSink::new(),
    );

    let err = app.run().await.unwrap_err();
    assert!(matches!(err, ActionError::Config(ConfigError::InvalidArgs(_))));
}

#[cfg(unix)]
mod with_cached_tool {
    use super::*;
    use pretty_assertions::assert_eq;
    use swiftlint_annotate::tools::ToolCache;

    /// Install a cached "swiftlint" that is really `/bin/sh`.
    ///
    /// `sh lint --reporter=json` then runs the `lint` script from the
    /// workspace, so no freshly written file is ever exec'd.
    fn install_shell_tool(cache_root: &Path, version: &str) -> PathBuf {
        let staged = TempDir::new().expect("Failed to create temp directory");
        std::os::unix::fs::symlink("/bin/sh", staged.path().join("swiftlint")).unwrap();

        DirToolCache::new(cache_root)
            .store(staged.path(), "swiftlint-darwin", version, &Arch::Arm64)
            .expect("Failed to populate tool cache")
    }

    fn write_lint_script(workspace: &Path, stdout: &str, exit_code: i32) {
        let script = format!("cat <<'JSON'\n{}\nJSON\nexit {}\n", stdout, exit_code);
        std::fs::write(workspace.join("lint"), script).unwrap();
    }

    #[tokio::test]
    async fn test_findings_are_annotated_and_exit_code_forwarded() {
        let workspace = TempDir::new().expect("Failed to create temp directory");
        let cache = TempDir::new().expect("Failed to create temp directory");
        install_shell_tool(cache.path(), "0.57.0");

        let ws = workspace.path().display();
        write_lint_script(
            workspace.path(),
            &format!(
                r#"[
  {{"file": "{ws}/Sources/App/main.swift", "line": 12, "character": 5, "severity": "Warning", "type": "Line Length", "rule_id": "line_length", "reason": "Line too long"}},
  {{"file": "{ws}/Sources/App/Model.swift", "line": 3, "character": null, "severity": "Error", "type": "Force Cast", "rule_id": "force_cast", "reason": "Force casts should be avoided"}}
]"#,
                ws = ws
            ),
            2,
        );

        let mut sink = RecordingSink::new();
        let mut app = ActionApp::new(
            config(VersionSelector::Tag("0.57.0".to_string()), workspace.path(), cache.path()),
            darwin(),
            offline_downloader(),
            DirToolCache::new(cache.path()),
            &mut sink,
        );
        let outcome = app.run().await.expect("run should succeed");
        drop(app);

        assert_eq!(outcome.exit_code, 2);
        assert_eq!(outcome.annotations, 2);

        let summary: Vec<(AnnotationLevel, &str, Option<PathBuf>)> = sink
            .annotations
            .iter()
            .map(|a| (a.level, a.title.as_str(), a.file.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (
                    AnnotationLevel::Warning,
                    "Line Length (line_length)",
                    Some(PathBuf::from("Sources/App/main.swift"))
                ),
                (
                    AnnotationLevel::Error,
                    "Force Cast (force_cast)",
                    Some(PathBuf::from("Sources/App/Model.swift"))
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_clean_run_exits_zero() {
        let workspace = TempDir::new().expect("Failed to create temp directory");
        let cache = TempDir::new().expect("Failed to create temp directory");
        install_shell_tool(cache.path(), "0.56.1");
        write_lint_script(workspace.path(), "[]", 0);

        let mut app = ActionApp::new(
            config(VersionSelector::Tag("0.56.1".to_string()), workspace.path(), cache.path()),
            darwin(),
            offline_downloader(),
            DirToolCache::new(cache.path()),
            RecordingSink::new(),
        );
        let outcome = app.run().await.unwrap();

        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.annotations, 0);
        assert!(app.into_sink().annotations.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_output_is_fatal_with_no_annotations() {
        let workspace = TempDir::new().expect("Failed to create temp directory");
        let cache = TempDir::new().expect("Failed to create temp directory");
        install_shell_tool(cache.path(), "0.57.0");
        write_lint_script(
            workspace.path(),
            r#"[{"file": "a.swift", "severity": "warning", "type": "T", "rule_id": "r", "reason": "ok"}, oops"#,
            1,
        );

        let mut app = ActionApp::new(
            config(VersionSelector::Tag("0.57.0".to_string()), workspace.path(), cache.path()),
            darwin(),
            offline_downloader(),
            DirToolCache::new(cache.path()),
            RecordingSink::new(),
        );
        let err = app.run().await.unwrap_err();

        assert!(matches!(err, ActionError::Report(_)));
        assert!(app.into_sink().annotations.is_empty());
    }
}
