use std::path::Path;
use std::process::Command;

use crate::error::{PublishError, Result};

/// Stage `paths` in the git working tree at `root` (`git add -- <paths>`).
/// Staging only — the pipeline never commits or pushes.
pub fn stage(root: &Path, paths: &[&Path]) -> Result<()> {
    let mut cmd = Command::new("git");
    cmd.arg("add").arg("--").current_dir(root);
    for p in paths {
        cmd.arg(p);
    }

    let output = cmd
        .output()
        .map_err(|e| PublishError::GitFailed(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(PublishError::GitFailed(stderr));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) -> std::process::Output {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .expect("git not runnable")
    }

    fn staged_paths(dir: &Path) -> Vec<String> {
        let out = git(dir, &["diff", "--cached", "--name-only"]);
        String::from_utf8_lossy(&out.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn stage_adds_paths_to_the_index() {
        if which::which("git").is_err() {
            eprintln!("git not available, skipping");
            return;
        }
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/index.html"), "<html></html>").unwrap();
        std::fs::write(dir.path().join("docs/latest.md"), "# report").unwrap();

        stage(
            dir.path(),
            &[
                Path::new("docs/index.html"),
                Path::new("docs/latest.md"),
            ],
        )
        .unwrap();

        let staged = staged_paths(dir.path());
        assert!(staged.contains(&"docs/index.html".to_string()));
        assert!(staged.contains(&"docs/latest.md".to_string()));
    }

    #[test]
    fn stage_fails_on_nonexistent_path() {
        if which::which("git").is_err() {
            eprintln!("git not available, skipping");
            return;
        }
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);

        let err = stage(dir.path(), &[Path::new("docs/missing.html")]).unwrap_err();
        assert!(matches!(err, PublishError::GitFailed(_)));
    }
}
