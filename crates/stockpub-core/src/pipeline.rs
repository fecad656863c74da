//! The publish pipeline: generate, copy, stage.
//!
//! Strictly ordered and fully synchronous. Generation precedes copying, so a
//! failed generator run leaves the published site untouched; the HTML copy
//! precedes the Markdown copy, so a missing HTML artifact preserves the
//! previously published Markdown as well. No step is retried and nothing is
//! rolled back — reruns converge because every write is an overwrite.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::{generator, git, io, paths};

/// Destination paths written by a successful publish run.
#[derive(Debug)]
pub struct Published {
    pub site_index: PathBuf,
    pub site_latest: PathBuf,
}

/// Run the full pipeline: report generation, then [`publish_artifacts`].
pub fn publish(root: &Path) -> Result<Published> {
    generator::run_report(root)?;
    publish_artifacts(root)
}

/// The post-generation half of the pipeline: copy the two generated report
/// files into `docs/` and stage both destinations for the next commit.
pub fn publish_artifacts(root: &Path) -> Result<Published> {
    io::ensure_dir(&paths::docs_dir(root))?;

    let site_index = paths::site_index(root);
    let site_latest = paths::site_latest(root);

    io::copy_file(&paths::report_html(root), &site_index)?;
    io::copy_file(&paths::report_md(root), &site_latest)?;

    git::stage(root, &[Path::new(paths::SITE_INDEX), Path::new(paths::SITE_LATEST)])?;

    tracing::debug!(root = %root.display(), "published latest report");
    Ok(Published {
        site_index,
        site_latest,
    })
}
