use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Fixed project layout
// ---------------------------------------------------------------------------

pub const GENERATOR_SCRIPT: &str = "stock_report.py";

pub const REPORTS_DIR: &str = "reports";
pub const REPORT_HTML: &str = "reports/latest.html";
pub const REPORT_MD: &str = "reports/latest.md";

pub const DOCS_DIR: &str = "docs";
pub const SITE_INDEX: &str = "docs/index.html";
pub const SITE_LATEST: &str = "docs/latest.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn generator_script(root: &Path) -> PathBuf {
    root.join(GENERATOR_SCRIPT)
}

pub fn report_html(root: &Path) -> PathBuf {
    root.join(REPORT_HTML)
}

pub fn report_md(root: &Path) -> PathBuf {
    root.join(REPORT_MD)
}

pub fn docs_dir(root: &Path) -> PathBuf {
    root.join(DOCS_DIR)
}

pub fn site_index(root: &Path) -> PathBuf {
    root.join(SITE_INDEX)
}

pub fn site_latest(root: &Path) -> PathBuf {
    root.join(SITE_LATEST)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            generator_script(root),
            PathBuf::from("/tmp/proj/stock_report.py")
        );
        assert_eq!(
            report_html(root),
            PathBuf::from("/tmp/proj/reports/latest.html")
        );
        assert_eq!(report_md(root), PathBuf::from("/tmp/proj/reports/latest.md"));
        assert_eq!(site_index(root), PathBuf::from("/tmp/proj/docs/index.html"));
        assert_eq!(site_latest(root), PathBuf::from("/tmp/proj/docs/latest.md"));
    }
}
