mod root;

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use stockpub_core::PublishError;

#[derive(Parser)]
#[command(
    name = "stockpub",
    about = "Publish the latest daily stock report to the docs/ site and stage it for commit",
    version
)]
struct Cli {
    /// Project root (default: auto-detect from stock_report.py or .git/)
    #[arg(long, env = "STOCKPUB_ROOT")]
    root: Option<PathBuf>,
}

fn run(root: &Path) -> anyhow::Result<()> {
    let published = stockpub_core::pipeline::publish(root)
        .with_context(|| format!("publish failed in {}", root.display()))?;

    println!(
        "Published {} and {} (staged for commit)",
        published.site_index.display(),
        published.site_latest.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    if let Err(e) = run(&root) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        // A failed generator run propagates its own exit code
        let code = e
            .downcast_ref::<PublishError>()
            .map(PublishError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
