//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

/// One-shot static build of the blog: reads `data/posts.json` under the
/// site root and emits HTML pages, preview images, the RSS feed and the
/// sitemap.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Site root directory (contains `data/posts.json`; receives the
    /// generated artifacts)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Site config file (default: `<root>/site.json` when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
