//! Exports the [`build_site`] function which stitches together the
//! high-level steps of one build: loading the post store
//! ([`crate::store`]), rendering the blog index and per-post pages
//! ([`crate::page`]), the preview images ([`crate::preview`]), the feed
//! ([`crate::feed`]) and the sitemap ([`crate::sitemap`]), and writing each
//! artifact to disk.
//!
//! The run is strictly sequential and fail-fast: the first input or write
//! error aborts the remaining work. Nothing is retried and nothing is
//! swallowed. The clock is read once per build and only feeds the sitemap's
//! fixed entries and the feed's empty-store fallback, so a build's output is
//! a deterministic function of the store, the config, and that single date.

use crate::config::Config;
use crate::store::{self, Post};
use crate::{feed, log, page, preview, sitemap};
use chrono::Utc;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What a completed build produced, for the caller's final log line.
pub struct Summary {
    /// Number of posts in the store (= detail pages = preview images).
    pub posts: usize,
}

/// Builds the whole site from a [`Config`]. Artifacts are produced in a
/// fixed order: index page, then per post a detail page and a preview
/// image, then the feed, then the sitemap.
pub fn build_site(config: &Config) -> Result<Summary> {
    let raw = fs::read_to_string(&config.posts_file).map_err(|err| Error::ReadStore {
        path: config.posts_file.clone(),
        err,
    })?;
    let posts = store::load_store(&raw)?;
    let today = Utc::now().date_naive();

    create_dir(&config.blog_dir)?;
    create_dir(&config.preview_dir)?;

    write_artifact(
        &config.blog_dir.join("index.html"),
        &page::render_index(config, &posts),
    )?;
    log!("page"; "blog/index.html");

    for post in &posts {
        write_post(config, post)?;
        log!("post"; "blog/{id}.html + assets/og/{id}.svg", id = post.id);
    }

    write_artifact(&config.feed_file, &feed::render_feed(config, &posts, today))?;
    log!("feed"; "feed.xml ({} items)", posts.len());

    write_artifact(
        &config.sitemap_file,
        &sitemap::render_sitemap(config, &posts, today),
    )?;
    log!("sitemap"; "sitemap.xml ({} urls)", posts.len() + 2);

    Ok(Summary { posts: posts.len() })
}

fn write_post(config: &Config, post: &Post) -> Result<()> {
    write_artifact(
        &config.blog_dir.join(format!("{}.html", post.id)),
        &page::render_post(config, post),
    )?;
    write_artifact(
        &config.preview_dir.join(format!("{}.svg", post.id)),
        &preview::render_preview(config, post),
    )
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| Error::CreateDir {
        path: dir.to_owned(),
        err,
    })
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| Error::Write {
        path: path.to_owned(),
        err,
    })
}

/// The result of a fallible build step.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a failed build. The taxonomy is two-sided: input errors
/// (missing or malformed store document) and write errors (any filesystem
/// failure while emitting artifacts). Both are fatal.
#[derive(Debug)]
pub enum Error {
    /// The store document could not be read.
    ReadStore { path: PathBuf, err: std::io::Error },

    /// The store document was read but is malformed.
    Input(store::Error),

    /// An output directory could not be created.
    CreateDir { path: PathBuf, err: std::io::Error },

    /// An artifact could not be written.
    Write { path: PathBuf, err: std::io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ReadStore { path, err } => {
                write!(f, "Reading post store '{}': {}", path.display(), err)
            }
            Error::Input(err) => err.fmt(f),
            Error::CreateDir { path, err } => {
                write!(f, "Creating directory '{}': {}", path.display(), err)
            }
            Error::Write { path, err } => {
                write!(f, "Writing '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadStore { path: _, err } => Some(err),
            Error::Input(err) => Some(err),
            Error::CreateDir { path: _, err } => Some(err),
            Error::Write { path: _, err } => Some(err),
        }
    }
}

impl From<store::Error> for Error {
    /// Converts [`store::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator around the store loader.
    fn from(err: store::Error) -> Error {
        Error::Input(err)
    }
}
