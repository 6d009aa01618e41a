//! Site configuration. A [`Config`] is resolved once at startup and passed
//! by reference into every renderer; there are no global site constants.
//!
//! The on-disk format is a small JSON object (`site.json` in the site root
//! by default) overriding any of the site identity fields. The output layout
//! is fixed: `data/posts.json` in, `blog/`, `assets/og/`, `feed.xml` and
//! `sitemap.xml` out, all relative to the root directory.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// The blog section's display title, shared by the index page, the feed
/// channel and the preview-image kicker.
pub const BLOG_TITLE: &str = "Diario de Campo";

const DEFAULT_SITE_URL: &str = "https://example.org";
const CONFIG_FILE_NAME: &str = "site.json";

/// Resolved site configuration.
pub struct Config {
    /// Canonical base URL of the deployed site. Parsed and validated at
    /// load time; permalinks are derived from it.
    pub site_url: Url,

    /// Human-readable site name, used in page titles and metadata.
    pub site_name: String,

    /// Site-wide description, used as the index page description and the
    /// feed channel description.
    pub site_description: String,

    /// The JSON post store read at build start.
    pub posts_file: PathBuf,

    /// Directory receiving `index.html` and one `{id}.html` per post.
    pub blog_dir: PathBuf,

    /// Directory receiving one `{id}.svg` preview image per post.
    pub preview_dir: PathBuf,

    /// Output path of the RSS feed.
    pub feed_file: PathBuf,

    /// Output path of the sitemap.
    pub sitemap_file: PathBuf,
}

/// The optional on-disk config file. Only site identity is configurable;
/// the output layout is part of the pipeline's contract.
#[derive(Deserialize, Default)]
struct ConfigFile {
    site_url: Option<Url>,
    site_name: Option<String>,
    site_description: Option<String>,
}

impl Config {
    /// Resolves the configuration for a site rooted at `root`.
    ///
    /// When `config_file` is given it must exist and parse; otherwise
    /// `{root}/site.json` is used if present, and compiled-in defaults
    /// apply if not.
    pub fn from_root(root: &Path, config_file: Option<&Path>) -> Result<Config> {
        let file = match config_file {
            Some(path) => Some(read_config_file(path)?),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                match default_path.exists() {
                    true => Some(read_config_file(&default_path)?),
                    false => None,
                }
            }
        };
        Config::resolve(root, file.unwrap_or_default())
    }

    fn resolve(root: &Path, file: ConfigFile) -> Result<Config> {
        let site_url = match file.site_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_SITE_URL)
                .map_err(|e| anyhow!("Parsing default site URL: {}", e))?,
        };
        if site_url.host_str().is_none() {
            return Err(anyhow!(
                "Site URL `{}` has no host; expected an absolute http(s) URL",
                site_url
            ));
        }

        Ok(Config {
            site_url,
            site_name: file.site_name.unwrap_or_else(|| "VirgilIO".to_owned()),
            site_description: file.site_description.unwrap_or_else(|| {
                "Registro de decisiones, fricción y resultados verificables.".to_owned()
            }),
            posts_file: root.join("data").join("posts.json"),
            blog_dir: root.join("blog"),
            preview_dir: root.join("assets").join("og"),
            feed_file: root.join("feed.xml"),
            sitemap_file: root.join("sitemap.xml"),
        })
    }

    /// The site base URL without a trailing slash, ready for segment
    /// concatenation.
    pub fn base(&self) -> &str {
        self.site_url.as_str().trim_end_matches('/')
    }

    /// The host part of the site URL, shown in the preview-image footer.
    pub fn host(&self) -> &str {
        self.site_url.host_str().unwrap_or_default()
    }

    /// Canonical URL of the blog index.
    pub fn blog_url(&self) -> String {
        format!("{}/blog", self.base())
    }

    /// Canonical URL of a post's detail page. `id` is trusted as URL-safe;
    /// see [`crate::store::Post`].
    pub fn permalink(&self, id: &str) -> String {
        format!("{}/blog/{}", self.base(), id)
    }

    /// Public URL of a post's preview image.
    pub fn preview_url(&self, id: &str) -> String {
        format!("{}/assets/og/{}.svg", self.base(), id)
    }

    /// Public URL of the RSS feed.
    pub fn feed_url(&self) -> String {
        format!("{}/feed.xml", self.base())
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Opening config file `{}`", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Parsing config file `{}`", path.display()))
}

#[cfg(test)]
pub mod test {
    use super::*;

    /// A config rooted at `root` with a fixed site identity, reused by
    /// renderer tests across the crate.
    pub fn test_config(root: &Path) -> Config {
        Config::resolve(
            root,
            ConfigFile {
                site_url: Some(Url::parse("https://example.org").unwrap()),
                site_name: Some("Ejemplo".to_owned()),
                site_description: Some("Un sitio de prueba.".to_owned()),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_root(dir.path(), None).unwrap();
        assert_eq!(config.base(), DEFAULT_SITE_URL);
        assert_eq!(config.posts_file, dir.path().join("data").join("posts.json"));
        assert_eq!(config.blog_dir, dir.path().join("blog"));
        assert_eq!(config.preview_dir, dir.path().join("assets").join("og"));
    }

    #[test]
    fn test_config_file_overrides_identity() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{"site_url": "https://blog.example.net/", "site_name": "Cuaderno"}"#,
        )
        .unwrap();

        let config = Config::from_root(dir.path(), None).unwrap();
        assert_eq!(config.base(), "https://blog.example.net");
        assert_eq!(config.site_name, "Cuaderno");
        // Unset fields keep their defaults.
        assert!(!config.site_description.is_empty());
    }

    #[test]
    fn test_explicit_config_file_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();
        assert!(Config::from_root(dir.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(Config::from_root(dir.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_url_helpers() {
        let config = test_config(Path::new("/tmp/site"));
        assert_eq!(config.blog_url(), "https://example.org/blog");
        assert_eq!(config.permalink("a"), "https://example.org/blog/a");
        assert_eq!(config.preview_url("a"), "https://example.org/assets/og/a.svg");
        assert_eq!(config.feed_url(), "https://example.org/feed.xml");
        assert_eq!(config.host(), "example.org");
    }
}
