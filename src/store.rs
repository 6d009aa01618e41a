//! The post store: the one source of truth for everything the pipeline
//! emits. A store is loaded once per build from a JSON array of post
//! objects, validated into typed [`Post`] records, and never mutated
//! afterwards. Document order is authoritative; nothing here re-sorts.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// One blog entry. Field contracts:
///
/// * `id` is a URL-safe slug supplied by the data-entry process; it is used
///   verbatim as a filename stem and permalink segment and is trusted as
///   such. Uniqueness is not checked; a duplicate id overwrites the earlier
///   post's output files.
/// * `date` is validated at load time, so downstream formatting never fails.
#[derive(Clone, Debug)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

impl Post {
    /// The date in its original `YYYY-MM-DD` form, as used by the sitemap's
    /// `lastmod` and the detail page's `datetime` attribute.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// The wire shape of a post. Dates arrive as strings and are validated into
/// [`NaiveDate`] when the store is loaded, so a bad date names the offending
/// post instead of surfacing later as a formatting failure.
#[derive(Deserialize)]
struct RawPost {
    id: String,
    title: String,
    summary: String,
    date: String,

    #[serde(default)]
    tags: Vec<String>,
}

/// Parses a JSON document into an ordered store of [`Post`]s.
///
/// Fail-fast: if the document is not valid JSON, is not an array of post
/// objects, or any post carries an unparseable date, the whole load fails
/// and no posts are returned. Malformed posts are never skipped.
pub fn load_store(json: &str) -> Result<Vec<Post>> {
    let raw: Vec<RawPost> = serde_json::from_str(json)?;
    raw.into_iter().map(validate).collect()
}

fn validate(raw: RawPost) -> Result<Post> {
    let date =
        NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d").map_err(|err| Error::Date {
            id: raw.id.clone(),
            value: raw.date,
            err,
        })?;
    Ok(Post {
        id: raw.id,
        title: raw.title,
        summary: raw.summary,
        date,
        tags: raw.tags,
    })
}

/// The result of loading a post store.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a malformed post store document.
#[derive(Debug)]
pub enum Error {
    /// The document is not valid JSON or does not match the post schema
    /// (wrong shape, missing required field, wrong field type).
    Json(serde_json::Error),

    /// A post's `date` field is not a `YYYY-MM-DD` calendar date.
    Date {
        id: String,
        value: String,
        err: chrono::ParseError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "Parsing post store: {}", err),
            Error::Date { id, value, err } => {
                write!(f, "Post '{}': invalid date '{}': {}", id, value, err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Date { err, .. } => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    /// Converts [`serde_json::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator when parsing the store document.
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_store_basic() {
        let posts = load_store(
            r#"[
                {"id": "a", "title": "Hola", "summary": "Primera", "date": "2025-03-09", "tags": ["x", "y"]},
                {"id": "b", "title": "Adios", "summary": "Segunda", "date": "2025-02-01"}
            ]"#,
        )
        .unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "a");
        assert_eq!(posts[0].tags, vec!["x", "y"]);
        assert_eq!(posts[0].iso_date(), "2025-03-09");
        // Missing tags default to empty.
        assert!(posts[1].tags.is_empty());
        // Store order is preserved, not re-sorted by date.
        assert_eq!(posts[1].id, "b");
    }

    #[test]
    fn test_load_store_empty_array() {
        assert!(load_store("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_store_invalid_json() {
        assert!(matches!(load_store("{not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_store_not_an_array() {
        assert!(matches!(
            load_store(r#"{"id": "a"}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_load_store_missing_required_field() {
        let result = load_store(r#"[{"id": "a", "date": "2025-03-09"}]"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_store_bad_date_names_post() {
        let result = load_store(
            r#"[{"id": "a", "title": "t", "summary": "s", "date": "marzo 9"}]"#,
        );
        match result {
            Err(Error::Date { id, value, .. }) => {
                assert_eq!(id, "a");
                assert_eq!(value, "marzo 9");
            }
            other => panic!("expected date error, got {:?}", other.map(|p| p.len())),
        }
    }

    #[test]
    fn test_load_store_one_bad_post_fails_whole_load() {
        let result = load_store(
            r#"[
                {"id": "a", "title": "t", "summary": "s", "date": "2025-03-09"},
                {"id": "b", "title": "t", "summary": "s", "date": "not-a-date"}
            ]"#,
        );
        assert!(result.is_err());
    }
}
