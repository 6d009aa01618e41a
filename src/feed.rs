//! RSS 2.0 feed rendering.
//!
//! The document is assembled by hand so the wire format stays exact: noon-UTC
//! `pubDate`s, permalink guids, and the `atom:link rel="self"` element feed
//! validators ask for. Items appear in store order; the store's caller owns
//! ordering (newest-first by convention), not this module.

use crate::config::{Config, BLOG_TITLE};
use crate::store::Post;
use crate::text::{escape_markup, to_rfc822, Escape};
use chrono::NaiveDate;
use std::fmt::Write;

/// Feed language, matching the site's single fixed locale.
const LANGUAGE: &str = "es";

/// Renders the feed document.
///
/// `today` is the build-time clock, used only when the store is empty: the
/// channel's `lastBuildDate` is the first post's date when there is one, and
/// falls back to `today` for an empty store rather than failing.
pub fn render_feed(config: &Config, posts: &[Post], today: NaiveDate) -> String {
    let last_build = posts.first().map(|post| post.date).unwrap_or(today);

    let mut items = String::new();
    for post in posts {
        let permalink = config.permalink(&post.id);
        let _ = writeln!(items, "    <item>");
        let _ = writeln!(
            items,
            "      <title>{}</title>",
            escape_markup(&post.title, Escape::Xml)
        );
        let _ = writeln!(items, "      <link>{}</link>", permalink);
        let _ = writeln!(
            items,
            r#"      <guid isPermaLink="true">{}</guid>"#,
            permalink
        );
        let _ = writeln!(
            items,
            "      <description>{}</description>",
            escape_markup(&post.summary, Escape::Xml)
        );
        let _ = writeln!(items, "      <pubDate>{}</pubDate>", to_rfc822(post.date));
        for tag in &post.tags {
            let _ = writeln!(
                items,
                "      <category>{}</category>",
                escape_markup(tag, Escape::Xml)
            );
        }
        let _ = writeln!(items, "    </item>");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>{site_name} — {blog_title}</title>
    <link>{blog_url}</link>
    <description>{description}</description>
    <language>{language}</language>
    <lastBuildDate>{last_build}</lastBuildDate>
    <atom:link href="{feed_url}" rel="self" type="application/rss+xml"/>
{items}  </channel>
</rss>"#,
        site_name = escape_markup(&config.site_name, Escape::Xml),
        blog_title = BLOG_TITLE,
        blog_url = config.blog_url(),
        description = escape_markup(&config.site_description, Escape::Xml),
        language = LANGUAGE,
        last_build = to_rfc822(last_build),
        feed_url = config.feed_url(),
        items = items,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::test::test_config;
    use std::path::Path;

    fn date(iso: &str) -> NaiveDate {
        NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
    }

    fn make_post(id: &str, title: &str, summary: &str, iso: &str, tags: &[&str]) -> Post {
        Post {
            id: id.to_owned(),
            title: title.to_owned(),
            summary: summary.to_owned(),
            date: date(iso),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn config() -> Config {
        test_config(Path::new("/tmp/site"))
    }

    #[test]
    fn test_feed_item_wire_format() {
        let posts = vec![make_post(
            "a",
            "Hello & Goodbye",
            "A <test>",
            "2025-03-09",
            &["x", "y"],
        )];
        let xml = render_feed(&config(), &posts, date("2025-06-01"));

        assert!(xml.contains("<title>Hello &amp; Goodbye</title>"));
        assert!(xml.contains("<link>https://example.org/blog/a</link>"));
        assert!(xml.contains(r#"<guid isPermaLink="true">https://example.org/blog/a</guid>"#));
        assert!(xml.contains("<description>A &lt;test&gt;</description>"));
        assert!(xml.contains("<pubDate>Sun, 09 Mar 2025 12:00:00 GMT</pubDate>"));
        assert!(xml.contains("<category>x</category>"));
        assert!(xml.contains("<category>y</category>"));
    }

    #[test]
    fn test_feed_channel_metadata() {
        let xml = render_feed(&config(), &[], date("2025-03-09"));
        assert!(xml.contains(r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">"#));
        assert!(xml.contains("<title>Ejemplo — Diario de Campo</title>"));
        assert!(xml.contains("<link>https://example.org/blog</link>"));
        assert!(xml.contains("<language>es</language>"));
        assert!(xml.contains(
            r#"<atom:link href="https://example.org/feed.xml" rel="self" type="application/rss+xml"/>"#
        ));
    }

    #[test]
    fn test_last_build_date_from_first_post() {
        let posts = vec![
            make_post("b", "t", "s", "2025-03-09", &[]),
            make_post("a", "t", "s", "2024-01-01", &[]),
        ];
        let xml = render_feed(&config(), &posts, date("2025-06-01"));
        assert!(xml.contains("<lastBuildDate>Sun, 09 Mar 2025 12:00:00 GMT</lastBuildDate>"));
    }

    #[test]
    fn test_empty_store_falls_back_to_today() {
        let xml = render_feed(&config(), &[], date("2025-06-01"));
        assert!(xml.contains("<lastBuildDate>Sun, 01 Jun 2025 12:00:00 GMT</lastBuildDate>"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_item_count_matches_store() {
        let posts = vec![
            make_post("a", "t", "s", "2025-03-09", &[]),
            make_post("b", "t", "s", "2025-02-01", &[]),
            make_post("c", "t", "s", "2025-01-01", &[]),
        ];
        let xml = render_feed(&config(), &posts, date("2025-06-01"));
        assert_eq!(xml.matches("<item>").count(), 3);
        assert_eq!(xml.matches("</item>").count(), 3);
    }

    #[test]
    fn test_items_in_store_order() {
        let posts = vec![
            make_post("first", "t", "s", "2025-01-01", &[]),
            make_post("second", "t", "s", "2025-03-09", &[]),
        ];
        let xml = render_feed(&config(), &posts, date("2025-06-01"));
        let a = xml.find("/blog/first").unwrap();
        let b = xml.find("/blog/second").unwrap();
        assert!(a < b);
    }
}
