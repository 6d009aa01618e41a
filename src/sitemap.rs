//! Sitemap generation: a sitemaps.org urlset listing the site root, the blog
//! index, and every post, with a fixed priority/change-frequency policy.
//! `loc` values are entity-escaped as the protocol requires, even though the
//! URLs here are built from trusted parts.

use crate::config::Config;
use crate::store::Post;
use crate::text::{escape_markup, Escape};
use chrono::NaiveDate;
use std::fmt::Write;

/// XML namespace for the urlset element.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Priority/change-frequency policy for one urlset entry.
struct Policy {
    changefreq: &'static str,
    priority: &'static str,
}

/// Site root: the most important URL, revised rarely.
const ROOT_POLICY: Policy = Policy {
    changefreq: "monthly",
    priority: "1.0",
};

/// Blog index: changes whenever a post is published.
const INDEX_POLICY: Policy = Policy {
    changefreq: "weekly",
    priority: "0.8",
};

/// Individual posts: mostly immutable after publication.
const POST_POLICY: Policy = Policy {
    changefreq: "monthly",
    priority: "0.7",
};

/// Renders the sitemap document. The two fixed entries use `today` (the
/// build-time clock) as their `lastmod`; post entries use the post's own
/// date in its raw ISO form.
pub fn render_sitemap(config: &Config, posts: &[Post], today: NaiveDate) -> String {
    let today = today.format("%Y-%m-%d").to_string();

    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    let _ = writeln!(xml, r#"<urlset xmlns="{}">"#, SITEMAP_NS);

    push_url(&mut xml, &format!("{}/", config.base()), &today, &ROOT_POLICY);
    push_url(&mut xml, &config.blog_url(), &today, &INDEX_POLICY);
    for post in posts {
        push_url(
            &mut xml,
            &config.permalink(&post.id),
            &post.iso_date(),
            &POST_POLICY,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, policy: &Policy) {
    xml.push_str("  <url>\n");
    let _ = writeln!(xml, "    <loc>{}</loc>", escape_markup(loc, Escape::Xml));
    let _ = writeln!(xml, "    <lastmod>{}</lastmod>", lastmod);
    let _ = writeln!(xml, "    <changefreq>{}</changefreq>", policy.changefreq);
    let _ = writeln!(xml, "    <priority>{}</priority>", policy.priority);
    xml.push_str("  </url>\n");
}
