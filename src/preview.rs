//! Social-preview image rendering: one self-contained 1200×630 SVG per
//! post, referenced by the page renderer's Open Graph metadata.
//!
//! The layout works entirely in character-count approximations (title wrap
//! budget, chip widths); that heuristic is part of the image's contract.
//! Text lands in an XML document here, so everything goes through
//! [`escape_markup`] with [`Escape::Xml`] — the apostrophe rule is the one
//! place this differs from the HTML renderers, and the two paths stay
//! separate on purpose.

use crate::config::{Config, BLOG_TITLE};
use crate::store::Post;
use crate::text::{escape_markup, format_date_localized, wrap_text, Escape};
use std::fmt::Write;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 630;

/// Spacing of the faint background grid.
const GRID_STEP: u32 = 60;

/// Left margin shared by every text block.
const MARGIN_X: u32 = 100;

/// Character budget for one title line at the 48px title size.
const TITLE_WRAP_CHARS: usize = 28;

/// Baseline of the first title line.
const TITLE_START_Y: u32 = 280;

/// Vertical distance between title lines.
const TITLE_LINE_HEIGHT: u32 = 60;

/// Gap between the last title line and the tag chip row.
const CHIP_ROW_GAP: u32 = 30;

/// Approximate advance width per label character, in pixels.
const CHIP_CHAR_WIDTH: usize = 9;

/// Horizontal padding added to every chip.
const CHIP_PADDING: usize = 30;

/// Chip height and corner radius.
const CHIP_HEIGHT: u32 = 28;

/// Gutter between consecutive chips.
const CHIP_GUTTER: usize = 12;

/// The chip row shows at most this many tags. The index page renders every
/// tag; only the image caps the row.
const MAX_CHIPS: usize = 3;

/// Renders a post's preview image as an SVG document.
pub fn render_preview(config: &Config, post: &Post) -> String {
    // Escape before wrapping, so the wrap budget sees the text exactly as it
    // will be embedded.
    let title = escape_markup(&post.title, Escape::Xml);
    let title_lines = wrap_text(&title, TITLE_WRAP_CHARS);

    let mut title_svg = String::new();
    for (i, line) in title_lines.iter().enumerate() {
        let y = TITLE_START_Y + i as u32 * TITLE_LINE_HEIGHT;
        let _ = writeln!(
            title_svg,
            r##"  <text x="{MARGIN_X}" y="{y}" font-family="system-ui, -apple-system, 'Segoe UI', sans-serif" font-size="48" font-weight="700" fill="#f0f0f5" letter-spacing="-1">{line}</text>"##,
        );
    }

    let chip_row_y = TITLE_START_Y + title_lines.len() as u32 * TITLE_LINE_HEIGHT + CHIP_ROW_GAP;
    let chips_svg = render_chip_row(&post.tags, chip_row_y);

    let kicker = escape_markup(
        &format!(
            "{} — {}",
            BLOG_TITLE.to_uppercase(),
            format_date_localized(post.date).to_uppercase()
        ),
        Escape::Xml,
    );

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#0a0a0f"/>
      <stop offset="50%" stop-color="#111118"/>
      <stop offset="100%" stop-color="#0d0d14"/>
    </linearGradient>
    <linearGradient id="accent" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="#6366f1"/>
      <stop offset="100%" stop-color="#818cf8"/>
    </linearGradient>
  </defs>
  <rect width="{WIDTH}" height="{HEIGHT}" fill="url(#bg)"/>
{grid}
  <rect x="{MARGIN_X}" y="160" width="60" height="3" rx="1.5" fill="url(#accent)"/>
  <text x="{MARGIN_X}" y="210" font-family="'SF Mono', 'Fira Code', monospace" font-size="14" fill="#6366f1" opacity="0.8">{kicker}</text>
{title_svg}{chips_svg}  <text x="{MARGIN_X}" y="560" font-family="system-ui, -apple-system, sans-serif" font-size="20" font-weight="700" fill="#f0f0f5" opacity="0.6">{site_name}</text>
  <text x="{MARGIN_X}" y="585" font-family="'SF Mono', 'Fira Code', monospace" font-size="14" fill="#4f46e5" opacity="0.7">{host}</text>
  <rect x="0" y="625" width="{WIDTH}" height="5" fill="url(#accent)" opacity="0.6"/>
</svg>"##,
        grid = render_grid(),
        site_name = escape_markup(&config.site_name, Escape::Xml),
        host = config.host(),
    )
}

/// The faint decorative grid behind everything else.
fn render_grid() -> String {
    let mut g = String::from(r##"  <g opacity="0.04" stroke="#818cf8" stroke-width="0.5">"##);
    g.push('\n');
    for x in (0..WIDTH).step_by(GRID_STEP as usize) {
        let _ = writeln!(g, r#"    <line x1="{x}" y1="0" x2="{x}" y2="{HEIGHT}"/>"#);
    }
    for y in (GRID_STEP..HEIGHT - GRID_STEP).step_by(GRID_STEP as usize) {
        let _ = writeln!(g, r#"    <line x1="0" y1="{y}" x2="{WIDTH}" y2="{y}"/>"#);
    }
    g.push_str("  </g>");
    g
}

/// Lays out up to [`MAX_CHIPS`] tag chips left to right. A chip's width
/// comes from its label's character count, measured on the raw label; the
/// label is escaped only when embedded.
fn render_chip_row(tags: &[String], row_y: u32) -> String {
    let mut svg = String::new();
    let mut x = MARGIN_X as usize;

    for tag in tags.iter().take(MAX_CHIPS) {
        let label = format!("#{}", tag);
        let width = label.chars().count() * CHIP_CHAR_WIDTH + CHIP_PADDING;
        let _ = writeln!(
            svg,
            r##"  <rect x="{x}" y="{row_y}" width="{width}" height="{CHIP_HEIGHT}" rx="14" fill="#6366f1" fill-opacity="0.15" stroke="#6366f1" stroke-opacity="0.3" stroke-width="1"/>"##,
        );
        let _ = writeln!(
            svg,
            r##"  <text x="{cx}" y="{cy}" font-family="system-ui, sans-serif" font-size="12" fill="#a5b4fc" text-anchor="middle">{label}</text>"##,
            cx = x + width / 2,
            cy = row_y + 19,
            label = escape_markup(&label, Escape::Xml),
        );
        x += width + CHIP_GUTTER;
    }

    svg
}
