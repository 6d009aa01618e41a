//! HTML page rendering: the shared document shell, the blog index page, and
//! the per-post detail pages. Renderers here produce complete documents as
//! strings; [`crate::build`] owns writing them to disk.
//!
//! Escaping contract: every human-readable field ([`Post`] title, summary,
//! tags, plus the configured site name and description) passes through
//! [`escape_markup`] with [`Escape::Html`] exactly once, at the point it is
//! embedded. URLs are embedded verbatim: they are built from the validated
//! site base URL and post ids, which arrive pre-slugged from the data-entry
//! process. That trust boundary lives in the data, not in this module.

use crate::config::{Config, BLOG_TITLE};
use crate::store::Post;
use crate::text::{escape_markup, format_date_localized, Escape};

/// Head metadata for one document, consumed by [`render_shell`].
struct PageMeta {
    /// Raw (unescaped) document title.
    title: String,

    /// Raw (unescaped) document description.
    description: String,

    /// Canonical URL of this document.
    canonical: String,

    /// Absolute URL of the 1200×630 social-preview image.
    og_image: String,
}

/// Renders the blog index: one summary card per post, in store order.
/// Cards show every tag a post carries; only the preview-image renderer
/// caps the tag row.
pub fn render_index(config: &Config, posts: &[Post]) -> String {
    let cards: Vec<String> = posts
        .iter()
        .map(|post| {
            format!(
                r#"        <article class="post-card fade-in">
          <p class="post-card__date">{date}</p>
          <h3 class="post-card__title">
            <a href="/blog/{id}" class="post-card__link">{title}</a>
          </h3>
          <p class="post-card__summary">{summary}</p>
          <div class="post-card__tags">
            {tags}
          </div>
        </article>"#,
                date = format_date_localized(post.date),
                id = post.id,
                title = escape_markup(&post.title, Escape::Html),
                summary = escape_markup(&post.summary, Escape::Html),
                tags = render_tag_chips(&post.tags),
            )
        })
        .collect();

    let body = format!(
        r#"  <main class="blog-page">
    <section class="section blog-header">
      <div class="container">
        <span class="section-label fade-in">{blog_title}</span>
        <h1 class="section-title fade-in">Historia real, sesión por sesión.</h1>
        <p class="section-intro fade-in">
          Esto no es marketing: es un registro de decisiones, fricción y resultados. Cada entrada marca una sesión concreta del proceso.
        </p>
        <div class="grid grid--2">
{cards}
        </div>
      </div>
    </section>
  </main>"#,
        blog_title = BLOG_TITLE,
        cards = cards.join("\n"),
    );

    render_shell(
        config,
        &PageMeta {
            title: format!("{} — {}", BLOG_TITLE, config.site_name),
            description: config.site_description.clone(),
            canonical: config.blog_url(),
            og_image: format!("{}/assets/og-cover.svg", config.base()),
        },
        &body,
    )
}

/// Renders one post's detail page: breadcrumb trail, dated header with a
/// machine-readable `<time>` element, tag chips, the summary as body text,
/// and a back link.
pub fn render_post(config: &Config, post: &Post) -> String {
    let title = escape_markup(&post.title, Escape::Html);
    let body = format!(
        r#"  <main class="blog-page">
    <article class="section post-detail">
      <div class="container post-detail__container">
        <nav class="breadcrumb fade-in" aria-label="Breadcrumb">
          <a href="/">Inicio</a>
          <span aria-hidden="true">/</span>
          <a href="/blog">Diario</a>
          <span aria-hidden="true">/</span>
          <span aria-current="page">{title}</span>
        </nav>

        <header class="post-detail__header fade-in">
          <time class="post-card__date" datetime="{iso_date}">{date}</time>
          <h1 class="post-detail__title">{title}</h1>
          <div class="post-card__tags">
            {tags}
          </div>
        </header>

        <div class="post-detail__body fade-in">
          <p>{summary}</p>
        </div>

        <footer class="post-detail__footer fade-in">
          <a href="/blog" class="btn btn--ghost">&larr; Volver al Diario</a>
        </footer>
      </div>
    </article>
  </main>"#,
        title = title,
        iso_date = post.iso_date(),
        date = format_date_localized(post.date),
        tags = render_tag_chips(&post.tags),
        summary = escape_markup(&post.summary, Escape::Html),
    );

    render_shell(
        config,
        &PageMeta {
            title: format!("{} — {}", post.title, config.site_name),
            description: post.summary.clone(),
            canonical: config.permalink(&post.id),
            og_image: config.preview_url(&post.id),
        },
        &body,
    )
}

fn render_tag_chips(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| {
            format!(
                r#"<span class="tag">#{}</span>"#,
                escape_markup(tag, Escape::Html)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Wraps page-specific body content in the shared document shell: head
/// metadata (canonical, Open Graph, Twitter card, feed discovery), the fixed
/// navigation bar, the footer, and the deferred client script.
fn render_shell(config: &Config, meta: &PageMeta, body: &str) -> String {
    let title = escape_markup(&meta.title, Escape::Html);
    let description = escape_markup(&meta.description, Escape::Html);
    let site_name = escape_markup(&config.site_name, Escape::Html);

    format!(
        r##"<!DOCTYPE html>
<html lang="es" dir="ltr">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">

  <title>{title}</title>
  <meta name="description" content="{description}">
  <meta name="robots" content="index, follow">
  <link rel="canonical" href="{canonical}">
  <meta name="theme-color" content="#6366f1">
  <meta name="author" content="{site_name}">

  <!-- Open Graph -->
  <meta property="og:type" content="article">
  <meta property="og:title" content="{title}">
  <meta property="og:description" content="{description}">
  <meta property="og:url" content="{canonical}">
  <meta property="og:image" content="{og_image}">
  <meta property="og:image:width" content="1200">
  <meta property="og:image:height" content="630">
  <meta property="og:locale" content="es_ES">
  <meta property="og:site_name" content="{site_name}">

  <!-- Twitter Card -->
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:title" content="{title}">
  <meta name="twitter:description" content="{description}">
  <meta name="twitter:image" content="{og_image}">

  <!-- Favicon & Manifest -->
  <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🪶</text></svg>">
  <link rel="manifest" href="/site.webmanifest">
  <link rel="alternate" type="application/rss+xml" title="{site_name} — {blog_title}" href="{feed_url}">

  <!-- Styles -->
  <link rel="stylesheet" href="/styles/base.css">
  <link rel="stylesheet" href="/styles/layout.css">
  <link rel="stylesheet" href="/styles/components.css">

  <!-- Fonts -->
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500;700&display=swap">
</head>
<body>

  <!-- Nav -->
  <nav class="nav" id="nav" role="navigation" aria-label="Navegación principal">
    <div class="container nav__inner">
      <a href="/" class="nav__logo" aria-label="{site_name} inicio">{site_name}</a>
      <div class="nav__links" id="navLinks" role="menubar">
        <a href="/#metodo" class="nav__link" role="menuitem">Método</a>
        <a href="/#stack" class="nav__link" role="menuitem">Stack</a>
        <a href="/blog" class="nav__link nav__link--active" role="menuitem">Diario</a>
        <a href="/#contacto" class="nav__link" role="menuitem">Contacto</a>
      </div>
      <button class="nav__toggle" id="navToggle" aria-label="Abrir menú" aria-expanded="false">
        &#9776;
      </button>
    </div>
    <div class="nav__overlay" id="navOverlay"></div>
  </nav>

{body}

  <!-- Footer -->
  <footer class="footer">
    <div class="container footer__inner">
      <p class="footer__text">
        {site_name} &mdash; {description_footer}
      </p>
      <a href="/feed.xml" class="footer__rss" aria-label="RSS Feed" title="RSS Feed">
        <svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
          <circle cx="6.18" cy="17.82" r="2.18"/>
          <path d="M4 4.44v2.83c7.03 0 12.73 5.7 12.73 12.73h2.83c0-8.59-6.97-15.56-15.56-15.56zm0 5.66v2.83c3.9 0 7.07 3.17 7.07 7.07h2.83c0-5.47-4.43-9.9-9.9-9.9z"/>
        </svg>
      </a>
    </div>
  </footer>

  <script src="/scripts/main.js" defer></script>
</body>
</html>"##,
        title = title,
        description = description,
        canonical = meta.canonical,
        og_image = meta.og_image,
        site_name = site_name,
        blog_title = BLOG_TITLE,
        feed_url = config.feed_url(),
        body = body,
        description_footer = escape_markup(&config.site_description, Escape::Html),
    )
}
