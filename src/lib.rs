//! The library code for the `bitacora` static blog builder. The
//! architecture breaks down into two distinct steps:
//!
//! 1. Loading the ordered post store from a JSON document ([`crate::store`])
//! 2. Rendering and writing the output artifacts ([`crate::build`])
//!
//! The second step fans out over five artifact families that share nothing
//! but the store and the text utilities ([`crate::text`]): the blog index
//! and per-post detail pages ([`crate::page`]), one social-preview SVG per
//! post ([`crate::preview`]), the RSS feed ([`crate::feed`]), and the
//! sitemap ([`crate::sitemap`]). Generation is one-shot and sequential;
//! given the same store, config, and build date, every byte of output is
//! deterministic.

pub mod build;
pub mod cli;
pub mod config;
pub mod feed;
pub mod logger;
pub mod page;
pub mod preview;
pub mod sitemap;
pub mod store;
pub mod text;
