//! Pagebundle: Markdown Tree to Page Bundles
//!
//! Restructures a tree of Markdown files into the layout page-bundle static
//! site generators expect, where every content page lives in its own
//! directory as `_index.md`.

pub mod bundle;
pub mod cli;
pub mod error;
pub mod logging;
pub mod tree;

pub use bundle::{restructure, RestructureReport, Restructurer};
pub use error::BundleError;
