//! Source tree access
//!
//! Walking the Markdown source tree and mapping file names onto bundle paths.

pub mod path;
pub mod walker;
