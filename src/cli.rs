//! CLI domain: parse, route, and output only.
//! No transformation logic; the route hands off to the bundle restructurer.

mod output;
mod parse;
mod route;

pub use output::{format_summary, map_error};
pub use parse::Cli;
pub use route::{logging_config, RunContext};
