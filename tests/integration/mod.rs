//! Integration tests for the page-bundle restructurer

mod cli_binary;
mod test_utils;
