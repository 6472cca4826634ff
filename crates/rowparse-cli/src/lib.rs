//! Library components of the `rowparse` command-line tool.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod render;
