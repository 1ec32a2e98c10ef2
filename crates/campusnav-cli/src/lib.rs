//! campusnav CLI library.
//!
//! Subcommand handlers, text/JSON rendering and terminal styling for the
//! `campusnav` binary.

pub mod commands;
pub mod output;
pub mod terminal;
