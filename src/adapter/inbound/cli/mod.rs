//! CLI module graph.

pub mod catalog;
pub mod command;
pub mod config;
pub mod generate;
pub mod operator;
pub mod output;
pub mod paths;
