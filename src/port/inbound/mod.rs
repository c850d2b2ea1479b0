//! Inbound ports (driving side): use-cases exposed to inbound adapters.

pub mod operator;
