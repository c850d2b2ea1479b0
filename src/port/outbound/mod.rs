//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe where generated datasets go.

pub mod sink;
