//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture:
//!
//! ```text
//!   ┌─────────┐      ┌──────────────────────┐      ┌────────────┐
//!   │   CLI   │ ───> │ Application + Domain │ ───> │ Filesystem │
//!   │ Adapter │      │      (generator)     │      │    Sink    │
//!   └─────────┘      └──────────────────────┘      └────────────┘
//!    inbound::operator                         outbound::sink
//! ```

pub mod inbound;
pub mod outbound;
