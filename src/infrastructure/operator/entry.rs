//! Concrete operator composed from infrastructure services.

/// Concrete operator implementation used by CLI handlers.
///
/// Stateless: every call resolves configuration from the request it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;

impl Operator {
    /// Create a new operator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
