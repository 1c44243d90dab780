use thiserror::Error;

/// Rejection of one argument while constructing a component or reassigning
/// one of its fields.
///
/// During resolution this doubles as the deferral signal: the graph builder
/// catches it per entry and retries the entry on a later pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required constructor argument was not supplied
    #[error("argument '{argument}' is missing")]
    MissingArgument { argument: &'static str },

    /// The argument has the wrong shape for the field
    #[error("argument '{argument}' expected {expected}, got {found}")]
    TypeMismatch {
        argument: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The argument references a name with no bound instance (yet)
    #[error("argument '{argument}' references '{reference}', which is not bound")]
    UnresolvedReference {
        argument: &'static str,
        reference: String,
    },

    /// The reference resolved, but to an instance of the wrong capability
    #[error("argument '{argument}' references '{reference}', which holds '{found}', not '{expected}'")]
    WrongCapability {
        argument: &'static str,
        reference: String,
        expected: &'static str,
        found: &'static str,
    },

    /// No factory is registered under the specification's kind
    #[error("no factory registered for kind '{kind}'")]
    UnknownKind { kind: String },

    /// Domain rejection of an otherwise well-shaped value
    #[error("argument '{argument}' is invalid: {reason}")]
    Invalid {
        argument: &'static str,
        reason: &'static str,
    },
}

/// Errors when binding a name in a [Registry](crate::registry::Registry)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    /// Names are write-once; the original instance is retained
    #[error("'{name}' is already bound")]
    AlreadyBound { name: String },
}

/// Errors when looking up a finished [Registry](crate::registry::Registry)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequireError {
    /// Nothing is bound under the requested name
    #[error("no instance bound under '{name}'")]
    Missing { name: String },

    /// The bound instance is not of the requested type
    #[error("'{name}' holds '{actual}', not '{required}'")]
    DowncastFailed {
        name: String,
        required: &'static str,
        actual: &'static str,
    },
}

/// One entry left over at the fixed point, with the reason its final
/// construction attempt was deferred.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedEntry {
    pub name: String,
    pub reason: ValidationError,
}

/// Strict-mode resolution failure, from
/// [GraphBuilder::try_build](crate::builder::GraphBuilder::try_build)
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveError {
    /// Passes run before progress stopped
    pub passes: usize,
    pub entries: Vec<UnresolvedEntry>,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut display = Vec::new();
        display.push(format!(
            "resolution stalled after {} passes, {} entries left:",
            self.passes,
            self.entries.len()
        ));
        for entry in &self.entries {
            display.push(format!("- '{}': {}", entry.name, entry.reason));
        }
        f.write_str(&display.join("\n"))
    }
}

impl std::error::Error for ResolveError {}
