use std::collections::BTreeMap;

use crate::{
    errors::{UnresolvedEntry, ValidationError},
    factories::{BuildContext, DynFactory},
    registry::Registry,
    spec::ComponentSpec,
    types::Instance,
};

/// Outcome of one construction attempt.
///
/// Deferral is an ordinary value, not an unwound error; the loop branches on
/// the tag.
enum Outcome {
    Constructed(Instance),
    Deferred(ValidationError),
}

/// Result of driving a specification mapping to its fixed point
pub struct Resolution {
    /// Every successfully constructed entry
    pub registry: Registry,
    /// Passes the loop ran, including the terminal one
    pub passes: usize,
    /// Entries still unconstructed when progress stopped, with the reason
    /// from their last attempt. Empty on full resolution.
    pub unresolved: Vec<UnresolvedEntry>,
}

/// Retry the unresolved subset of `specs` until everything is constructed or
/// a pass makes no progress.
///
/// Successes commit into the registry immediately, so later entries of the
/// same pass already observe them. The pending list shrinks strictly or the
/// loop stops, so at most `specs.len()` passes run.
pub(crate) fn resolve(
    kinds: &BTreeMap<&'static str, Box<dyn DynFactory>>,
    mut registry: Registry,
    specs: Vec<(String, ComponentSpec)>,
) -> Resolution {
    let total = specs.len();
    let mut pending = specs;
    let mut passes = 0;

    loop {
        passes += 1;
        let attempted = pending.len();
        let mut deferred = Vec::new();

        for (name, spec) in pending {
            if registry.contains(&name) {
                tracing::warn!("'{name}' is already bound, dropping its specification");
                continue;
            }

            match attempt(kinds, &registry, &name, &spec) {
                Outcome::Constructed(instance) => {
                    tracing::debug!("constructed '{name}' ({kind})", kind = spec.kind);
                    registry
                        .bind(&name, instance)
                        .expect("pending names are unique and unbound");
                }
                Outcome::Deferred(reason) => {
                    tracing::debug!("deferred '{name}': {reason}");
                    deferred.push((name, spec, reason));
                }
            }
        }

        if deferred.is_empty() {
            tracing::debug!("resolved all {total} entries in {passes} passes");
            return Resolution {
                registry,
                passes,
                unresolved: Vec::new(),
            };
        }

        if deferred.len() == attempted {
            // Fixed point: nothing was constructed this pass, so another
            // pass cannot help. Leftovers are absent from the registry.
            let unresolved: Vec<UnresolvedEntry> = deferred
                .into_iter()
                .map(|(name, _, reason)| UnresolvedEntry { name, reason })
                .collect();

            let names: Vec<&str> = unresolved.iter().map(|entry| entry.name.as_str()).collect();
            tracing::warn!(
                "no progress after {passes} passes, dropping {count} entries: {names:?}",
                count = unresolved.len(),
            );

            return Resolution {
                registry,
                passes,
                unresolved,
            };
        }

        tracing::debug!(
            "pass {passes} complete [{resolved} of {total} resolved]",
            resolved = total - deferred.len(),
        );
        pending = deferred
            .into_iter()
            .map(|(name, spec, _)| (name, spec))
            .collect();
    }
}

/// One construction attempt for one entry, against the registry as it stands
fn attempt(
    kinds: &BTreeMap<&'static str, Box<dyn DynFactory>>,
    registry: &Registry,
    name: &str,
    spec: &ComponentSpec,
) -> Outcome {
    let Some(factory) = kinds.get(spec.kind.as_str()) else {
        return Outcome::Deferred(ValidationError::UnknownKind {
            kind: spec.kind.clone(),
        });
    };

    let ctx = BuildContext {
        name,
        args: &spec.args,
        registry,
    };

    match factory.construct(&ctx) {
        Ok(instance) => Outcome::Constructed(instance),
        Err(reason) => Outcome::Deferred(reason),
    }
}
