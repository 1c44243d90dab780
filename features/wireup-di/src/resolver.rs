use std::any::type_name;

use crate::{
    errors::ValidationError,
    registry::Registry,
    spec::Value,
    types::{Injectable, Instance},
};

/// Outcome of one substitution step: either the live instance bound under
/// the referenced name, or the value untouched.
pub enum Substituted<'v, 'r> {
    Instance(&'r Instance),
    Literal(&'v Value),
}

/// Swap a reference for the instance currently bound under its name.
///
/// Everything else passes through unchanged - including a reference whose
/// name is not bound yet. "Not resolvable" is not an error at this layer; it
/// surfaces downstream when the component rejects the un-substituted value.
/// Substitution runs on every assignment, so a field reassigned later is
/// resolved against the registry's contents at that moment.
pub fn substitute<'v, 'r>(value: &'v Value, registry: &'r Registry) -> Substituted<'v, 'r> {
    if let Value::Reference(reference) = value {
        if let Some(instance) = registry.instance(&reference.name) {
            return Substituted::Instance(instance);
        }
    }
    Substituted::Literal(value)
}

/// Resolve an injectable argument to a `T` bound in the registry
pub fn injected<T: Injectable + Clone>(
    argument: &'static str,
    value: &Value,
    registry: &Registry,
) -> Result<T, ValidationError> {
    match substitute(value, registry) {
        Substituted::Instance(instance) => {
            // Substitution only fires for references, so the name is there
            let reference = value.as_reference().expect("substituted a non-reference");

            instance
                .downcast_clone()
                .map_err(|found| ValidationError::WrongCapability {
                    argument,
                    reference: reference.name.clone(),
                    expected: type_name::<T>(),
                    found,
                })
        }
        Substituted::Literal(Value::Reference(reference)) => {
            Err(ValidationError::UnresolvedReference {
                argument,
                reference: reference.name.clone(),
            })
        }
        Substituted::Literal(other) => Err(ValidationError::TypeMismatch {
            argument,
            expected: "a reference",
            found: other.type_name(),
        }),
    }
}

pub fn bool_arg(argument: &'static str, value: &Value) -> Result<bool, ValidationError> {
    value.as_bool().ok_or(ValidationError::TypeMismatch {
        argument,
        expected: "a boolean",
        found: value.type_name(),
    })
}

pub fn int_arg(argument: &'static str, value: &Value) -> Result<i64, ValidationError> {
    value.as_int().ok_or(ValidationError::TypeMismatch {
        argument,
        expected: "an integer",
        found: value.type_name(),
    })
}

/// Integer literals are accepted and widened
pub fn float_arg(argument: &'static str, value: &Value) -> Result<f64, ValidationError> {
    value.as_float().ok_or(ValidationError::TypeMismatch {
        argument,
        expected: "a number",
        found: value.type_name(),
    })
}

pub fn str_arg(argument: &'static str, value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::TypeMismatch {
            argument,
            expected: "a string",
            found: value.type_name(),
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{injected, substitute, Substituted};
    use crate::{
        errors::ValidationError, registry::Registry, spec::Value, types::Instance,
    };

    fn registry_with(name: &str, instance: Instance) -> Registry {
        let mut registry = Registry::new();
        registry.bind(name, instance).unwrap();
        registry
    }

    #[test]
    fn literals_pass_through() {
        let registry = Registry::new();
        let value = Value::from("just a string");

        assert!(matches!(
            substitute(&value, &registry),
            Substituted::Literal(Value::Str(_)),
        ));
    }

    #[test]
    fn unbound_references_pass_through() {
        let registry = Registry::new();
        let value = Value::reference("not_yet");

        assert!(matches!(
            substitute(&value, &registry),
            Substituted::Literal(Value::Reference(_)),
        ));
    }

    #[test]
    fn bound_references_substitute_the_instance() {
        let registry = registry_with("answer", Instance::new(Arc::new(42_i64)));
        let value = Value::reference("answer");

        let resolved = injected::<Arc<i64>>("dep", &value, &registry).unwrap();
        assert_eq!(*resolved, 42);
    }

    #[test]
    fn substituted_handles_share_identity() {
        let payload = Arc::new(42_i64);
        let registry = registry_with("answer", Instance::new(payload.clone()));

        let resolved = injected::<Arc<i64>>("dep", &Value::reference("answer"), &registry).unwrap();
        assert!(Arc::ptr_eq(&resolved, &payload));
    }

    #[test]
    fn wrong_payload_type_is_rejected() {
        let registry = registry_with("answer", Instance::new(Arc::new(42_i64)));

        let error =
            injected::<Arc<String>>("dep", &Value::reference("answer"), &registry).unwrap_err();
        assert!(matches!(error, ValidationError::WrongCapability { .. }));
    }

    #[test]
    fn unresolved_reference_is_reported_by_name() {
        let registry = Registry::new();

        let error = injected::<Arc<i64>>("dep", &Value::reference("ghost"), &registry).unwrap_err();
        assert_eq!(
            error,
            ValidationError::UnresolvedReference {
                argument: "dep",
                reference: "ghost".to_owned(),
            },
        );
    }

    #[test]
    fn scalar_arguments_reject_wrong_shapes() {
        assert!(super::float_arg("temp", &Value::from("hot")).is_err());
        assert_eq!(super::float_arg("temp", &Value::Int(3)).unwrap(), 3.0);
        assert!(super::str_arg("conditions", &Value::Float(1.0)).is_err());
        assert!(super::bool_arg("enabled", &Value::Int(1)).is_err());
        assert_eq!(super::int_arg("retries", &Value::Int(4)).unwrap(), 4);
    }
}
