//! Wireup DI turns an unordered mapping of named component specifications
//! into a fully wired object graph.
//!
//! A specification names a factory kind and a set of constructor arguments;
//! any argument may be a reference to another named entry instead of a
//! literal. The graph builder retries the unresolved subset pass after pass,
//! committing every successful construction into the [Registry] immediately,
//! until everything is resolved or a pass makes no progress. Nobody has to
//! sort their specifications topologically, and every reference resolves to
//! the one shared instance bound under that name.
//!
//! The crate is split into the following parts:
//!
//! 1. [spec] - the declarative input model: values, references, blueprints
//! 2. [registry] - the per-run, write-once store of constructed instances
//! 3. [resolver] - reference substitution against the registry
//! 4. [factories] - the seam between specifications and concrete components
//! 5. [builder] + [initiator] - the fixed-point resolution loop
//! 6. [errors] - validation, binding, lookup and resolution errors

pub mod builder;
pub mod errors;
pub mod factories;
pub mod initiator;
pub mod registry;
pub mod resolver;
pub mod spec;
pub mod types;

pub use builder::GraphBuilder;
pub use errors::{BindError, RequireError, ResolveError, UnresolvedEntry, ValidationError};
pub use factories::{BuildContext, ComponentFactory, DynFactory};
pub use initiator::Resolution;
pub use registry::Registry;
pub use spec::{Arguments, ComponentSpec, Reference, Value};
pub use types::{DynError, Injectable, Instance, TypeInfo};
