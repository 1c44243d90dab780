use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// A boxed error type for convenience
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Anything bound into a registry must be shareable and free of borrows
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// A constructed component, stored type-erased
#[derive(Clone)]
pub struct Instance {
    pub info: TypeInfo,
    value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    pub fn new<T: Injectable>(value: T) -> Self {
        Instance {
            info: TypeInfo::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// Shared handle to the stored value
    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>, &'static str> {
        match Arc::downcast::<T>(self.value.clone()) {
            Ok(downcasted) => Ok(downcasted),
            Err(_) => Err(self.info.type_name),
        }
    }

    /// Clone of the stored value itself.
    ///
    /// For `Arc<dyn Capability>` payloads the clone shares the original
    /// allocation, which is what keeps injection identity-preserving.
    pub fn downcast_clone<T: Injectable + Clone>(&self) -> Result<T, &'static str> {
        match self.value.downcast_ref::<T>() {
            Some(value) => Ok(value.clone()),
            None => Err(self.info.type_name),
        }
    }
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}
