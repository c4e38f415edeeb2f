//! Capabilities: the contracts a service implementation declares it satisfies

use std::borrow::Cow;
use std::fmt;

/// Name of a contract (interface) that a service implementation satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Capability declared by a Rust contract type.
    ///
    /// ```
    /// use wireup::{Capability, Contract, Converter};
    ///
    /// assert_eq!(
    ///     Capability::of::<dyn Converter>().as_str(),
    ///     <dyn Converter as Contract>::CONTRACT
    /// );
    /// ```
    pub fn of<C: Contract + ?Sized>() -> Self {
        Self::from_static(C::CONTRACT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Capability {
    fn from(s: &'static str) -> Self {
        Self::from_static(s)
    }
}

/// Static contract name for a trait that services can implement.
///
/// Implemented on `dyn Trait` so definitions can be declared with
/// `Definition::implements::<dyn Trait>()`.
pub trait Contract {
    const CONTRACT: &'static str;
}

/// The implementation behind a service, as seen by tag validation.
pub trait Implementation {
    /// Implementation class name, used in error messages
    fn class(&self) -> &str;

    /// Whether the implementation satisfies `capability`
    fn satisfies(&self, capability: &Capability) -> bool;
}
