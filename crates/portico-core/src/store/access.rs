use std::collections::BTreeSet;

use crate::signal::Signal;

/// Access codes and roles of the current user, consumed by the access directive
#[derive(Debug, Clone, Default)]
pub struct AccessStore {
    codes: Signal<BTreeSet<String>>,
    roles: Signal<BTreeSet<String>>,
}

impl AccessStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codes(&self) -> Signal<BTreeSet<String>> {
        self.codes.clone()
    }

    pub fn roles(&self) -> Signal<BTreeSet<String>> {
        self.roles.clone()
    }

    pub fn set_codes<I, S>(&self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.codes.set(codes.into_iter().map(Into::into).collect());
    }

    pub fn set_roles<I, S>(&self, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.set(roles.into_iter().map(Into::into).collect());
    }

    /// An empty requirement grants nothing.
    pub fn has_any_code(&self, required: &[String]) -> bool {
        self.codes.with(|codes| required.iter().any(|c| codes.contains(c)))
    }

    pub fn has_any_role(&self, required: &[String]) -> bool {
        self.roles.with(|roles| required.iter().any(|r| roles.contains(r)))
    }
}
