// Path: crates/keeper/src/namespace.rs
//! The namespace keeper: `ns:<name>` -> `Namespace`.

use crate::generic::Keeper;
use ticketchain_state::{HistoricalStateAccess, StateAccess};
use ticketchain_types::entities::Namespace;
use ticketchain_types::error::StateError;
use ticketchain_types::keys::NAMESPACE_KEY_PREFIX;

/// CRUD over `Namespace` entities, keyed by namespace name.
pub struct NamespaceKeeper {
    inner: Keeper<Namespace>,
}

impl Default for NamespaceKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceKeeper {
    /// Builds the namespace keeper over its well-known prefix.
    pub fn new() -> Self {
        Self { inner: Keeper::new(NAMESPACE_KEY_PREFIX) }
    }

    /// Reads the namespace at `name`, or `Namespace::default()` if absent.
    pub fn get<S: StateAccess>(&self, state: &S, name: &str) -> Result<Namespace, StateError> {
        self.inner.get(state, name.as_bytes())
    }

    /// Reads the namespace at `name` as it stood at `height`.
    pub fn get_at<S: HistoricalStateAccess>(
        &self,
        state: &S,
        name: &str,
        height: u64,
    ) -> Result<Namespace, StateError> {
        self.inner.get_at(state, name.as_bytes(), height)
    }

    /// Writes `ns` back under `name`.
    pub fn update<S: StateAccess>(
        &self,
        state: &mut S,
        name: &str,
        ns: &Namespace,
    ) -> Result<(), StateError> {
        self.inner.update(state, name.as_bytes(), ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_state::IavlTree;
    use ticketchain_types::ids::Address;

    #[test]
    fn miss_returns_bare_default() {
        let tree = IavlTree::new();
        let keeper = NamespaceKeeper::new();
        assert_eq!(keeper.get(&tree, "example").unwrap(), Namespace::default());
    }

    #[test]
    fn acquire_then_read_roundtrips() {
        let mut tree = IavlTree::new();
        let keeper = NamespaceKeeper::new();
        let ns = Namespace {
            owner: Address::from("os1alice"),
            grace_end_at: 115,
            expires_at: 110,
            domains: Default::default(),
        };
        keeper.update(&mut tree, "example", &ns).unwrap();
        assert_eq!(keeper.get(&tree, "example").unwrap(), ns);
    }
}
