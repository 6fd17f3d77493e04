// Path: crates/keeper/src/repo.rs
//! The repository keeper: `rep:<name>` -> `Repository`.

use crate::generic::Keeper;
use ticketchain_state::{HistoricalStateAccess, StateAccess};
use ticketchain_types::entities::Repository;
use ticketchain_types::error::StateError;
use ticketchain_types::keys::REPO_KEY_PREFIX;

/// CRUD over `Repository` entities, keyed by repository name.
pub struct RepoKeeper {
    inner: Keeper<Repository>,
}

impl Default for RepoKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoKeeper {
    /// Builds the repository keeper over its well-known prefix.
    pub fn new() -> Self {
        Self { inner: Keeper::new(REPO_KEY_PREFIX) }
    }

    /// Reads the repository at `name`, or `Repository::default()` if absent.
    pub fn get<S: StateAccess>(&self, state: &S, name: &str) -> Result<Repository, StateError> {
        self.inner.get(state, name.as_bytes())
    }

    /// Reads the repository at `name` as it stood at `height`.
    pub fn get_at<S: HistoricalStateAccess>(
        &self,
        state: &S,
        name: &str,
        height: u64,
    ) -> Result<Repository, StateError> {
        self.inner.get_at(state, name.as_bytes(), height)
    }

    /// Writes `repo` back under `name`.
    pub fn update<S: StateAccess>(
        &self,
        state: &mut S,
        name: &str,
        repo: &Repository,
    ) -> Result<(), StateError> {
        self.inner.update(state, name.as_bytes(), repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_state::IavlTree;
    use ticketchain_types::entities::RepoConfig;
    use ticketchain_types::ids::Address;

    #[test]
    fn miss_returns_bare_default() {
        let tree = IavlTree::new();
        let keeper = RepoKeeper::new();
        assert_eq!(keeper.get(&tree, "my-repo").unwrap(), Repository::default());
    }

    #[test]
    fn create_then_read_roundtrips() {
        let mut tree = IavlTree::new();
        let keeper = RepoKeeper::new();
        let repo = Repository::new_with_creator(Address::from("os1alice"), 10, RepoConfig::default());
        keeper.update(&mut tree, "my-repo", &repo).unwrap();
        let read = keeper.get(&tree, "my-repo").unwrap();
        assert_eq!(read.owners.len(), 1);
    }
}
