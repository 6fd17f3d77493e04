// Path: crates/keeper/src/push_key.rs
//! The push-key keeper: registered pusher public keys, keyed by owner
//! address and push-key index.

use crate::generic::Keeper;
use ticketchain_state::StateAccess;
use ticketchain_types::entities::PushKey;
use ticketchain_types::error::StateError;
use ticketchain_types::ids::Address;
use ticketchain_types::keys::push_key_key;

/// CRUD over `PushKey` registrations, keyed by `(owner, index)`.
pub struct PushKeyKeeper {
    inner: Keeper<PushKey>,
}

impl Default for PushKeyKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl PushKeyKeeper {
    /// Builds the push-key keeper. `push_key_key` already produces the full
    /// state key, so this keeper reuses the empty-prefix convention
    /// `SystemKeeper` establishes.
    pub fn new() -> Self {
        Self { inner: Keeper::new(b"") }
    }

    /// Registers `push_pub_key` under `owner`'s push-key namespace at `index`.
    pub fn register<S: StateAccess>(
        &self,
        state: &mut S,
        owner: &Address,
        index: u32,
        push_pub_key: [u8; 32],
    ) -> Result<(), StateError> {
        let key = push_key_key(owner.as_ref().as_bytes(), index);
        self.inner.update(state, &key, &PushKey { push_pub_key })
    }

    /// Reads the push key registered under `owner` at `index`, or the bare
    /// default if nothing was ever registered there.
    pub fn get<S: StateAccess>(&self, state: &S, owner: &Address, index: u32) -> Result<PushKey, StateError> {
        let key = push_key_key(owner.as_ref().as_bytes(), index);
        self.inner.get(state, &key)
    }
}
