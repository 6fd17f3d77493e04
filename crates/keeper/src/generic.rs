// Path: crates/keeper/src/generic.rs
//! A generic keeper: CRUD over one key-prefix of the state tree, decoding
//! through the canonical codec, with a bare `Default` returned on miss.

use parity_scale_codec::{Decode, Encode};
use std::marker::PhantomData;
use ticketchain_state::{HistoricalStateAccess, StateAccess};
use ticketchain_types::codec::{from_bytes_canonical, to_bytes_canonical};
use ticketchain_types::error::StateError;

/// A typed facade over one key-prefix of the state tree.
///
/// One namespace per entity kind, rather than one namespace per service —
/// this core's fixed five entity kinds don't need anything more general.
pub struct Keeper<T> {
    prefix: &'static [u8],
    _marker: PhantomData<fn() -> T>,
}

impl<T> Keeper<T> {
    /// Builds a keeper over `prefix`. `prefix` must not overlap any other
    /// keeper's prefix; non-overlapping prefixes are what let keepers avoid
    /// an internal lock.
    pub const fn new(prefix: &'static [u8]) -> Self {
        Self { prefix, _marker: PhantomData }
    }

    /// Builds the full state key for `id` under this keeper's prefix.
    pub fn key_for(&self, id: &[u8]) -> Vec<u8> {
        [self.prefix, id].concat()
    }
}

impl<T> Keeper<T>
where
    T: Encode + Decode + Default,
{
    /// Reads the entity at `id` in the current (latest) version, or `T::default()`
    /// if absent.
    pub fn get<S: StateAccess>(&self, state: &S, id: &[u8]) -> Result<T, StateError> {
        match state.get(&self.key_for(id))? {
            Some(bytes) => from_bytes_canonical(&bytes).map_err(StateError::DecodeFailure),
            None => Ok(T::default()),
        }
    }

    /// Reads the entity at `id` as of a previously committed `height`.
    pub fn get_at<S: HistoricalStateAccess>(
        &self,
        state: &S,
        id: &[u8],
        height: u64,
    ) -> Result<T, StateError> {
        let snapshot = state.at_height(height)?;
        self.get(&snapshot, id)
    }

    /// Write-through update of the entity at `id`.
    pub fn update<S: StateAccess>(&self, state: &mut S, id: &[u8], entity: &T) -> Result<(), StateError> {
        let bytes = to_bytes_canonical(entity).map_err(StateError::DecodeFailure)?;
        state.insert(&self.key_for(id), &bytes)
    }
}
