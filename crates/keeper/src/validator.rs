// Path: crates/keeper/src/validator.rs
//! The validator keeper: `val:<be-height>` -> `Vec<Validator>`.
//!
//! "The validator set for a given height is the set at the greatest
//! committed height ≤ h" — `get_by_height` walks backward from `h`
//! to the nearest indexed height rather than requiring an entry at every
//! height.

use crate::generic::Keeper;
use ticketchain_state::StateAccess;
use ticketchain_types::entities::Validator;
use ticketchain_types::error::StateError;
use ticketchain_types::keys::VALIDATOR_KEY_PREFIX;

/// Reads/writes height-indexed validator sets.
pub struct ValidatorKeeper {
    inner: Keeper<Vec<Validator>>,
}

impl Default for ValidatorKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorKeeper {
    /// Builds the validator keeper over its well-known prefix.
    pub fn new() -> Self {
        Self { inner: Keeper::new(VALIDATOR_KEY_PREFIX) }
    }

    /// Records the validator set applicable as of `height`.
    pub fn index<S: StateAccess>(
        &self,
        state: &mut S,
        height: u64,
        validators: &[Validator],
    ) -> Result<(), StateError> {
        self.inner.update(state, &height.to_be_bytes(), &validators.to_vec())
    }

    /// Returns the validator set effective at `height`: the set indexed at
    /// the greatest committed height `<= height`, or empty if none has ever
    /// been indexed.
    pub fn get_by_height<S: StateAccess>(
        &self,
        state: &S,
        height: u64,
    ) -> Result<Vec<Validator>, StateError> {
        let scan = state.prefix_scan(VALIDATOR_KEY_PREFIX)?;
        let mut best: Option<(u64, Vec<u8>)> = None;
        for entry in scan {
            let (key, value) = entry?;
            let suffix = key
                .strip_prefix(VALIDATOR_KEY_PREFIX)
                .ok_or_else(|| StateError::Backend("validator key missing prefix".to_string()))?;
            if suffix.len() != 8 {
                continue;
            }
            let mut buf = [0u8; 8];
            buf.copy_from_slice(suffix);
            let entry_height = u64::from_be_bytes(buf);
            if entry_height <= height {
                match &best {
                    Some((best_height, _)) if *best_height >= entry_height => {}
                    _ => best = Some((entry_height, value.to_vec())),
                }
            }
        }
        match best {
            Some((_, bytes)) => ticketchain_types::codec::from_bytes_canonical(&bytes)
                .map_err(StateError::DecodeFailure),
            None => Ok(Vec::new()),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_state::IavlTree;
    use ticketchain_types::decimal::Decimal;
    use ticketchain_types::ids::TxHash;

    fn validator(power: u64) -> Validator {
        Validator {
            public_key: [power as u8; 32],
            power: Decimal::from(power),
            ticket_id: TxHash([0u8; 32]),
        }
    }

    #[test]
    fn miss_returns_empty_set() {
        let tree = IavlTree::new();
        let keeper = ValidatorKeeper::new();
        assert!(keeper.get_by_height(&tree, 100).unwrap().is_empty());
    }

    #[test]
    fn returns_set_from_greatest_height_leq_query() {
        let mut tree = IavlTree::new();
        let keeper = ValidatorKeeper::new();
        keeper.index(&mut tree, 10, &[validator(5)]).unwrap();
        keeper.index(&mut tree, 20, &[validator(9)]).unwrap();

        assert_eq!(keeper.get_by_height(&tree, 15).unwrap(), vec![validator(5)]);
        assert_eq!(keeper.get_by_height(&tree, 25).unwrap(), vec![validator(9)]);
        assert!(keeper.get_by_height(&tree, 5).unwrap().is_empty());
    }
}
