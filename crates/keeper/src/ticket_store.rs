// Path: crates/keeper/src/ticket_store.rs
//! The ticket store: composite-keyed persistence for `Ticket` records.
//!
//! Key format: `tkt:<sep><hash><sep><be-height><sep><be-index>`. Big-endian
//! integers keep lexicographic byte order equal to numeric order, so a full
//! prefix scan over `tkt:` yields every ticket height-ordered, and a scan
//! over `tkt:<sep><hash>` reaches a single ticket's record directly.

use ticketchain_state::StateAccess;
use ticketchain_types::codec::{from_bytes_canonical, to_bytes_canonical};
use ticketchain_types::entities::Ticket;
use ticketchain_types::error::TicketError;
use ticketchain_types::ids::TxHash;
use ticketchain_types::keys::{ticket_hash_prefix, ticket_key, TICKET_KEY_PREFIX};

/// Options accepted by [`TicketStore::query`].
#[derive(Default, Clone, Copy)]
pub struct QueryOptions {
    /// Sort matches by `(height, index)` ascending before applying `limit`.
    pub sort_by_height: bool,
    /// Keep only the first `limit` matches (after sorting, if requested).
    /// `None` means unbounded.
    pub limit: Option<usize>,
}

/// Persistent, composite-keyed index of `Ticket` records.
#[derive(Default)]
pub struct TicketStore;

impl TicketStore {
    /// Builds the ticket store.
    pub fn new() -> Self {
        Self
    }

    fn decode(bytes: &[u8]) -> Result<Ticket, TicketError> {
        from_bytes_canonical(bytes).map_err(TicketError::DecodeFailure)
    }

    fn encode(ticket: &Ticket) -> Result<Vec<u8>, TicketError> {
        to_bytes_canonical(ticket).map_err(TicketError::DecodeFailure)
    }

    /// Persists `ticket`. A duplicate hash overwrites the prior record at
    /// the same `(hash, height, index)` key — the same transaction can never
    /// be indexed twice under a different height/index, so this is only
    /// ever an idempotent re-add in practice.
    pub fn add<S: StateAccess>(&self, state: &mut S, ticket: &Ticket) -> Result<(), TicketError> {
        let key = ticket_key(&ticket.hash.0, ticket.height, ticket.index);
        let bytes = Self::encode(ticket)?;
        state.insert(&key, &bytes)?;
        Ok(())
    }

    /// Locates the ticket indexed under `hash`, by prefix-scanning to its
    /// composite key and decoding the first (only) match.
    pub fn get_by_hash<S: StateAccess>(
        &self,
        state: &S,
        hash: &TxHash,
    ) -> Result<Option<Ticket>, TicketError> {
        let prefix = ticket_hash_prefix(&hash.0);
        let mut scan = state.prefix_scan(&prefix)?;
        match scan.next() {
            Some(entry) => {
                let (_key, value) = entry?;
                Ok(Some(Self::decode(&value)?))
            }
            None => Ok(None),
        }
    }

    /// Deletes the ticket indexed under `hash`. Returns
    /// `TicketError::NotFound` if no ticket is indexed there.
    pub fn remove_by_hash<S: StateAccess>(&self, state: &mut S, hash: &TxHash) -> Result<(), TicketError> {
        let prefix = ticket_hash_prefix(&hash.0);
        let found_key = {
            let mut scan = state.prefix_scan(&prefix)?;
            scan.next().transpose()?.map(|(key, _)| key)
        };
        match found_key {
            Some(key) => {
                state.delete(&key)?;
                Ok(())
            }
            None => Err(TicketError::NotFound(hash.to_string())),
        }
    }

    /// Collects every ticket for which `pred` returns `true`, optionally
    /// height-sorted and limited.
    pub fn query<S, P>(&self, state: &S, pred: P, opts: QueryOptions) -> Result<Vec<Ticket>, TicketError>
    where
        S: StateAccess,
        P: Fn(&Ticket) -> bool,
    {
        let mut out = Vec::new();
        for entry in state.prefix_scan(TICKET_KEY_PREFIX)? {
            let (_key, value) = entry?;
            let ticket = Self::decode(&value)?;
            if pred(&ticket) {
                out.push(ticket);
            }
        }
        if opts.sort_by_height {
            out.sort_by_key(|t| (t.height, t.index));
        }
        if let Some(limit) = opts.limit {
            out.truncate(limit);
        }
        Ok(out)
    }

    /// Returns the first ticket matching `pred`, if any.
    pub fn query_one<S, P>(&self, state: &S, pred: P) -> Result<Option<Ticket>, TicketError>
    where
        S: StateAccess,
        P: Fn(&Ticket) -> bool,
    {
        for entry in state.prefix_scan(TICKET_KEY_PREFIX)? {
            let (_key, value) = entry?;
            let ticket = Self::decode(&value)?;
            if pred(&ticket) {
                return Ok(Some(ticket));
            }
        }
        Ok(None)
    }

    /// Counts tickets matching `pred`.
    pub fn count<S, P>(&self, state: &S, pred: P) -> Result<usize, TicketError>
    where
        S: StateAccess,
        P: Fn(&Ticket) -> bool,
    {
        Ok(self.query(state, pred, QueryOptions::default())?.len())
    }

    /// Locates the ticket matching `pred`, removes its old composite key,
    /// applies `patch`, and re-adds it — used by `UpdateExpireBy`, whose new
    /// `expire_by` changes the ticket's logical identity under no key (the
    /// composite key is hash/height/index, not expire_by) but the old record
    /// must still be replaced atomically rather than mutated in place.
    pub fn update_one<S, P, F>(&self, state: &mut S, pred: P, patch: F) -> Result<(), TicketError>
    where
        S: StateAccess,
        P: Fn(&Ticket) -> bool,
        F: FnOnce(&mut Ticket),
    {
        let found = self.query_one(state, pred)?;
        match found {
            Some(mut ticket) => {
                let old_key = ticket_key(&ticket.hash.0, ticket.height, ticket.index);
                state.delete(&old_key)?;
                patch(&mut ticket);
                self.add(state, &ticket)
            }
            None => Err(TicketError::NotFound("no ticket matched update predicate".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_state::IavlTree;
    use ticketchain_types::decimal::Decimal;
    use ticketchain_types::entities::TicketKind;

    fn ticket(hash: u8, height: u64, index: u32) -> Ticket {
        Ticket {
            kind: TicketKind::Validator,
            hash: TxHash([hash; 32]),
            proposer_pub_key: [hash; 32],
            bls_pub_key: None,
            delegator: None,
            value: Decimal::from(10u64),
            commission_rate: 0.0,
            height,
            index,
            mature_by: height + 60,
            expire_by: height + 100,
        }
    }

    #[test]
    fn add_then_get_by_hash_roundtrips() {
        let mut tree = IavlTree::new();
        let store = TicketStore::new();
        let t = ticket(1, 10, 0);
        store.add(&mut tree, &t).unwrap();
        assert_eq!(store.get_by_hash(&tree, &t.hash).unwrap(), Some(t));
    }

    #[test]
    fn get_by_hash_returns_none_when_absent() {
        let tree = IavlTree::new();
        let store = TicketStore::new();
        assert_eq!(store.get_by_hash(&tree, &TxHash([9u8; 32])).unwrap(), None);
    }

    #[test]
    fn remove_by_hash_deletes_the_record() {
        let mut tree = IavlTree::new();
        let store = TicketStore::new();
        let t = ticket(2, 10, 0);
        store.add(&mut tree, &t).unwrap();
        store.remove_by_hash(&mut tree, &t.hash).unwrap();
        assert_eq!(store.get_by_hash(&tree, &t.hash).unwrap(), None);
    }

    #[test]
    fn remove_by_hash_errors_when_absent() {
        let mut tree = IavlTree::new();
        let store = TicketStore::new();
        assert!(store.remove_by_hash(&mut tree, &TxHash([9u8; 32])).is_err());
    }

    #[test]
    fn query_sorts_by_height_then_index_and_applies_limit() {
        let mut tree = IavlTree::new();
        let store = TicketStore::new();
        store.add(&mut tree, &ticket(1, 20, 0)).unwrap();
        store.add(&mut tree, &ticket(2, 10, 1)).unwrap();
        store.add(&mut tree, &ticket(3, 10, 0)).unwrap();

        let opts = QueryOptions { sort_by_height: true, limit: Some(2) };
        let results = store.query(&tree, |_| true, opts).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].hash, TxHash([3u8; 32]));
        assert_eq!(results[1].hash, TxHash([2u8; 32]));
    }

    #[test]
    fn update_one_replaces_the_record_under_the_same_composite_key() {
        let mut tree = IavlTree::new();
        let store = TicketStore::new();
        let t = ticket(4, 10, 0);
        store.add(&mut tree, &t).unwrap();

        store
            .update_one(&mut tree, |c| c.hash == t.hash, |c| c.expire_by = 999)
            .unwrap();

        let updated = store.get_by_hash(&tree, &t.hash).unwrap().unwrap();
        assert_eq!(updated.expire_by, 999);
    }

    #[test]
    fn count_matches_query_length() {
        let mut tree = IavlTree::new();
        let store = TicketStore::new();
        store.add(&mut tree, &ticket(1, 10, 0)).unwrap();
        store.add(&mut tree, &ticket(2, 10, 1)).unwrap();
        assert_eq!(store.count(&tree, |_| true).unwrap(), 2);
    }
}
