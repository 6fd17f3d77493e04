// Path: crates/keeper/src/account.rs
//! The account keeper: `acc:<address>` -> `Account`.

use crate::generic::Keeper;
use ticketchain_state::{HistoricalStateAccess, StateAccess};
use ticketchain_types::entities::Account;
use ticketchain_types::error::StateError;
use ticketchain_types::ids::Address;
use ticketchain_types::keys::ACCOUNT_KEY_PREFIX;

/// CRUD over `Account` entities, keyed by bech32 address string.
pub struct AccountKeeper {
    inner: Keeper<Account>,
}

impl Default for AccountKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountKeeper {
    /// Builds the account keeper over its well-known prefix.
    pub fn new() -> Self {
        Self { inner: Keeper::new(ACCOUNT_KEY_PREFIX) }
    }

    /// Reads the account at `addr`, or `Account::default()` if it has never
    /// been written ("created on first write; never deleted").
    pub fn get<S: StateAccess>(&self, state: &S, addr: &Address) -> Result<Account, StateError> {
        self.inner.get(state, addr.as_ref().as_bytes())
    }

    /// Reads the account at `addr` as it stood at `height`.
    pub fn get_at<S: HistoricalStateAccess>(
        &self,
        state: &S,
        addr: &Address,
        height: u64,
    ) -> Result<Account, StateError> {
        self.inner.get_at(state, addr.as_ref().as_bytes(), height)
    }

    /// Writes `account` back under `addr`.
    pub fn update<S: StateAccess>(
        &self,
        state: &mut S,
        addr: &Address,
        account: &Account,
    ) -> Result<(), StateError> {
        self.inner.update(state, addr.as_ref().as_bytes(), account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_state::IavlTree;
    use ticketchain_types::decimal::Decimal;

    #[test]
    fn miss_returns_bare_default() {
        let tree = IavlTree::new();
        let keeper = AccountKeeper::new();
        let acc = keeper.get(&tree, &Address::from("os1alice")).unwrap();
        assert_eq!(acc, Account::default());
    }

    #[test]
    fn write_then_read_roundtrips() {
        let mut tree = IavlTree::new();
        let keeper = AccountKeeper::new();
        let addr = Address::from("os1alice");
        let mut acc = Account::default();
        acc.balance = Decimal::parse("100").unwrap();
        acc.nonce = 3;
        keeper.update(&mut tree, &addr, &acc).unwrap();
        assert_eq!(keeper.get(&tree, &addr).unwrap(), acc);
    }

    #[test]
    fn two_reads_of_unwritten_account_agree() {
        let tree = IavlTree::new();
        let keeper = AccountKeeper::new();
        let addr = Address::from("os1bob");
        assert_eq!(keeper.get(&tree, &addr).unwrap(), keeper.get(&tree, &addr).unwrap());
    }
}
