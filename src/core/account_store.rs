//! Account store
//!
//! This module provides the `AccountStore` struct which holds every account
//! loaded from the database for the lifetime of one invocation.
//!
//! The AccountStore is responsible for:
//! - Holding accounts in a deterministic order (ascending account number)
//! - Authenticated lookup by (number, password)
//! - Moving funds between accounts without ever producing a negative balance

use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;

/// In-memory collection of accounts
///
/// Accounts are addressed by their position in the store. Positions are
/// stable between calls to [`AccountStore::sort_by_number`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore::default()
    }

    /// Initialize the store from already-parsed accounts
    ///
    /// Account-number uniqueness is the database's responsibility and is not
    /// checked here.
    pub fn load(accounts: Vec<Account>) -> Self {
        AccountStore { accounts }
    }

    /// Order accounts by account number, ascending lexicographic
    pub fn sort_by_number(&mut self) {
        self.accounts
            .sort_by(|a, b| a.number.as_str().cmp(b.number.as_str()));
    }

    /// Position of the single account matching both credentials
    ///
    /// Returns `None` if either credential is absent, if nothing matches, or
    /// if the match is ambiguous.
    pub fn position(&self, number: Option<&str>, password: Option<&str>) -> Option<usize> {
        let (number, password) = (number?, password?);

        let mut matches = self
            .accounts
            .iter()
            .enumerate()
            .filter(|(_, account)| account.matches(number, password))
            .map(|(index, _)| index);

        match (matches.next(), matches.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// The single account matching both credentials
    pub fn find(&self, number: Option<&str>, password: Option<&str>) -> Option<&Account> {
        self.position(number, password)
            .map(|index| &self.accounts[index])
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    /// All accounts in store order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of every account's balance
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|account| account.balance).sum()
    }

    /// Move `amount` from the account at `source` to the one at `destination`
    ///
    /// Both new balances are computed before either account is touched, so a
    /// rejected transfer leaves the store unchanged. A transfer from an
    /// account to itself changes nothing once the balance check passes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount exceeds the source balance
    /// - Crediting the destination would overflow
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn transfer(
        &mut self,
        source: usize,
        destination: usize,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let from = &self.accounts[source];
        if from.balance < amount {
            return Err(LedgerError::transfer_exceeds_balance(
                &from.number,
                from.balance,
                amount,
            ));
        }

        if source == destination {
            return Ok(());
        }

        let new_source = from
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::information_required("transfer"))?;

        let new_destination = self.accounts[destination]
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::information_required("transfer"))?;

        self.accounts[source].balance = new_source;
        self.accounts[destination].balance = new_destination;

        Ok(())
    }
}
