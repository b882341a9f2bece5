//! Read side of the delegation gateway.
//!
//! The standing allowance lives in the SPL token account (`delegate` /
//! `delegated_amount`), owned by the token program and mutable by the owner
//! out-of-band. Everything here treats that data as a snapshot: execution
//! re-checks it and still tolerates the token program rejecting the transfer
//! if the owner revoked between validation and the venue call.

use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Snapshot of a token account's delegation, judged against an expected
/// delegate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelegationStatus {
    pub is_approved: bool,
    pub remaining_amount: u64,
}

/// `is_approved` only when a delegate is set AND it equals `expected_delegate`.
/// A revoked-then-reapproved delegation to some other party must not pass a
/// stale expectation.
pub fn status(
    delegate: Option<Pubkey>,
    delegated_amount: u64,
    expected_delegate: &Pubkey,
) -> DelegationStatus {
    match delegate {
        Some(current) if current == *expected_delegate => DelegationStatus {
            is_approved: true,
            remaining_amount: delegated_amount,
        },
        _ => DelegationStatus {
            is_approved: false,
            remaining_amount: 0,
        },
    }
}

/// Execution precondition: the standing allowance must name the config PDA
/// and cover the full trade.
pub fn require_allowance(
    delegate: Option<Pubkey>,
    delegated_amount: u64,
    expected_delegate: &Pubkey,
    amount_in: u64,
) -> Result<()> {
    let snapshot = status(delegate, delegated_amount, expected_delegate);
    require!(
        snapshot.is_approved && snapshot.remaining_amount >= amount_in,
        ErrorCode::InsufficientDelegatedAllowance
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_delegate_is_not_approved() {
        let expected = Pubkey::new_unique();
        let snapshot = status(None, 1_000, &expected);
        assert_eq!(
            snapshot,
            DelegationStatus {
                is_approved: false,
                remaining_amount: 0
            }
        );
    }

    #[test]
    fn foreign_delegate_is_not_approved() {
        // Stale expectation: allowance was re-granted to someone else.
        let expected = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let snapshot = status(Some(other), 1_000, &expected);
        assert!(!snapshot.is_approved);
        assert_eq!(snapshot.remaining_amount, 0);
    }

    #[test]
    fn matching_delegate_reports_remaining_amount() {
        let expected = Pubkey::new_unique();
        let snapshot = status(Some(expected), 750, &expected);
        assert!(snapshot.is_approved);
        assert_eq!(snapshot.remaining_amount, 750);
    }

    #[test]
    fn allowance_must_cover_the_full_trade() {
        let delegate = Pubkey::new_unique();
        assert!(require_allowance(Some(delegate), 100, &delegate, 100).is_ok());
        assert!(require_allowance(Some(delegate), 100, &delegate, 101).is_err());
        assert!(require_allowance(None, u64::MAX, &delegate, 1).is_err());
    }
}
