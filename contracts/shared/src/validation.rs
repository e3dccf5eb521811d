//! Validation helper utilities for the voting contracts

use crate::errors::VotingError;
use crate::types::ProposalRecord;

// ===== Window Validation =====

/// Validate that a voting window is non-empty
///
/// # Returns
/// `Ok(())` if `vote_start < vote_end`, `Err(VotingError::InvalidVotingWindow)` otherwise
pub fn validate_voting_window(vote_start: u64, vote_end: u64) -> Result<(), VotingError> {
    if vote_start >= vote_end {
        return Err(VotingError::InvalidVotingWindow);
    }
    Ok(())
}

/// Validate that a proposal accepts votes at `now`
pub fn validate_voting_open(record: &ProposalRecord, now: u64) -> Result<(), VotingError> {
    if now < record.vote_start {
        return Err(VotingError::VotingNotStarted);
    }
    if now >= record.vote_end {
        return Err(VotingError::VotingPeriodEnded);
    }
    Ok(())
}

// ===== Weight Validation =====

/// Validate that a voter carries some weight
pub fn validate_voting_power(weight: u64) -> Result<(), VotingError> {
    if weight == 0 {
        return Err(VotingError::NoVotingPower);
    }
    Ok(())
}

// ===== Safe Math =====

/// Safe addition with overflow check
pub fn safe_add(a: u64, b: u64) -> Result<u64, VotingError> {
    a.checked_add(b).ok_or(VotingError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{BytesN, Env};

    #[test]
    fn test_window_must_be_non_empty() {
        assert!(validate_voting_window(10, 20).is_ok());
        assert_eq!(validate_voting_window(20, 20), Err(VotingError::InvalidVotingWindow));
        assert_eq!(validate_voting_window(30, 20), Err(VotingError::InvalidVotingWindow));
    }

    #[test]
    fn test_window_is_half_open() {
        let env = Env::default();
        let record = ProposalRecord::new(BytesN::from_array(&env, &[1; 32]), 100, 200);

        assert_eq!(validate_voting_open(&record, 99), Err(VotingError::VotingNotStarted));
        assert!(validate_voting_open(&record, 100).is_ok());
        assert!(validate_voting_open(&record, 199).is_ok());
        assert_eq!(validate_voting_open(&record, 200), Err(VotingError::VotingPeriodEnded));
    }

    #[test]
    fn test_safe_add_overflow() {
        assert_eq!(safe_add(100, 200), Ok(300));
        assert_eq!(safe_add(u64::MAX, 1), Err(VotingError::Overflow));
    }

    #[test]
    fn test_zero_weight_rejected() {
        assert_eq!(validate_voting_power(0), Err(VotingError::NoVotingPower));
        assert!(validate_voting_power(1).is_ok());
    }
}
