//! Common error types for the voting contracts
//!
//! Every voting contract in the workspace returns [`VotingError`] from its
//! entry points so that clients see the same codes regardless of which
//! storage variant they talk to.

use authorization::AuthError;
use soroban_sdk::contracterror;

/// Error codes shared by all voting contracts
///
/// Error ranges are organized by category:
/// - 1-19: General/Authorization errors
/// - 20-39: Proposal and voting errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== General/Authorization Errors (1-19) =====
    /// Caller is not authorized to perform this action
    Unauthorized = 1,

    /// Contract not initialized
    NotInitialized = 2,

    /// Contract already initialized
    AlreadyInitialized = 3,

    /// Invalid input provided
    InvalidInput = 4,

    /// Arithmetic overflow occurred
    Overflow = 5,

    /// Requested resource not found
    NotFound = 6,

    // ===== Proposal/Voting Errors (20-39) =====
    /// No proposal with the given id
    ProposalNotFound = 20,

    /// Voting window is empty or inverted
    InvalidVotingWindow = 21,

    /// Ledger time is before the proposal's voting start
    VotingNotStarted = 22,

    /// Ledger time is at or past the proposal's voting end
    VotingPeriodEnded = 23,

    /// Voter has no voting power assigned
    NoVotingPower = 24,
}

impl VotingError {
    /// Get a human-readable error message
    pub fn message(&self) -> &'static str {
        match self {
            VotingError::Unauthorized => "Unauthorized: caller does not have permission",
            VotingError::NotInitialized => "Contract not initialized",
            VotingError::AlreadyInitialized => "Contract already initialized",
            VotingError::InvalidInput => "Invalid input provided",
            VotingError::Overflow => "Arithmetic overflow",
            VotingError::NotFound => "Resource not found",

            VotingError::ProposalNotFound => "Proposal not found",
            VotingError::InvalidVotingWindow => "Voting start must be before voting end",
            VotingError::VotingNotStarted => "Voting has not started",
            VotingError::VotingPeriodEnded => "Voting period has ended",
            VotingError::NoVotingPower => "Voter has no voting power",
        }
    }
}

impl From<AuthError> for VotingError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => VotingError::Unauthorized,
            AuthError::NotInitialized => VotingError::NotInitialized,
            AuthError::AlreadyInitialized => VotingError::AlreadyInitialized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_onto_voting_codes() {
        assert_eq!(VotingError::from(AuthError::Unauthorized), VotingError::Unauthorized);
        assert_eq!(VotingError::from(AuthError::NotInitialized), VotingError::NotInitialized);
        assert_eq!(
            VotingError::from(AuthError::AlreadyInitialized),
            VotingError::AlreadyInitialized
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(VotingError::Unauthorized as u32, 1);
        assert_eq!(VotingError::ProposalNotFound as u32, 20);
        assert_eq!(VotingError::NoVotingPower as u32, 24);
    }
}
