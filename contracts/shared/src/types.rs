//! Shared data types for the voting contracts

use soroban_sdk::{contracttype, Address, BytesN};

/// Decoded state of a single proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRecord {
    /// Content fingerprint supplied by the proposer
    pub record_hash: BytesN<32>,

    /// First second at which votes are accepted
    pub vote_start: u64,

    /// First second at which votes are no longer accepted
    pub vote_end: u64,

    /// Cumulative weight cast in support
    pub votes_for: u64,

    /// Cumulative weight cast against
    pub votes_against: u64,
}

impl ProposalRecord {
    /// A fresh proposal with zeroed tallies
    pub fn new(record_hash: BytesN<32>, vote_start: u64, vote_end: u64) -> Self {
        Self {
            record_hash,
            vote_start,
            vote_end,
            votes_for: 0,
            votes_against: 0,
        }
    }

    /// Whether `timestamp` falls inside `[vote_start, vote_end)`
    pub fn is_open_at(&self, timestamp: u64) -> bool {
        timestamp >= self.vote_start && timestamp < self.vote_end
    }
}

/// Per-(proposal, voter) audit record of the votes cast
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteReceipt {
    /// Position taken on the most recent vote
    pub support: bool,

    /// Total weight this voter has added across all votes
    pub weight: u64,

    /// Number of votes cast
    pub count: u32,
}

/// Storage keys shared by every registry regardless of proposal layout
#[contracttype]
#[derive(Clone)]
pub enum RegistryKey {
    /// Number of proposals created so far
    ProposalCount,
    /// Maps Address -> voting weight
    VotingPower(Address),
    /// (proposal_id, voter) -> VoteReceipt
    Receipt(u64, Address),
}
