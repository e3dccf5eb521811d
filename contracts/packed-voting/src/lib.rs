#![no_std]

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

use shared::registry;
use shared::{VoteReceipt, VotingError};

mod storage;

use storage::PackedStore;

/// Voting registry that keeps every proposal in a single 64-byte word.
#[contract]
pub struct PackedVotingContract;

#[contractimpl]
impl PackedVotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Install `admin` as the authority for voting power. Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        registry::initialize(&env, &admin)
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Create a proposal voting from `vote_start` (inclusive) to `vote_end`
    /// (exclusive). Ids are assigned sequentially from 0.
    pub fn propose(
        env: Env,
        proposer: Address,
        record_hash: BytesN<32>,
        vote_start: u64,
        vote_end: u64,
    ) -> Result<u64, VotingError> {
        registry::propose::<PackedStore>(&env, &proposer, record_hash, vote_start, vote_end)
    }

    /// The proposal exactly as stored: hash, window and tallies in one word.
    pub fn view_packed_proposal_record(env: Env, proposal_id: u64) -> Result<BytesN<64>, VotingError> {
        registry::packed_record::<PackedStore>(&env, proposal_id)
    }

    pub fn view_record_hash(env: Env, proposal_id: u64) -> Result<BytesN<32>, VotingError> {
        Ok(registry::get_proposal::<PackedStore>(&env, proposal_id)?.record_hash)
    }

    pub fn view_vote_start(env: Env, proposal_id: u64) -> Result<u64, VotingError> {
        Ok(registry::get_proposal::<PackedStore>(&env, proposal_id)?.vote_start)
    }

    pub fn view_vote_end(env: Env, proposal_id: u64) -> Result<u64, VotingError> {
        Ok(registry::get_proposal::<PackedStore>(&env, proposal_id)?.vote_end)
    }

    pub fn proposal_count(env: Env) -> u64 {
        registry::proposal_count(&env)
    }

    // ── Voting Power ─────────────────────────────────────────────────────────

    /// Overwrite `account`'s voting weight. `caller` must be the admin or a registrar.
    pub fn set_voting_power(
        env: Env,
        caller: Address,
        account: Address,
        weight: u64,
    ) -> Result<(), VotingError> {
        registry::set_voting_power(&env, &caller, &account, weight)
    }

    pub fn view_voting_power(env: Env, account: Address) -> u64 {
        registry::voting_power(&env, &account)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Add the voter's weight to the "for" (`support`) or "against" tally.
    /// Repeat votes add again; nothing is replaced.
    pub fn vote(env: Env, voter: Address, proposal_id: u64, support: bool) -> Result<(), VotingError> {
        registry::vote::<PackedStore>(&env, &voter, proposal_id, support)
    }

    pub fn view_votes_for(env: Env, proposal_id: u64) -> Result<u64, VotingError> {
        Ok(registry::get_proposal::<PackedStore>(&env, proposal_id)?.votes_for)
    }

    pub fn view_votes_against(env: Env, proposal_id: u64) -> Result<u64, VotingError> {
        Ok(registry::get_proposal::<PackedStore>(&env, proposal_id)?.votes_against)
    }

    pub fn view_vote_receipt(env: Env, proposal_id: u64, voter: Address) -> Result<VoteReceipt, VotingError> {
        registry::vote_receipt(&env, proposal_id, &voter)
    }

    // ── Administration ───────────────────────────────────────────────────────

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        registry::get_admin(&env)
    }

    /// Transfer admin role to a new address.
    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), VotingError> {
        registry::transfer_admin(&env, &new_admin)
    }

    /// Let `account` assign voting power.
    pub fn grant_registrar(env: Env, account: Address) -> Result<(), VotingError> {
        registry::grant_registrar(&env, &account)
    }

    pub fn revoke_registrar(env: Env, account: Address) -> Result<(), VotingError> {
        registry::revoke_registrar(&env, &account)
    }
}
