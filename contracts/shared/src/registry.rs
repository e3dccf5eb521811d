//! Proposal registry logic shared by every voting contract
//!
//! The registry never touches proposal storage directly. Each contract hands
//! in a [`ProposalStore`] that decides how a proposal is laid out on the
//! ledger; everything else (counters, voting power, receipts, events) lives
//! here so the contracts only differ in their storage layout.

use soroban_sdk::{log, symbol_short, Address, BytesN, Env};

use crate::constants::{
    INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO,
    PERSISTENT_TTL_THRESHOLD,
};
use crate::errors::VotingError;
use crate::packing::{self, PackedRecord};
use crate::types::{ProposalRecord, RegistryKey, VoteReceipt};
use crate::validation::{safe_add, validate_voting_open, validate_voting_power, validate_voting_window};

/// Ledger layout for proposals
pub trait ProposalStore {
    /// Load a proposal, `None` when the id was never assigned
    fn load(env: &Env, proposal_id: u64) -> Option<ProposalRecord>;

    /// Persist a proposal under `proposal_id`
    fn save(env: &Env, proposal_id: u64, record: &ProposalRecord);

    /// Load the packed word for a proposal
    fn load_packed(env: &Env, proposal_id: u64) -> Option<PackedRecord> {
        Self::load(env, proposal_id).map(|record| packing::encode(env, &record))
    }
}

// ── Persistent helpers ───────────────────────────────────────────────────────

/// Extend a persistent entry's TTL after writing it
pub fn bump_persistent<K>(env: &Env, key: &K)
where
    K: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

// ── Proposals ────────────────────────────────────────────────────────────────

/// Number of proposals created so far
pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::ProposalCount)
        .unwrap_or(0)
}

/// Append a proposal and return its id
pub fn propose<S: ProposalStore>(
    env: &Env,
    proposer: &Address,
    record_hash: BytesN<32>,
    vote_start: u64,
    vote_end: u64,
) -> Result<u64, VotingError> {
    proposer.require_auth();
    validate_voting_window(vote_start, vote_end)?;

    let proposal_id = proposal_count(env);
    let next_id = safe_add(proposal_id, 1)?;
    let record = ProposalRecord::new(record_hash.clone(), vote_start, vote_end);

    S::save(env, proposal_id, &record);

    env.storage()
        .instance()
        .set(&RegistryKey::ProposalCount, &next_id);
    bump_instance(env);

    log!(env, "proposal created", proposal_id, vote_start, vote_end);

    env.events().publish(
        (symbol_short!("proposed"), proposal_id),
        (proposer.clone(), record_hash, vote_start, vote_end),
    );

    Ok(proposal_id)
}

/// Load a proposal or fail with `ProposalNotFound`
pub fn get_proposal<S: ProposalStore>(env: &Env, proposal_id: u64) -> Result<ProposalRecord, VotingError> {
    S::load(env, proposal_id).ok_or(VotingError::ProposalNotFound)
}

/// Packed word for a proposal
pub fn packed_record<S: ProposalStore>(env: &Env, proposal_id: u64) -> Result<PackedRecord, VotingError> {
    S::load_packed(env, proposal_id).ok_or(VotingError::ProposalNotFound)
}

// ── Voting Power ─────────────────────────────────────────────────────────────

/// Current weight of `account`, zero when never assigned
pub fn voting_power(env: &Env, account: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&RegistryKey::VotingPower(account.clone()))
        .unwrap_or(0)
}

/// Overwrite the weight of `account`. `caller` must be admin or registrar.
pub fn set_voting_power(
    env: &Env,
    caller: &Address,
    account: &Address,
    weight: u64,
) -> Result<(), VotingError> {
    authorization::require_voting_power_authority(env, caller)?;

    let key = RegistryKey::VotingPower(account.clone());
    env.storage().persistent().set(&key, &weight);
    bump_persistent(env, &key);
    bump_instance(env);

    env.events().publish(
        (symbol_short!("power_set"), account.clone()),
        (caller.clone(), weight),
    );

    Ok(())
}

// ── Voting ───────────────────────────────────────────────────────────────────

/// Add the voter's current weight to one side of a proposal's tally
pub fn vote<S: ProposalStore>(
    env: &Env,
    voter: &Address,
    proposal_id: u64,
    support: bool,
) -> Result<(), VotingError> {
    voter.require_auth();

    let mut record = get_proposal::<S>(env, proposal_id)?;
    validate_voting_open(&record, env.ledger().timestamp())?;

    let weight = voting_power(env, voter);
    validate_voting_power(weight)?;
    bump_persistent(env, &RegistryKey::VotingPower(voter.clone()));

    if support {
        record.votes_for = safe_add(record.votes_for, weight)?;
    } else {
        record.votes_against = safe_add(record.votes_against, weight)?;
    }

    let receipt_key = RegistryKey::Receipt(proposal_id, voter.clone());
    let receipt = match env.storage().persistent().get::<_, VoteReceipt>(&receipt_key) {
        Some(prior) => VoteReceipt {
            support,
            weight: safe_add(prior.weight, weight)?,
            count: prior.count.saturating_add(1),
        },
        None => VoteReceipt {
            support,
            weight,
            count: 1,
        },
    };

    S::save(env, proposal_id, &record);
    env.storage().persistent().set(&receipt_key, &receipt);
    bump_persistent(env, &receipt_key);
    bump_instance(env);

    log!(env, "vote cast", proposal_id, support, weight);

    env.events().publish(
        (symbol_short!("voted"), proposal_id),
        (voter.clone(), support, weight),
    );

    Ok(())
}

/// Audit record of a voter's votes on a proposal
pub fn vote_receipt(env: &Env, proposal_id: u64, voter: &Address) -> Result<VoteReceipt, VotingError> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Receipt(proposal_id, voter.clone()))
        .ok_or(VotingError::NotFound)
}

// ── Administration ───────────────────────────────────────────────────────────

/// Install the admin; callable once
pub fn initialize(env: &Env, admin: &Address) -> Result<(), VotingError> {
    authorization::initialize_admin(env, admin)?;
    bump_instance(env);

    env.events().publish((symbol_short!("init"),), admin.clone());

    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, VotingError> {
    Ok(authorization::get_admin(env)?)
}

pub fn transfer_admin(env: &Env, new_admin: &Address) -> Result<(), VotingError> {
    authorization::transfer_admin(env, new_admin)?;
    Ok(())
}

/// Allow `account` to assign voting power
pub fn grant_registrar(env: &Env, account: &Address) -> Result<(), VotingError> {
    let admin = authorization::get_admin(env)?;
    authorization::grant_role(env, &admin, account, authorization::Role::Registrar)?;
    Ok(())
}

pub fn revoke_registrar(env: &Env, account: &Address) -> Result<(), VotingError> {
    let admin = authorization::get_admin(env)?;
    authorization::revoke_role(env, &admin, account)?;
    Ok(())
}
