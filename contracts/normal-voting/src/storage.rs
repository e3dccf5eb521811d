use soroban_sdk::{contracttype, Env};

use shared::registry::{bump_persistent, ProposalStore};
use shared::ProposalRecord;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// proposal_id -> ProposalRecord
    Proposal(u64),
}

/// Proposals kept as structured records; the packed word is built on read.
pub struct RecordStore;

impl ProposalStore for RecordStore {
    fn load(env: &Env, proposal_id: u64) -> Option<ProposalRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
    }

    fn save(env: &Env, proposal_id: u64, record: &ProposalRecord) {
        let key = DataKey::Proposal(proposal_id);
        env.storage().persistent().set(&key, record);
        bump_persistent(env, &key);
    }
}
