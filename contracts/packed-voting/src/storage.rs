use soroban_sdk::{contracttype, Env};

use shared::packing::{self, PackedRecord};
use shared::registry::{bump_persistent, ProposalStore};
use shared::ProposalRecord;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// proposal_id -> 64-byte packed word
    Proposal(u64),
}

/// One ledger entry per proposal holding the whole record as a single word.
pub struct PackedStore;

impl ProposalStore for PackedStore {
    fn load(env: &Env, proposal_id: u64) -> Option<ProposalRecord> {
        Self::load_packed(env, proposal_id).map(|word| packing::decode(env, &word))
    }

    fn save(env: &Env, proposal_id: u64, record: &ProposalRecord) {
        let key = DataKey::Proposal(proposal_id);
        env.storage()
            .persistent()
            .set(&key, &packing::encode(env, record));
        bump_persistent(env, &key);
    }

    // Served straight from storage, no re-encoding
    fn load_packed(env: &Env, proposal_id: u64) -> Option<PackedRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
    }
}
