//! Fixed-width encoding of a proposal record
//!
//! A proposal packs into one 64-byte word, integers big-endian:
//!
//! | bytes  | field           |
//! |--------|-----------------|
//! | 0..32  | `record_hash`   |
//! | 32..40 | `vote_start`    |
//! | 40..48 | `vote_end`      |
//! | 48..56 | `votes_for`     |
//! | 56..64 | `votes_against` |
//!
//! Nothing outside this module reads or writes individual bytes of the word.

use soroban_sdk::{BytesN, Env};

use crate::constants::{
    PACKED_RECORD_LEN, RECORD_HASH_LEN, VOTES_AGAINST_OFFSET, VOTES_FOR_OFFSET, VOTE_END_OFFSET,
    VOTE_START_OFFSET,
};
use crate::types::ProposalRecord;

/// Encoded proposal record
pub type PackedRecord = BytesN<PACKED_RECORD_LEN>;

/// Encode a proposal into its packed word.
pub fn encode(env: &Env, record: &ProposalRecord) -> PackedRecord {
    let mut word = [0u8; PACKED_RECORD_LEN];

    word[..RECORD_HASH_LEN].copy_from_slice(&record.record_hash.to_array());
    write_u64(&mut word, VOTE_START_OFFSET, record.vote_start);
    write_u64(&mut word, VOTE_END_OFFSET, record.vote_end);
    write_u64(&mut word, VOTES_FOR_OFFSET, record.votes_for);
    write_u64(&mut word, VOTES_AGAINST_OFFSET, record.votes_against);

    BytesN::from_array(env, &word)
}

/// Decode a packed word back into a proposal.
pub fn decode(env: &Env, packed: &PackedRecord) -> ProposalRecord {
    let word = packed.to_array();

    let mut hash = [0u8; RECORD_HASH_LEN];
    hash.copy_from_slice(&word[..RECORD_HASH_LEN]);

    ProposalRecord {
        record_hash: BytesN::from_array(env, &hash),
        vote_start: read_u64(&word, VOTE_START_OFFSET),
        vote_end: read_u64(&word, VOTE_END_OFFSET),
        votes_for: read_u64(&word, VOTES_FOR_OFFSET),
        votes_against: read_u64(&word, VOTES_AGAINST_OFFSET),
    }
}

fn write_u64(word: &mut [u8; PACKED_RECORD_LEN], offset: usize, value: u64) {
    word[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

fn read_u64(word: &[u8; PACKED_RECORD_LEN], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[offset..offset + 8]);
    u64::from_be_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(env: &Env) -> ProposalRecord {
        ProposalRecord {
            record_hash: BytesN::from_array(env, &[0xAB; 32]),
            vote_start: 1_673_849_488,
            vote_end: 2_673_849_488,
            votes_for: 300,
            votes_against: 100,
        }
    }

    #[test]
    fn test_fields_land_at_documented_offsets() {
        let env = Env::default();
        let word = encode(&env, &sample(&env)).to_array();

        assert_eq!(&word[..32], &[0xAB; 32]);
        assert_eq!(&word[32..40], &1_673_849_488u64.to_be_bytes());
        assert_eq!(&word[40..48], &2_673_849_488u64.to_be_bytes());
        assert_eq!(&word[48..56], &300u64.to_be_bytes());
        assert_eq!(&word[56..64], &100u64.to_be_bytes());
    }

    #[test]
    fn test_decode_recovers_encoded_record() {
        let env = Env::default();
        let record = sample(&env);

        assert_eq!(decode(&env, &encode(&env, &record)), record);
    }

    #[test]
    fn test_extreme_tallies_survive_packing() {
        let env = Env::default();
        let mut record = sample(&env);
        record.votes_for = u64::MAX;
        record.votes_against = 0;

        let decoded = decode(&env, &encode(&env, &record));
        assert_eq!(decoded.votes_for, u64::MAX);
        assert_eq!(decoded.votes_against, 0);
    }
}
