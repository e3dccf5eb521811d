//! Common constants used across the voting contracts

// ===== Storage TTL (in ledgers) =====
// At ~5s per ledger: 30 days ≈ 518,400 ledgers, 1 year ≈ 6,307,200 ledgers.

/// Threshold below which a persistent entry's TTL is extended
pub const PERSISTENT_TTL_THRESHOLD: u32 = 518_400;

/// TTL persistent entries are extended to on write
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 6_307_200;

/// Threshold below which the instance TTL is extended
pub const INSTANCE_TTL_THRESHOLD: u32 = 518_400;

/// TTL the instance is extended to on write
pub const INSTANCE_TTL_EXTEND_TO: u32 = 6_307_200;

// ===== Packed Record =====

/// Width in bytes of an encoded proposal record
pub const PACKED_RECORD_LEN: usize = 64;

/// Width in bytes of a proposal content fingerprint
pub const RECORD_HASH_LEN: usize = 32;

/// Byte offset of the voting start timestamp
pub const VOTE_START_OFFSET: usize = 32;

/// Byte offset of the voting end timestamp
pub const VOTE_END_OFFSET: usize = 40;

/// Byte offset of the "for" tally
pub const VOTES_FOR_OFFSET: usize = 48;

/// Byte offset of the "against" tally
pub const VOTES_AGAINST_OFFSET: usize = 56;
