use soroban_sdk::{contracttype, Address, BytesN};

// ─── Listing state ─────────────────────────────────────────────────────────

/// A time-bounded listing of one NFT. Validity is never stored as a flag:
/// a listing is active exactly while `now < expiry`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Listing {
    /// External collection the token belongs to.
    pub nft_contract: Address,
    /// Token id within that collection.
    pub token_id: u32,
    /// The address that listed the token; verified against `owner_of` at
    /// listing time.
    pub owner: Address,
    /// Ledger timestamp at the moment the listing was created.
    pub listed_at: u64,
    /// Pre-computed expiry: `listed_at + duration`.
    pub expiry: u64,
}

// ─── Bond state ────────────────────────────────────────────────────────────

/// Funds locked against one curation id. Repeat bonds accumulate into the
/// same record: principal and points sum, expiry extends.
#[contracttype]
#[derive(Clone, Debug)]
pub struct BondRecord {
    /// Derived id this bond is keyed by; see `curation::derive_curation_id`.
    pub curation_id: BytesN<32>,
    /// The address that opened the bond. Only this address may top it up
    /// or withdraw it.
    pub curator: Address,
    /// Fungible token the principal is denominated in.
    pub token: Address,
    /// Total locked amount across all tranches.
    pub principal: i128,
    /// Lock period requested by the most recent tranche, in seconds.
    pub duration: u64,
    /// Ledger timestamp of the first tranche.
    pub bond_start: u64,
    /// Earliest instant the principal becomes redeemable.
    pub bond_expiry: u64,
    /// Accrued score; survives withdrawal as a historical total.
    pub points: i128,
    /// false once the principal has been withdrawn.
    pub active: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Per-asset listing: (collection, token id) -> Listing.
    Listing(Address, u32),
    /// Per-curation-id bond: curation id -> BondRecord.
    Bond(BytesN<32>),
}
