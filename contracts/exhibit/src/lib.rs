//! Exhibit Contract
//!
//! Two cooperating subsystems behind one deployed address:
//!
//! - a **listing registry**: an NFT owner makes their asset available for a
//!   bounded time window; validity is computed against the stored expiry,
//!   never swept by a timer.
//! - a **curation ledger**: third parties lock fungible tokens against a
//!   derived curation id and accrue points over the bonded duration.
//!
//! ## Key design decisions
//!
//! - **Lazy expiry**: a listing is active iff `now < expiry`; expired
//!   records are overwritten on relist, never deleted.
//! - **Derived curation ids**: keccak-256 over (curator, collection, id);
//!   recomputable by any caller, scoped to the curator.
//! - **Checks-Effects-Interactions**: bond state is written before the
//!   token pull and marked inactive before the withdrawal payout.
//! - **Auth-gated mutations**: `require_auth` on the acting address for
//!   every state-changing entry point.
//! - **One spender for approvals**: the contract's own address is baked
//!   into the pre-built `approve` calldata it hands out.

#![no_std]

mod calldata;
mod curation;
mod errors;
mod token_gateway;
mod types;

use errors::*;
use types::{BondRecord, DataKey, Listing};

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Symbol};




#[cfg(test)]
mod test_listing;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn active_listing(e: &Env, nft_contract: &Address, token_id: u32) -> Option<Listing> {
    let listing: Listing = e
        .storage()
        .persistent()
        .get(&DataKey::Listing(nft_contract.clone(), token_id))?;
    if e.ledger().timestamp() < listing.expiry {
        Some(listing)
    } else {
        None
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct Exhibit;

#[contractimpl]
impl Exhibit {
    // ── Listing registry ───────────────────────────────────────────────────

    /// List `token_id` of `nft_contract` for `duration` seconds.
    ///
    /// Requirements:
    /// - `owner` currently owns the token in the external collection
    /// - No active listing exists for (collection, token id)
    ///
    /// Zero duration is accepted as a degenerate listing that is expired
    /// the moment it is created. An expired listing is overwritten in
    /// place; no explicit cancellation is needed before relisting.
    ///
    /// Emits `listing_created` with topics (collection, token id) and data
    /// (owner, expiry).
    pub fn list_nft(
        e: Env,
        owner: Address,
        nft_contract: Address,
        token_id: u32,
        duration: u64,
    ) -> Listing {
        owner.require_auth();

        token_gateway::require_nft_owner(&e, &owner, &nft_contract, token_id);

        if active_listing(&e, &nft_contract, token_id).is_some() {
            panic!("{}", ERR_ALREADY_LISTED);
        }

        let listed_at = e.ledger().timestamp();
        let expiry = listed_at
            .checked_add(duration)
            .unwrap_or_else(|| panic!("{}", ERR_EXPIRY_OVERFLOW));

        let listing = Listing {
            nft_contract: nft_contract.clone(),
            token_id,
            owner: owner.clone(),
            listed_at,
            expiry,
        };

        e.storage().persistent().set(
            &DataKey::Listing(nft_contract.clone(), token_id),
            &listing,
        );

        e.events().publish(
            (Symbol::new(&e, "listing_created"), nft_contract, token_id),
            (owner, expiry),
        );

        listing
    }

    /// Returns the stored listing for (collection, token id), active or not.
    /// Panics if the pair was never listed.
    pub fn get_listing(e: Env, nft_contract: Address, token_id: u32) -> Listing {
        e.storage()
            .persistent()
            .get(&DataKey::Listing(nft_contract, token_id))
            .unwrap_or_else(|| panic!("{}", ERR_NO_LISTING))
    }

    /// Returns `true` iff an active (unexpired) listing exists.
    pub fn is_listed(e: Env, nft_contract: Address, token_id: u32) -> bool {
        active_listing(&e, &nft_contract, token_id).is_some()
    }

    // ── Curation ledger ────────────────────────────────────────────────────

    /// Derive the curation id for `(curator, nft_contract, token_id)`.
    /// Pure and deterministic; see `curation::derive_curation_id`.
    pub fn derive_curation_id(
        e: Env,
        curator: Address,
        nft_contract: Address,
        token_id: u32,
    ) -> BytesN<32> {
        curation::derive_curation_id(&e, &curator, &nft_contract, token_id)
    }

    /// Lock `amount` of `token` against `curation_id` for `duration` seconds.
    ///
    /// Requirements:
    /// - `amount` > 0 and `duration` > 0
    /// - Caller has approved this contract to spend `amount`
    /// - If a record already exists for the id, `curator` and `token`
    ///   must match it
    ///
    /// Repeat bonds accumulate: principal and points sum, and the expiry
    /// extends to the later of the old expiry and `now + duration`. After
    /// a withdrawal the record is reopened with fresh principal while the
    /// points total keeps accruing over the id's lifetime.
    ///
    /// The record is written before the token pull; a failed pull panics
    /// inside the token host call and reverts the write atomically.
    ///
    /// Emits `reaction_bonded` with topic (curation id) and data
    /// (curator, token, amount, duration, points).
    pub fn reaction_bond(
        e: Env,
        curator: Address,
        curation_id: BytesN<32>,
        token: Address,
        amount: i128,
        duration: u64,
    ) -> BondRecord {
        curator.require_auth();

        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        if duration == 0 {
            panic!("{}", ERR_INVALID_DURATION);
        }

        let now = e.ledger().timestamp();
        let tranche_expiry = now
            .checked_add(duration)
            .unwrap_or_else(|| panic!("{}", ERR_BOND_EXPIRY_OVERFLOW));
        let tranche_points = curation::accrue_points(amount, duration);

        let bond = match e
            .storage()
            .persistent()
            .get::<_, BondRecord>(&DataKey::Bond(curation_id.clone()))
        {
            Some(mut existing) if existing.active => {
                if existing.curator != curator {
                    panic!("{}", ERR_NOT_CURATOR);
                }
                if existing.token != token {
                    panic!("{}", ERR_TOKEN_MISMATCH);
                }
                existing.principal += amount;
                existing.points += tranche_points;
                existing.duration = duration;
                if tranche_expiry > existing.bond_expiry {
                    existing.bond_expiry = tranche_expiry;
                }
                existing
            }
            Some(withdrawn) => {
                // Reopened record: fresh principal and lock, lifetime points.
                if withdrawn.curator != curator {
                    panic!("{}", ERR_NOT_CURATOR);
                }
                BondRecord {
                    curation_id: curation_id.clone(),
                    curator: curator.clone(),
                    token: token.clone(),
                    principal: amount,
                    duration,
                    bond_start: now,
                    bond_expiry: tranche_expiry,
                    points: withdrawn.points + tranche_points,
                    active: true,
                }
            }
            None => BondRecord {
                curation_id: curation_id.clone(),
                curator: curator.clone(),
                token: token.clone(),
                principal: amount,
                duration,
                bond_start: now,
                bond_expiry: tranche_expiry,
                points: tranche_points,
                active: true,
            },
        };

        // CEI: commit the record before external code runs in the pull.
        e.storage()
            .persistent()
            .set(&DataKey::Bond(curation_id.clone()), &bond);

        token_gateway::pull_bond_principal(&e, &token, &curator, amount);

        e.events().publish(
            (Symbol::new(&e, "reaction_bonded"), curation_id),
            (curator, token, amount, duration, bond.points),
        );

        bond
    }

    /// Withdraw the full bonded principal after the lock period has elapsed.
    ///
    /// Only the founding curator may withdraw. The record stays in storage
    /// marked inactive so the points total remains queryable.
    ///
    /// Emits `bond_withdrawn` with topic (curation id) and data
    /// (curator, principal).
    pub fn withdraw_bond(e: Env, curator: Address, curation_id: BytesN<32>) -> BondRecord {
        curator.require_auth();

        let mut bond: BondRecord = e
            .storage()
            .persistent()
            .get(&DataKey::Bond(curation_id.clone()))
            .unwrap_or_else(|| panic!("{}", ERR_NO_BOND));

        if !bond.active {
            panic!("{}", ERR_NO_BOND);
        }
        if bond.curator != curator {
            panic!("{}", ERR_NOT_CURATOR);
        }

        let now = e.ledger().timestamp();
        if now < bond.bond_expiry {
            panic!("{}", ERR_BOND_LOCKED);
        }

        // CEI: mark inactive before the payout.
        bond.active = false;
        e.storage()
            .persistent()
            .set(&DataKey::Bond(curation_id.clone()), &bond);

        token_gateway::release_bond_principal(&e, &bond.token, &curator, bond.principal);

        e.events().publish(
            (Symbol::new(&e, "bond_withdrawn"), curation_id),
            (curator, bond.principal),
        );

        bond
    }

    /// Returns the bond record for `curation_id`, active or withdrawn.
    /// Panics if no bond was ever recorded under the id.
    pub fn get_bond(e: Env, curation_id: BytesN<32>) -> BondRecord {
        e.storage()
            .persistent()
            .get(&DataKey::Bond(curation_id))
            .unwrap_or_else(|| panic!("{}", ERR_NO_BOND))
    }

    /// Lifetime points accrued under `curation_id`; 0 if never bonded.
    pub fn get_points(e: Env, curation_id: BytesN<32>) -> i128 {
        e.storage()
            .persistent()
            .get::<_, BondRecord>(&DataKey::Bond(curation_id))
            .map(|b| b.points)
            .unwrap_or(0)
    }

    // ── Calldata builder ───────────────────────────────────────────────────

    /// Pre-built calldata for granting this contract a maximum allowance on
    /// an EVM-style fungible token: `approve(address,uint256)` selector,
    /// this contract's id as the spender word, all-ones amount word.
    /// Byte-identical across calls.
    pub fn get_approve_token_calldata(e: Env) -> Bytes {
        calldata::approve_token_calldata(&e)
    }
}
