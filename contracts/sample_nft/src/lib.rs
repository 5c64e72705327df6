//! Sample NFT Collection
//!
//! A deliberately small non-fungible token: sequential ids, open mint,
//! no approvals. It exists so the exhibit contract has a real collection
//! to query `owner_of` against in tests. Not intended for deployment.

#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol};

pub const ERR_NO_TOKEN: &str = "token does not exist";

#[contracttype]
#[derive(Clone)]
enum DataKey {
    /// Owner of a token id.
    Owner(u32),
    /// Token count per holder.
    Balance(Address),
    /// Next id to mint; ids start at 0.
    NextId,
}

#[contract]
pub struct SampleNft;

#[contractimpl]
impl SampleNft {
    /// Mint the next sequential token id to `to`. Unrestricted: this is a
    /// test fixture, not a production collection.
    pub fn mint(e: Env, to: Address) -> u32 {
        let token_id: u32 = e.storage().instance().get(&DataKey::NextId).unwrap_or(0);
        e.storage()
            .instance()
            .set(&DataKey::NextId, &(token_id + 1));

        e.storage()
            .persistent()
            .set(&DataKey::Owner(token_id), &to);

        let balance: u32 = e
            .storage()
            .persistent()
            .get(&DataKey::Balance(to.clone()))
            .unwrap_or(0);
        e.storage()
            .persistent()
            .set(&DataKey::Balance(to.clone()), &(balance + 1));

        e.events()
            .publish((Symbol::new(&e, "mint"), to), token_id);

        token_id
    }

    /// Returns the owner of `token_id`. Panics for ids that were never minted.
    pub fn owner_of(e: Env, token_id: u32) -> Address {
        e.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .unwrap_or_else(|| panic!("{}", ERR_NO_TOKEN))
    }

    /// Number of tokens held by `owner`.
    pub fn balance(e: Env, owner: Address) -> u32 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }
}
