//! External-token adapters for the exhibit contract.
//! Centralizes the NFT ownership read and fungible-token custody transfers.

use crate::errors::ERR_NOT_OWNER;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contractclient, Address, Env};

/// Read surface of the external NFT collection. Any contract exporting
/// `owner_of(token_id) -> Address` satisfies it; `mint` is a fixture
/// concern and deliberately not part of this client.
#[contractclient(name = "NftClient")]
pub trait NonFungible {
    fn owner_of(e: Env, token_id: u32) -> Address;
}

/// @notice Panics unless `claimed` currently owns `token_id` in `collection`.
/// @dev The ownership read is a synchronous cross-contract call; a
///      nonexistent token propagates the collection's own panic.
pub fn require_nft_owner(e: &Env, claimed: &Address, collection: &Address, token_id: u32) {
    let current = NftClient::new(e, collection).owner_of(&token_id);
    if current != *claimed {
        panic!("{}", ERR_NOT_OWNER);
    }
}

/// @notice Pulls `amount` of `token` from `from` into contract custody.
/// @dev Requires prior approval for this contract as spender. An
///      insufficient balance or allowance panics inside the token host
///      call, rolling the whole operation back with no partial movement.
pub fn pull_bond_principal(e: &Env, token: &Address, from: &Address, amount: i128) {
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, from, &contract, &amount);
}

/// @notice Transfers `amount` of `token` out of contract custody to `to`.
/// @dev Used by bond withdrawal, after the record is marked inactive.
pub fn release_bond_principal(e: &Env, token: &Address, to: &Address, amount: i128) {
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer(&contract, to, &amount);
}
