//! Listing registry tests: ownership gating, active-listing exclusivity,
//! lazy expiry.

#![cfg(test)]

use crate::test_helpers::*;
use soroban_sdk::testutils::{Events, Ledger};
use soroban_sdk::{Address, Env, FromVal, Symbol};

// ═══════════════════════════════════════════════════════════════════
// 1. Listing — happy path
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_list_nft_success() {
    let e = Env::default();
    let t = setup(&e);
    assert_eq!(t.nft.owner_of(&1), t.user1);

    let listing = t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);

    assert_eq!(listing.owner, t.user1);
    assert_eq!(listing.nft_contract, t.nft_id);
    assert_eq!(listing.token_id, 1);
    assert_eq!(listing.expiry, listing.listed_at + ONE_DAY);
}

#[test]
fn test_list_nft_stores_expiry_from_ledger_time() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 1_000_000);
    let t = setup(&e);

    let listing = t.exhibit.list_nft(&t.user2, &t.nft_id, &2_u32, &THIRTY_DAYS);

    assert_eq!(listing.listed_at, 1_000_000);
    assert_eq!(listing.expiry, 1_000_000 + THIRTY_DAYS);
}

#[test]
fn test_list_nft_emits_event() {
    let e = Env::default();
    let t = setup(&e);

    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);

    let events = e.events().all();
    let ev = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == t.exhibit_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &ev.1.get(0).unwrap());
    let topic_collection = Address::from_val(&e, &ev.1.get(1).unwrap());
    let topic_token_id = u32::from_val(&e, &ev.1.get(2).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "listing_created"));
    assert_eq!(topic_collection, t.nft_id);
    assert_eq!(topic_token_id, 1);

    let (owner, expiry) = <(Address, u64)>::from_val(&e, &ev.2);
    assert_eq!(owner, t.user1);
    assert_eq!(expiry, e.ledger().timestamp() + ONE_DAY);
}

#[test]
fn test_separate_assets_list_independently() {
    let e = Env::default();
    let t = setup(&e);

    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
    // A different token id in the same collection is not blocked.
    let listing = t.exhibit.list_nft(&t.user2, &t.nft_id, &2_u32, &THIRTY_DAYS);
    assert_eq!(listing.token_id, 2);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Listing — error paths
// ═══════════════════════════════════════════════════════════════════

#[test]
#[should_panic(expected = "sender is not the owner of the NFT")]
fn test_list_nft_by_non_owner_panics() {
    let e = Env::default();
    let t = setup(&e);
    // user1 tries to list user2's NFT.
    t.exhibit.list_nft(&t.user1, &t.nft_id, &2_u32, &ONE_DAY);
}

// The panic surfaces from the collection's own frame, so only the failure
// itself is asserted, not the message.
#[test]
#[should_panic]
fn test_list_unminted_nft_panics() {
    let e = Env::default();
    let t = setup(&e);
    t.exhibit.list_nft(&t.user1, &t.nft_id, &42_u32, &ONE_DAY);
}

#[test]
#[should_panic(expected = "NFT already has an active listing")]
fn test_relist_before_expiry_panics() {
    let e = Env::default();
    let t = setup(&e);
    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
}

#[test]
#[should_panic(expected = "listing expiry timestamp would overflow")]
fn test_list_nft_expiry_overflow_panics() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = u64::MAX - 500);
    let t = setup(&e);
    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &1_000_u64);
}

#[test]
#[should_panic(expected = "no listing found for this NFT")]
fn test_get_listing_never_listed_panics() {
    let e = Env::default();
    let t = setup(&e);
    t.exhibit.get_listing(&t.nft_id, &1_u32);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Lazy expiry
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_is_listed_true_until_expiry() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 1_000);
    let t = setup(&e);

    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
    assert!(t.exhibit.is_listed(&t.nft_id, &1_u32));

    // At the exact expiry instant the listing is no longer active.
    e.ledger().with_mut(|li| li.timestamp = 1_000 + ONE_DAY);
    assert!(!t.exhibit.is_listed(&t.nft_id, &1_u32));
}

#[test]
fn test_is_listed_false_when_never_listed() {
    let e = Env::default();
    let t = setup(&e);
    assert!(!t.exhibit.is_listed(&t.nft_id, &1_u32));
}

#[test]
fn test_relist_after_expiry_succeeds() {
    let e = Env::default();
    let t = setup(&e);

    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
    e.ledger().with_mut(|li| li.timestamp += ONE_DAY + 1);

    let relisted = t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &THIRTY_DAYS);
    assert_eq!(relisted.expiry, e.ledger().timestamp() + THIRTY_DAYS);
    assert!(t.exhibit.is_listed(&t.nft_id, &1_u32));
}

#[test]
fn test_zero_duration_listing_is_instantly_expired() {
    let e = Env::default();
    let t = setup(&e);

    // Accepted as a degenerate listing, expired on arrival.
    let listing = t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &0_u64);
    assert_eq!(listing.expiry, listing.listed_at);
    assert!(!t.exhibit.is_listed(&t.nft_id, &1_u32));

    // And it does not block an immediate relist.
    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
}

#[test]
fn test_expired_listing_still_readable() {
    let e = Env::default();
    let t = setup(&e);

    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
    e.ledger().with_mut(|li| li.timestamp += ONE_DAY + 1);

    // The record survives expiry; only its activity is recomputed.
    let listing = t.exhibit.get_listing(&t.nft_id, &1_u32);
    assert_eq!(listing.owner, t.user1);
}

// ═══════════════════════════════════════════════════════════════════
// 4. End-to-end listing flow
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_listing_flow_both_users() {
    let e = Env::default();
    let t = setup(&e);

    // user1 lists #1 for a day, user2 lists #2 for thirty days.
    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
    let l2 = t.exhibit.list_nft(&t.user2, &t.nft_id, &2_u32, &THIRTY_DAYS);
    assert_eq!(l2.expiry, e.ledger().timestamp() + THIRTY_DAYS);

    assert!(t.exhibit.is_listed(&t.nft_id, &1_u32));
    assert!(t.exhibit.is_listed(&t.nft_id, &2_u32));
}

#[test]
#[should_panic(expected = "NFT already has an active listing")]
fn test_listing_flow_relist_during_other_listing_panics() {
    let e = Env::default();
    let t = setup(&e);

    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
    t.exhibit.list_nft(&t.user2, &t.nft_id, &2_u32, &THIRTY_DAYS);

    // user1 relisting #1 before its expiry is rejected even though other
    // listings came and went in between.
    t.exhibit.list_nft(&t.user1, &t.nft_id, &1_u32, &ONE_DAY);
}
