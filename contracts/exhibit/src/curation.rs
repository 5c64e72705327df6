//! Curation-id derivation and the points accrual policy.

use crate::errors::ERR_POINTS_OVERFLOW;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env};

/// Derive the curation id for `(curator, nft_contract, token_id)`.
///
/// Keccak-256 over the canonical byte encoding of the ordered tuple:
/// both addresses in their XDR serialization, the token id as 4 big-endian
/// bytes. Pure and total; writer and reader paths recompute the same id
/// from the same inputs. The curator address in the preimage makes the id
/// caller-scoped: two curators bonding the same asset derive distinct ids.
pub fn derive_curation_id(
    e: &Env,
    curator: &Address,
    nft_contract: &Address,
    token_id: u32,
) -> BytesN<32> {
    let mut preimage = Bytes::new(e);
    preimage.append(&curator.clone().to_xdr(e));
    preimage.append(&nft_contract.clone().to_xdr(e));
    preimage.extend_from_array(&token_id.to_be_bytes());
    e.crypto().keccak256(&preimage).to_bytes()
}

/// Points policy v1: linear stake-seconds, `amount * duration`.
///
/// Monotonic non-decreasing in both inputs. This is a versioned economic
/// parameter, not an implementation detail: changing the curve invalidates
/// comparisons against previously emitted points, so any replacement must
/// ship as a new policy version rather than an in-place edit.
pub fn accrue_points(amount: i128, duration: u64) -> i128 {
    amount
        .checked_mul(duration as i128)
        .unwrap_or_else(|| panic!("{}", ERR_POINTS_OVERFLOW))
}
