//! Pre-built calldata for the EVM-style fungible token `approve` entry point.
//!
//! Callers submit this payload to the token contract verbatim, so the byte
//! layout is a wire contract: it must be identical across implementations
//! and across calls.

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Bytes, Env};

/// 4-byte selector for `approve(address,uint256)`.
const APPROVE_SELECTOR: [u8; 4] = [0x09, 0x5e, 0xa7, 0xb3];

/// ABI word width in bytes.
const WORD: u32 = 32;

/// Build the max-allowance approval payload with this contract as the
/// fixed spender.
///
/// Layout, 68 bytes total:
/// - bytes 0..4   selector `0x095ea7b3`
/// - bytes 4..36  spender word: this contract's 32-byte id (a 20-byte EVM
///   address would sit left-zero-padded in this word; a 32-byte contract
///   id fills it exactly)
/// - bytes 36..68 amount word: all-one bits, the maximum representable
///   unsigned value
pub fn approve_token_calldata(e: &Env) -> Bytes {
    let mut data = Bytes::from_array(e, &APPROVE_SELECTOR);

    // The trailing 32 bytes of the XDR-encoded contract address are the
    // raw contract id.
    let spender = e.current_contract_address().to_xdr(e);
    data.append(&spender.slice(spender.len() - WORD..));

    data.extend_from_array(&[0xff_u8; WORD as usize]);
    data
}
