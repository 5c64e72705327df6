/// All panic messages used by the exhibit contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_NOT_OWNER: &str = "sender is not the owner of the NFT";
pub const ERR_ALREADY_LISTED: &str = "NFT already has an active listing";
pub const ERR_NO_LISTING: &str = "no listing found for this NFT";
pub const ERR_EXPIRY_OVERFLOW: &str = "listing expiry timestamp would overflow";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INVALID_DURATION: &str = "duration must be positive";
pub const ERR_POINTS_OVERFLOW: &str = "points accrual would overflow";
pub const ERR_BOND_EXPIRY_OVERFLOW: &str = "bond expiry timestamp would overflow";
pub const ERR_NO_BOND: &str = "no bond found for this curation id";
pub const ERR_NOT_CURATOR: &str = "sender is not the curator of this bond";
pub const ERR_TOKEN_MISMATCH: &str = "bond already uses a different token";
pub const ERR_BOND_LOCKED: &str = "bond duration has not elapsed yet";
