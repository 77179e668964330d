use soroban_sdk::contracterror;

/// Error codes for the Imperial Crown contract.
/// Uses error codes starting at 600 to avoid conflicts with other contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller does not hold the role the operation requires
    Unauthorized = 600,
    /// Issuance is paused
    Paused = 601,
    /// Every crown has already been minted
    SupplyExhausted = 602,
    /// Mint target cannot own crowns
    InvalidRecipient = 603,
    /// Royalty fee outside 0..=10000 basis points
    InvalidFee = 604,
    /// Token id was never minted
    UnknownItem = 605,
    /// Operation would leave the registry without an admin
    LastAdmin = 606,
    /// URI longer than the supported maximum
    InvalidUri = 607,
    /// Sale price is negative or the royalty overflows
    InvalidAmount = 608,
}
