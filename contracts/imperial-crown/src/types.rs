use soroban_sdk::{contracttype, Address, String};

// ============================================================================
// Constants
// ============================================================================

/// Hard ceiling on the number of crowns that can ever exist.
pub const MAX_SUPPLY: u32 = 100;

/// Maximum basis points for royalty fees
pub const MAX_FEE_BASIS_POINTS: u32 = 10_000; // 100%

/// In-app purchase discount granted to every holder (30%)
pub const IAP_DISCOUNT_BASIS_POINTS: u32 = 3_000;

/// PvP win-rate bonus granted to every holder (+15%)
pub const PVP_WIN_RATE_BONUS_BASIS_POINTS: u32 = 1_500;

/// Longest base or per-token URI accepted, in bytes.
pub const MAX_URI_LEN: u32 = 200;

/// Version tag carried by [`RegistryInfo`] snapshots.
pub const REGISTRY_SCHEMA_VERSION: u32 = 1;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent entries (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold before extending persistent entries (89 days)
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// Storage keys
// ============================================================================

/// Storage keys for the Imperial Crown contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Immutable collection config plus mutable base URI
    Config,
    /// Number of crowns minted so far, doubles as the next token id
    TotalMinted,
    /// Emergency pause flag
    Paused,
    /// Royalty receiver and fee
    Royalty,
    /// Owner of a minted token
    Owner(u32),
    /// Number of tokens held by an address
    Balance(Address),
    /// Per-token URI override
    TokenUri(u32),
    /// Role membership flag
    RoleMember(Role, Address),
    /// Number of holders of a role
    RoleCount(Role),
}

// ============================================================================
// Roles
// ============================================================================

/// Capabilities that gate privileged operations.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    /// Grants and revokes roles, manages royalty and metadata
    Admin = 0,
    /// Issues new crowns
    Minter = 1,
    /// Pauses and unpauses issuance
    Pauser = 2,
}

// ============================================================================
// Records
// ============================================================================

/// Collection configuration written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
}

/// Secondary-sale royalty terms.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoyaltyConfig {
    pub receiver: Address,
    /// Basis points (0-10000, where 10000 = 100%)
    pub fee_basis_points: u32,
}

/// Royalty terms as carried in snapshots.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoyaltyState {
    Unset,
    Set(RoyaltyConfig),
}

impl From<Option<RoyaltyConfig>> for RoyaltyState {
    fn from(royalty: Option<RoyaltyConfig>) -> Self {
        match royalty {
            Some(config) => RoyaltyState::Set(config),
            None => RoyaltyState::Unset,
        }
    }
}

/// In-game entitlements attached to every crown.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UtilityBenefits {
    pub iap_discount_bps: u32,
    pub pvp_win_rate_bonus_bps: u32,
    pub has_cosmetic_skin: bool,
}

impl UtilityBenefits {
    pub fn crown() -> Self {
        UtilityBenefits {
            iap_discount_bps: IAP_DISCOUNT_BASIS_POINTS,
            pvp_win_rate_bonus_bps: PVP_WIN_RATE_BONUS_BASIS_POINTS,
            has_cosmetic_skin: true,
        }
    }
}

/// Point-in-time view of the registry for deployment records.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInfo {
    pub schema_version: u32,
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub max_supply: u32,
    pub total_minted: u32,
    pub paused: bool,
    pub royalty: RoyaltyState,
}
