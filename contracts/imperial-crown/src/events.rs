use soroban_sdk::{contractevent, Address, String};

use crate::types::Role;

/// Event emitted for every crown issued, including each batch entry
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrownMintedEventData {
    #[topic]
    pub recipient: Address,
    pub token_id: u32,
}

/// Event emitted when royalty terms change
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoyaltyUpdatedEventData {
    #[topic]
    pub receiver: Address,
    pub fee_basis_points: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGrantedEventData {
    #[topic]
    pub account: Address,
    pub role: Role,
    pub sender: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevokedEventData {
    #[topic]
    pub account: Address,
    pub role: Role,
    pub sender: Address,
}

/// Event emitted when issuance is paused
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedEventData {
    #[topic]
    pub account: Address,
}

/// Event emitted when issuance resumes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnpausedEventData {
    #[topic]
    pub account: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseUriUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub base_uri: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenUriUpdatedEventData {
    #[topic]
    pub token_id: u32,
    pub uri: String,
}
