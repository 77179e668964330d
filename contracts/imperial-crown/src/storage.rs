use soroban_sdk::{Address, Env, String};

use crate::types::{
    RegistryConfig, Role, RoyaltyConfig, StorageKey, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INSTANCE STORAGE
// ============================================================================

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

/// Get collection configuration
pub fn get_config(e: &Env) -> RegistryConfig {
    e.storage()
        .instance()
        .get(&StorageKey::Config)
        .expect("config is written by the constructor")
}

/// Set collection configuration
pub fn set_config(e: &Env, config: &RegistryConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

pub fn get_total_minted(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&StorageKey::TotalMinted)
        .unwrap_or(0)
}

pub fn set_total_minted(e: &Env, total: u32) {
    e.storage().instance().set(&StorageKey::TotalMinted, &total);
}

pub fn is_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&StorageKey::Paused, &paused);
}

pub fn get_royalty(e: &Env) -> Option<RoyaltyConfig> {
    e.storage().instance().get(&StorageKey::Royalty)
}

pub fn set_royalty(e: &Env, royalty: &RoyaltyConfig) {
    e.storage().instance().set(&StorageKey::Royalty, royalty);
}

pub fn get_role_count(e: &Env, role: Role) -> u32 {
    e.storage()
        .instance()
        .get(&StorageKey::RoleCount(role))
        .unwrap_or(0)
}

pub fn set_role_count(e: &Env, role: Role, count: u32) {
    e.storage()
        .instance()
        .set(&StorageKey::RoleCount(role), &count);
}

// ============================================================================
// TOKEN STORAGE
// ============================================================================

/// Get the owner of a token
pub fn get_owner(e: &Env, token_id: u32) -> Option<Address> {
    let key = StorageKey::Owner(token_id);
    let owner = e.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    owner
}

/// Set the owner of a token
pub fn set_owner(e: &Env, token_id: u32, owner: &Address) {
    let key = StorageKey::Owner(token_id);
    e.storage().persistent().set(&key, owner);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Get the number of tokens held by an address
pub fn get_balance(e: &Env, account: &Address) -> u32 {
    let key = StorageKey::Balance(account.clone());
    let balance = e.storage().persistent().get::<_, u32>(&key);
    match balance {
        Some(balance) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(e: &Env, account: &Address, balance: u32) {
    let key = StorageKey::Balance(account.clone());
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_token_uri(e: &Env, token_id: u32) -> Option<String> {
    let key = StorageKey::TokenUri(token_id);
    let uri = e.storage().persistent().get::<_, String>(&key);
    if uri.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    uri
}

pub fn set_token_uri(e: &Env, token_id: u32, uri: &String) {
    let key = StorageKey::TokenUri(token_id);
    e.storage().persistent().set(&key, uri);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ROLE STORAGE
// ============================================================================

pub fn has_role(e: &Env, role: Role, account: &Address) -> bool {
    let key = StorageKey::RoleMember(role, account.clone());
    let member = e
        .storage()
        .persistent()
        .get::<_, bool>(&key)
        .unwrap_or(false);
    if member {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    member
}

pub fn set_role_member(e: &Env, role: Role, account: &Address) {
    let key = StorageKey::RoleMember(role, account.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_role_member(e: &Env, role: Role, account: &Address) {
    let key = StorageKey::RoleMember(role, account.clone());
    e.storage().persistent().remove(&key);
}
