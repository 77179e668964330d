#![no_std]

//! # Imperial Crown
//!
//! Capped-supply collectible registry on Soroban. Crowns are numbered from 0,
//! never more than [`MAX_SUPPLY`] exist, and every holder receives the same
//! in-game [`UtilityBenefits`].
//!
//! Privileged operations are gated by [`Role`] rather than a single owner:
//! `Admin` manages roles, royalty and metadata, `Minter` issues crowns and
//! `Pauser` can halt issuance. Reads never require a role and stay available
//! while paused.

mod access;
mod errors;
mod events;
mod metadata;
mod mint;
mod royalty;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use crate::errors::Error;
use crate::events::*;
pub use crate::types::{
    RegistryConfig, RegistryInfo, Role, RoyaltyConfig, RoyaltyState, UtilityBenefits,
    MAX_SUPPLY,
};
use crate::types::REGISTRY_SCHEMA_VERSION;

#[contract]
pub struct ImperialCrown;

#[contractimpl]
impl ImperialCrown {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Deploy a crown collection. `admin` receives the `Admin` role.
    pub fn __constructor(e: &Env, admin: Address, name: String, symbol: String, base_uri: String) {
        storage::set_config(
            e,
            &RegistryConfig {
                name,
                symbol,
                base_uri,
            },
        );
        storage::set_total_minted(e, 0);
        storage::set_paused(e, false);
        access::grant(e, Role::Admin, &admin, &admin);
        storage::extend_instance_ttl(e);
    }

    // ========================================================================
    // ISSUANCE
    // ========================================================================

    /// Mint the next crown to `recipient` (minters only).
    ///
    /// # Errors
    /// * `Error::Unauthorized` - If `minter` lacks the `Minter` role
    /// * `Error::Paused` - If issuance is paused
    /// * `Error::SupplyExhausted` - If all crowns have been minted
    /// * `Error::InvalidRecipient` - If `recipient` is this contract
    pub fn mint(e: &Env, minter: Address, recipient: Address) -> Result<u32, Error> {
        mint::mint(e, minter, recipient)
    }

    /// Mint one crown per recipient with consecutive ids. All or nothing.
    pub fn batch_mint(e: &Env, minter: Address, recipients: Vec<Address>) -> Result<Vec<u32>, Error> {
        mint::batch_mint(e, minter, recipients)
    }

    // ========================================================================
    // UTILITY BENEFITS
    // ========================================================================

    /// Entitlements attached to a minted crown.
    pub fn get_utility_benefits(e: &Env, token_id: u32) -> Result<UtilityBenefits, Error> {
        Self::require_minted(e, token_id)?;
        Ok(UtilityBenefits::crown())
    }

    // ========================================================================
    // ROYALTY
    // ========================================================================

    /// Set secondary-sale royalty terms (admin only)
    ///
    /// # Arguments
    /// * `fee_basis_points` - Royalty in basis points (500 = 5%)
    pub fn set_royalty_info(
        e: &Env,
        admin: Address,
        receiver: Address,
        fee_basis_points: u32,
    ) -> Result<(), Error> {
        access::require_role(e, &admin, Role::Admin)?;
        royalty::validate_fee(fee_basis_points)?;

        storage::set_royalty(
            e,
            &RoyaltyConfig {
                receiver: receiver.clone(),
                fee_basis_points,
            },
        );

        log!(e, "royalty updated", receiver.clone(), fee_basis_points);
        RoyaltyUpdatedEventData {
            receiver,
            fee_basis_points,
        }
        .publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Royalty receiver and amount owed on a sale of `sale_price`.
    ///
    /// The quote is collection-wide, so `_token_id` does not need to be minted.
    pub fn royalty_info(e: &Env, _token_id: u32, sale_price: i128) -> Result<(Address, i128), Error> {
        royalty::quote(e, sale_price)
    }

    /// Configured royalty terms, if any
    pub fn get_royalty(e: &Env) -> Option<RoyaltyConfig> {
        storage::get_royalty(e)
    }

    // ========================================================================
    // ROLES
    // ========================================================================

    /// Grant `role` to `account` (admin only). Granting a held role is a no-op.
    pub fn grant_role(e: &Env, admin: Address, role: Role, account: Address) -> Result<(), Error> {
        access::require_role(e, &admin, Role::Admin)?;
        access::grant(e, role, &account, &admin);
        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Revoke `role` from `account` (admin only). Revoking an unheld role is a no-op.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - If caller is not admin
    /// * `Error::LastAdmin` - If `account` is the only remaining admin
    pub fn revoke_role(e: &Env, admin: Address, role: Role, account: Address) -> Result<(), Error> {
        access::require_role(e, &admin, Role::Admin)?;
        access::revoke(e, role, &account, &admin)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Drop a role held by the caller.
    pub fn renounce_role(e: &Env, account: Address, role: Role) -> Result<(), Error> {
        account.require_auth();
        access::revoke(e, role, &account, &account)?;
        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn has_role(e: &Env, role: Role, account: Address) -> bool {
        storage::has_role(e, role, &account)
    }

    pub fn get_role_member_count(e: &Env, role: Role) -> u32 {
        storage::get_role_count(e, role)
    }

    // ========================================================================
    // PAUSE
    // ========================================================================

    /// Halt issuance (pausers only)
    pub fn pause(e: &Env, pauser: Address) -> Result<(), Error> {
        access::require_role(e, &pauser, Role::Pauser)?;
        storage::set_paused(e, true);

        log!(e, "issuance paused", pauser.clone());
        PausedEventData { account: pauser }.publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Resume issuance (pausers only)
    pub fn unpause(e: &Env, pauser: Address) -> Result<(), Error> {
        access::require_role(e, &pauser, Role::Pauser)?;
        storage::set_paused(e, false);

        log!(e, "issuance unpaused", pauser.clone());
        UnpausedEventData { account: pauser }.publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    pub fn is_paused(e: &Env) -> bool {
        storage::is_paused(e)
    }

    // ========================================================================
    // METADATA
    // ========================================================================

    pub fn name(e: &Env) -> String {
        storage::get_config(e).name
    }

    pub fn symbol(e: &Env) -> String {
        storage::get_config(e).symbol
    }

    pub fn base_uri(e: &Env) -> String {
        storage::get_config(e).base_uri
    }

    /// Replace the metadata prefix (admin only)
    pub fn set_base_uri(e: &Env, admin: Address, base_uri: String) -> Result<(), Error> {
        access::require_role(e, &admin, Role::Admin)?;
        metadata::validate_uri(&base_uri)?;

        let mut config = storage::get_config(e);
        config.base_uri = base_uri.clone();
        storage::set_config(e, &config);

        log!(e, "base uri updated", admin.clone());
        BaseUriUpdatedEventData { admin, base_uri }.publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Override the URI of a single minted crown (admin only)
    pub fn set_token_uri(e: &Env, admin: Address, token_id: u32, uri: String) -> Result<(), Error> {
        access::require_role(e, &admin, Role::Admin)?;
        Self::require_minted(e, token_id)?;
        metadata::validate_uri(&uri)?;

        storage::set_token_uri(e, token_id, &uri);

        log!(e, "token uri updated", token_id);
        TokenUriUpdatedEventData { token_id, uri }.publish(e);

        storage::extend_instance_ttl(e);
        Ok(())
    }

    /// Metadata location of a minted crown: its override if set, else the
    /// base URI followed by the token id.
    pub fn token_uri(e: &Env, token_id: u32) -> Result<String, Error> {
        Self::require_minted(e, token_id)?;
        match storage::get_token_uri(e, token_id) {
            Some(uri) => Ok(uri),
            None => Ok(metadata::compose_token_uri(&storage::get_config(e).base_uri, token_id)),
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn max_supply(_e: &Env) -> u32 {
        MAX_SUPPLY
    }

    /// Number of crowns minted so far
    pub fn get_total_supply(e: &Env) -> u32 {
        storage::get_total_minted(e)
    }

    pub fn get_remaining_supply(e: &Env) -> u32 {
        MAX_SUPPLY - storage::get_total_minted(e)
    }

    pub fn owner_of(e: &Env, token_id: u32) -> Result<Address, Error> {
        storage::get_owner(e, token_id).ok_or(Error::UnknownItem)
    }

    pub fn balance_of(e: &Env, account: Address) -> u32 {
        storage::get_balance(e, &account)
    }

    pub fn is_holder(e: &Env, account: Address) -> bool {
        storage::get_balance(e, &account) > 0
    }

    /// Snapshot of the collection for deployment records
    pub fn get_registry_info(e: &Env) -> RegistryInfo {
        let config = storage::get_config(e);
        RegistryInfo {
            schema_version: REGISTRY_SCHEMA_VERSION,
            name: config.name,
            symbol: config.symbol,
            base_uri: config.base_uri,
            max_supply: MAX_SUPPLY,
            total_minted: storage::get_total_minted(e),
            paused: storage::is_paused(e),
            royalty: storage::get_royalty(e).into(),
        }
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn require_minted(e: &Env, token_id: u32) -> Result<(), Error> {
        if token_id >= storage::get_total_minted(e) {
            return Err(Error::UnknownItem);
        }
        Ok(())
    }
}
