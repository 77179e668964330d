use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::events::{RoleGrantedEventData, RoleRevokedEventData};
use crate::storage;
use crate::types::Role;

/// Authenticates `caller` and checks it holds `role`.
pub fn require_role(e: &Env, caller: &Address, role: Role) -> Result<(), Error> {
    caller.require_auth();
    if !storage::has_role(e, role, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Adds `account` to `role`. No-op, and no event, if it already held the role.
pub fn grant(e: &Env, role: Role, account: &Address, sender: &Address) {
    if storage::has_role(e, role, account) {
        return;
    }

    storage::set_role_member(e, role, account);
    storage::set_role_count(e, role, storage::get_role_count(e, role) + 1);

    log!(e, "role granted", role as u32, account.clone());
    RoleGrantedEventData {
        account: account.clone(),
        role,
        sender: sender.clone(),
    }
    .publish(e);
}

/// Removes `account` from `role`. No-op if it did not hold the role.
///
/// The last `Admin` holder can never be removed.
pub fn revoke(e: &Env, role: Role, account: &Address, sender: &Address) -> Result<(), Error> {
    if !storage::has_role(e, role, account) {
        return Ok(());
    }

    let count = storage::get_role_count(e, role);
    if role == Role::Admin && count <= 1 {
        return Err(Error::LastAdmin);
    }

    storage::remove_role_member(e, role, account);
    storage::set_role_count(e, role, count.saturating_sub(1));

    log!(e, "role revoked", role as u32, account.clone());
    RoleRevokedEventData {
        account: account.clone(),
        role,
        sender: sender.clone(),
    }
    .publish(e);

    Ok(())
}
