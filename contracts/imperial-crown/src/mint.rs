use soroban_sdk::{log, Address, Env, Vec};

use crate::access;
use crate::errors::Error;
use crate::events::CrownMintedEventData;
use crate::storage;
use crate::types::{Role, MAX_SUPPLY};

/// Checks shared by single and batch issuance, in a fixed order:
/// role, pause, supply, recipients. Nothing is written here.
fn check_issuance(
    e: &Env,
    minter: &Address,
    recipients: &Vec<Address>,
) -> Result<u32, Error> {
    access::require_role(e, minter, Role::Minter)?;

    if storage::is_paused(e) {
        return Err(Error::Paused);
    }

    let total_minted = storage::get_total_minted(e);
    let remaining = MAX_SUPPLY.saturating_sub(total_minted);
    if recipients.len() > remaining {
        return Err(Error::SupplyExhausted);
    }

    let this = e.current_contract_address();
    for recipient in recipients.iter() {
        if recipient == this {
            return Err(Error::InvalidRecipient);
        }
    }

    Ok(total_minted)
}

/// Assigns the next token id to `recipient`. Callers must have validated supply.
fn issue(e: &Env, token_id: u32, recipient: &Address) {
    storage::set_owner(e, token_id, recipient);
    storage::set_balance(e, recipient, storage::get_balance(e, recipient) + 1);

    CrownMintedEventData {
        recipient: recipient.clone(),
        token_id,
    }
    .publish(e);
}

pub fn mint(e: &Env, minter: Address, recipient: Address) -> Result<u32, Error> {
    let recipients = Vec::from_array(e, [recipient.clone()]);
    let token_id = check_issuance(e, &minter, &recipients)?;

    issue(e, token_id, &recipient);
    storage::set_total_minted(e, token_id + 1);

    log!(e, "crown minted", token_id, recipient);
    storage::extend_instance_ttl(e);
    Ok(token_id)
}

/// Mints one crown per entry, in order. Either every entry is issued or none is.
pub fn batch_mint(e: &Env, minter: Address, recipients: Vec<Address>) -> Result<Vec<u32>, Error> {
    let first_id = check_issuance(e, &minter, &recipients)?;

    let mut token_ids = Vec::new(e);
    if recipients.is_empty() {
        return Ok(token_ids);
    }

    let mut next_id = first_id;
    for recipient in recipients.iter() {
        issue(e, next_id, &recipient);
        token_ids.push_back(next_id);
        next_id += 1;
    }
    storage::set_total_minted(e, next_id);

    log!(e, "crowns batch minted", first_id, recipients.len());
    storage::extend_instance_ttl(e);
    Ok(token_ids)
}
