use crate::test::{setup_test, setup_with_roles, NAME, SYMBOL};
use crate::{Error, RoyaltyConfig, RoyaltyState, UtilityBenefits, MAX_SUPPLY};
use soroban_sdk::{testutils::Address as _, vec, Address, String};

#[test]
fn test_deployment_state() {
    let (env, client, admin) = setup_test();

    assert_eq!(client.name(), String::from_str(&env, NAME));
    assert_eq!(client.symbol(), String::from_str(&env, SYMBOL));
    assert_eq!(client.max_supply(), 100);
    assert_eq!(client.get_total_supply(), 0);
    assert_eq!(client.get_remaining_supply(), MAX_SUPPLY);
    assert_eq!(client.is_paused(), false);
    assert_eq!(client.get_royalty(), None);
    assert!(client.has_role(&crate::Role::Admin, &admin));
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, client, _, minter, _) = setup_with_roles();
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);

    assert_eq!(client.mint(&minter, &user1), 0);
    assert_eq!(client.mint(&minter, &user2), 1);
    assert_eq!(client.mint(&minter, &user1), 2);

    assert_eq!(client.owner_of(&0), user1);
    assert_eq!(client.owner_of(&1), user2);
    assert_eq!(client.owner_of(&2), user1);
    assert_eq!(client.balance_of(&user1), 2);
    assert_eq!(client.balance_of(&user2), 1);
    assert_eq!(client.get_total_supply(), 3);
    assert_eq!(client.get_remaining_supply(), 97);
    assert!(client.is_holder(&user1));
}

#[test]
fn test_mint_requires_minter_role() {
    let (env, client, admin) = setup_test();
    let user = Address::generate(&env);

    // Admin does not implicitly hold Minter
    assert_eq!(client.try_mint(&admin, &user), Err(Ok(Error::Unauthorized)));

    let outsider = Address::generate(&env);
    assert_eq!(client.try_mint(&outsider, &user), Err(Ok(Error::Unauthorized)));

    client.grant_role(&admin, &crate::Role::Minter, &outsider);
    assert_eq!(client.mint(&outsider, &user), 0);
}

#[test]
fn test_mint_to_contract_rejected() {
    let (_env, client, _, minter, _) = setup_with_roles();

    let result = client.try_mint(&minter, &client.address);
    assert_eq!(result, Err(Ok(Error::InvalidRecipient)));
    assert_eq!(client.get_total_supply(), 0);
}

#[test]
fn test_enforces_supply_limit() {
    let (env, client, _, minter, _) = setup_with_roles();
    let user = Address::generate(&env);

    for expected_id in 0..MAX_SUPPLY {
        assert_eq!(client.get_remaining_supply(), MAX_SUPPLY - expected_id);
        assert_eq!(client.mint(&minter, &user), expected_id);
    }

    assert_eq!(client.get_remaining_supply(), 0);
    assert_eq!(client.balance_of(&user), MAX_SUPPLY);
    assert_eq!(client.owner_of(&99), user);

    let result = client.try_mint(&minter, &user);
    assert_eq!(result, Err(Ok(Error::SupplyExhausted)));
    assert_eq!(client.get_total_supply(), MAX_SUPPLY);
}

#[test]
fn test_unauthorized_checked_before_supply() {
    let (env, client, _, minter, _) = setup_with_roles();
    let user = Address::generate(&env);
    let outsider = Address::generate(&env);

    for _ in 0..MAX_SUPPLY {
        client.mint(&minter, &user);
    }

    assert_eq!(client.try_mint(&outsider, &user), Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_batch_mint() {
    let (env, client, _, minter, _) = setup_with_roles();
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);

    client.mint(&minter, &user2);

    let ids = client.batch_mint(&minter, &vec![&env, user1.clone(), user2.clone(), user1.clone()]);
    assert_eq!(ids, vec![&env, 1u32, 2u32, 3u32]);

    assert_eq!(client.owner_of(&1), user1);
    assert_eq!(client.owner_of(&2), user2);
    assert_eq!(client.owner_of(&3), user1);
    assert_eq!(client.balance_of(&user1), 2);
    assert_eq!(client.balance_of(&user2), 2);
    assert_eq!(client.get_total_supply(), 4);
}

#[test]
fn test_batch_mint_is_atomic_on_supply() {
    let (env, client, _, minter, _) = setup_with_roles();
    let filler = Address::generate(&env);
    let user = Address::generate(&env);

    for _ in 0..MAX_SUPPLY - 2 {
        client.mint(&minter, &filler);
    }

    let too_many = vec![&env, user.clone(), user.clone(), user.clone()];
    assert_eq!(client.try_batch_mint(&minter, &too_many), Err(Ok(Error::SupplyExhausted)));
    assert_eq!(client.get_total_supply(), MAX_SUPPLY - 2);
    assert_eq!(client.balance_of(&user), 0);
    assert_eq!(client.try_owner_of(&98), Err(Ok(Error::UnknownItem)));

    let ids = client.batch_mint(&minter, &vec![&env, user.clone(), user.clone()]);
    assert_eq!(ids, vec![&env, 98u32, 99u32]);
    assert_eq!(client.get_remaining_supply(), 0);
}

#[test]
fn test_batch_mint_is_atomic_on_invalid_recipient() {
    let (env, client, _, minter, _) = setup_with_roles();
    let user = Address::generate(&env);

    let recipients = vec![&env, user.clone(), client.address.clone()];
    assert_eq!(client.try_batch_mint(&minter, &recipients), Err(Ok(Error::InvalidRecipient)));
    assert_eq!(client.get_total_supply(), 0);
    assert_eq!(client.balance_of(&user), 0);
}

#[test]
fn test_batch_mint_empty() {
    let (env, client, _, minter, _) = setup_with_roles();

    let ids = client.batch_mint(&minter, &vec![&env]);
    assert!(ids.is_empty());
    assert_eq!(client.get_total_supply(), 0);

    let outsider = Address::generate(&env);
    assert_eq!(client.try_batch_mint(&outsider, &vec![&env]), Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_balance_matches_ownership() {
    let (env, client, _, minter, _) = setup_with_roles();
    let users = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];

    for i in 0..10u32 {
        client.mint(&minter, &users[(i % 3) as usize]);
    }
    client.batch_mint(&minter, &vec![&env, users[2].clone(), users[2].clone()]);

    let total = client.get_total_supply();
    for user in users.iter() {
        let owned = (0..total).filter(|id| client.owner_of(id) == *user).count() as u32;
        assert_eq!(client.balance_of(user), owned);
    }
    assert_eq!(client.balance_of(&Address::generate(&env)), 0);
}

#[test]
fn test_utility_benefits() {
    let (env, client, _, minter, _) = setup_with_roles();
    let user = Address::generate(&env);

    client.mint(&minter, &user);
    client.mint(&minter, &user);

    let first = client.get_utility_benefits(&0);
    assert_eq!(first.iap_discount_bps, 3000);
    assert_eq!(first.pvp_win_rate_bonus_bps, 1500);
    assert!(first.has_cosmetic_skin);
    assert_eq!(first, UtilityBenefits::crown());
    assert_eq!(client.get_utility_benefits(&1), first);
}

#[test]
fn test_utility_benefits_unknown_item() {
    let (env, client, _, minter, _) = setup_with_roles();

    assert_eq!(client.try_get_utility_benefits(&0), Err(Ok(Error::UnknownItem)));

    client.mint(&minter, &Address::generate(&env));
    assert_eq!(client.try_get_utility_benefits(&1), Err(Ok(Error::UnknownItem)));
    assert_eq!(client.try_owner_of(&1), Err(Ok(Error::UnknownItem)));
}

#[test]
fn test_registry_info_snapshot() {
    let (env, client, admin, minter, _) = setup_with_roles();
    let receiver = Address::generate(&env);

    assert_eq!(client.get_registry_info().royalty, RoyaltyState::Unset);

    client.mint(&minter, &Address::generate(&env));
    client.set_royalty_info(&admin, &receiver, &500);

    let info = client.get_registry_info();
    assert_eq!(info.schema_version, 1);
    assert_eq!(info.name, String::from_str(&env, NAME));
    assert_eq!(info.max_supply, MAX_SUPPLY);
    assert_eq!(info.total_minted, 1);
    assert_eq!(info.paused, false);
    assert_eq!(
        info.royalty,
        RoyaltyState::Set(RoyaltyConfig {
            receiver,
            fee_basis_points: 500,
        })
    );
}
