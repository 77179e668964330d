pub mod mint_test;

use crate::{ImperialCrown, ImperialCrownClient, Role};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

pub const NAME: &str = "Imperial Crown";
pub const SYMBOL: &str = "CROWN";
pub const BASE_URI: &str = "https://api.nftgaming086.com/metadata/crown/";

/// Deploys a collection with `admin` as deployer. No other roles are granted.
pub fn setup_test() -> (Env, ImperialCrownClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(
        ImperialCrown,
        (
            admin.clone(),
            String::from_str(&env, NAME),
            String::from_str(&env, SYMBOL),
            String::from_str(&env, BASE_URI),
        ),
    );
    let client = ImperialCrownClient::new(&env, &contract_id);

    (env, client, admin)
}

/// Same as [`setup_test`] plus a dedicated minter and pauser.
pub fn setup_with_roles() -> (Env, ImperialCrownClient<'static>, Address, Address, Address) {
    let (env, client, admin) = setup_test();

    let minter = Address::generate(&env);
    let pauser = Address::generate(&env);
    client.grant_role(&admin, &Role::Minter, &minter);
    client.grant_role(&admin, &Role::Pauser, &pauser);

    (env, client, admin, minter, pauser)
}
