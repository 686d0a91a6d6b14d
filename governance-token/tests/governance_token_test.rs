use common_types::errors::*;
use governance_token::governance_token_proxy;
use multiversx_sc_scenario::imports::*;

const CODE_PATH: MxscPath = MxscPath::new("output/governance-token.mxsc.json");
const OWNER: TestAddress = TestAddress::new("owner");
const USER: TestAddress = TestAddress::new("user");
const OTHER_USER: TestAddress = TestAddress::new("other-user");
const TOKEN_ADDRESS: TestSCAddress = TestSCAddress::new("governance-token");

const INITIAL_SUPPLY: u64 = 1_000_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("governance-token");
    blockchain.register_contract(CODE_PATH, governance_token::ContractBuilder);
    blockchain
}

fn deploy() -> ScenarioWorld {
    let mut world = world();

    world.account(OWNER).nonce(1);
    world.account(USER).nonce(1);
    world.account(OTHER_USER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .init(INITIAL_SUPPLY, "Governance Token", "GOV", 18u8)
        .code(CODE_PATH)
        .new_address(TOKEN_ADDRESS)
        .run();

    world
}

fn balance_of(world: &mut ScenarioWorld, address: TestAddress) -> BigUint<StaticApi> {
    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .balance_of(address)
        .returns(ReturnsResult)
        .run()
}

fn total_supply(world: &mut ScenarioWorld) -> BigUint<StaticApi> {
    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .total_supply()
        .returns(ReturnsResult)
        .run()
}

#[test]
fn test_init_mints_to_deployer() {
    let mut world = deploy();

    assert_eq!(balance_of(&mut world, OWNER), BigUint::from(INITIAL_SUPPLY));
    assert_eq!(total_supply(&mut world), BigUint::from(INITIAL_SUPPLY));

    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .get_ticker()
        .returns(ExpectValue(ManagedBuffer::from("GOV")))
        .run();

    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .get_decimals()
        .returns(ExpectValue(18u8))
        .run();
}

#[test]
fn test_transfer() {
    let mut world = deploy();

    world
        .tx()
        .from(OWNER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .transfer(USER, 250_000u64)
        .run();

    assert_eq!(balance_of(&mut world, OWNER), BigUint::from(750_000u64));
    assert_eq!(balance_of(&mut world, USER), BigUint::from(250_000u64));
    assert_eq!(total_supply(&mut world), BigUint::from(INITIAL_SUPPLY));

    world
        .tx()
        .from(USER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .transfer(OTHER_USER, 250_001u64)
        .returns(ExpectError(4, ERR_INSUFFICIENT_BALANCE))
        .run();

    world
        .tx()
        .from(USER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .transfer(ManagedAddress::<StaticApi>::zero(), 1u64)
        .returns(ExpectError(4, ERR_ZERO_ADDRESS))
        .run();

    assert_eq!(balance_of(&mut world, OTHER_USER), BigUint::zero());
}

#[test]
fn test_mint_and_burn_are_admin_only() {
    let mut world = deploy();

    world
        .tx()
        .from(USER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .mint_endpoint(USER, 1_000u64)
        .returns(ExpectError(4, ERR_NOT_AUTHORIZED))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .mint_endpoint(USER, 1_000u64)
        .run();
    assert_eq!(total_supply(&mut world), BigUint::from(INITIAL_SUPPLY + 1_000));

    world
        .tx()
        .from(USER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .burn_endpoint(OWNER, 10u64)
        .returns(ExpectError(4, ERR_NOT_AUTHORIZED))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .burn_endpoint(USER, 400u64)
        .run();
    assert_eq!(balance_of(&mut world, USER), BigUint::from(600u64));

    world
        .tx()
        .from(USER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .burn_own(600u64)
        .run();
    assert_eq!(balance_of(&mut world, USER), BigUint::zero());
    assert_eq!(total_supply(&mut world), BigUint::from(INITIAL_SUPPLY));

    world
        .tx()
        .from(USER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .burn_own(1u64)
        .returns(ExpectError(4, ERR_INSUFFICIENT_BALANCE))
        .run();
}

#[test]
fn test_pause_blocks_transfers() {
    let mut world = deploy();

    world
        .tx()
        .from(OWNER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .set_paused(true)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .transfer(USER, 10u64)
        .returns(ExpectError(4, ERR_PAUSED))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .set_paused(false)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(TOKEN_ADDRESS)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .transfer(USER, 10u64)
        .run();
    assert_eq!(balance_of(&mut world, USER), BigUint::from(10u64));
}
