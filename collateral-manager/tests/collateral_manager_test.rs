use collateral_manager::collateral_manager_proxy;
use common_types::config::*;
use common_types::errors::*;
use multiversx_sc_scenario::imports::*;

const CODE_PATH: MxscPath = MxscPath::new("output/collateral-manager.mxsc.json");
const OWNER: TestAddress = TestAddress::new("owner");
const GOVERNANCE: TestAddress = TestAddress::new("governance");
const STRANGER: TestAddress = TestAddress::new("stranger");
const COLLATERAL_ADDRESS: TestSCAddress = TestSCAddress::new("collateral-manager");

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("collateral-manager");
    blockchain.register_contract(CODE_PATH, collateral_manager::ContractBuilder);
    blockchain
}

fn deploy() -> ScenarioWorld {
    let mut world = world();

    world.account(OWNER).nonce(1);
    world.account(GOVERNANCE).nonce(1);
    world.account(STRANGER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .init()
        .code(CODE_PATH)
        .new_address(COLLATERAL_ADDRESS)
        .run();

    world
}

#[test]
fn test_defaults() {
    let mut world = deploy();

    world
        .query()
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .collateral_ratio()
        .returns(ExpectValue(DEFAULT_COLLATERAL_RATIO))
        .run();

    world
        .query()
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .liquidation_threshold()
        .returns(ExpectValue(DEFAULT_LIQUIDATION_THRESHOLD))
        .run();

    world
        .query()
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .liquidation_discount()
        .returns(ExpectValue(DEFAULT_LIQUIDATION_DISCOUNT))
        .run();
}

#[test]
fn test_setters_by_admin_and_governance() {
    let mut world = deploy();

    world
        .tx()
        .from(GOVERNANCE)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_collateral_ratio(20_000u64)
        .returns(ExpectError(4, ERR_NOT_AUTHORIZED))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_governance_contract(GOVERNANCE)
        .run();

    world
        .tx()
        .from(GOVERNANCE)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_collateral_ratio(20_000u64)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_liquidation_discount(1_000u64)
        .run();

    world
        .query()
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .collateral_ratio()
        .returns(ExpectValue(20_000u64))
        .run();

    world
        .query()
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .liquidation_discount()
        .returns(ExpectValue(1_000u64))
        .run();

    world
        .tx()
        .from(STRANGER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_liquidation_threshold(7_000u64)
        .returns(ExpectError(4, ERR_NOT_AUTHORIZED))
        .run();

    world
        .tx()
        .from(GOVERNANCE)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_governance_contract(STRANGER)
        .returns(ExpectError(4, ERR_NOT_AUTHORIZED))
        .run();
}

#[test]
fn test_parameter_bounds() {
    let mut world = deploy();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_collateral_ratio(0u64)
        .returns(ExpectError(4, ERR_INVALID_AMOUNT))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_collateral_ratio(MAX_COLLATERAL_RATIO + 1)
        .returns(ExpectError(4, ERR_INVALID_AMOUNT))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_liquidation_threshold(BPS_DENOMINATOR + 1)
        .returns(ExpectError(4, ERR_INVALID_AMOUNT))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_liquidation_discount(BPS_DENOMINATOR + 1)
        .returns(ExpectError(4, ERR_INVALID_AMOUNT))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_governance_contract(ManagedAddress::<StaticApi>::zero())
        .returns(ExpectError(4, ERR_ZERO_ADDRESS))
        .run();
}

#[test]
fn test_paused_rejects_setters() {
    let mut world = deploy();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_paused(true)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_collateral_ratio(12_000u64)
        .returns(ExpectError(4, ERR_PAUSED))
        .run();

    world
        .query()
        .to(COLLATERAL_ADDRESS)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .paused()
        .returns(ExpectValue(true))
        .run();
}
