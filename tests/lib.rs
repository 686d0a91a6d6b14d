// lib.rs
// Configuração compartilhada pelos testes integrados da plataforma

use collateral_manager::collateral_manager_proxy;
use common_types::config::BPS_DENOMINATOR;
use fund_ledger::fund_ledger_proxy;
use governance::governance_proxy;
use governance_token::governance_token_proxy;
use loan_registry::loan_registry_proxy;
use multiversx_sc_scenario::imports::*;

// Caminhos dos contratos compilados, relativos ao diretório `tests`
pub const LOAN_REGISTRY_CODE_PATH: MxscPath =
    MxscPath::new("../loan-registry/output/loan-registry.mxsc.json");
pub const FUND_LEDGER_CODE_PATH: MxscPath =
    MxscPath::new("../fund-ledger/output/fund-ledger.mxsc.json");
pub const GOVERNANCE_TOKEN_CODE_PATH: MxscPath =
    MxscPath::new("../governance-token/output/governance-token.mxsc.json");
pub const COLLATERAL_MANAGER_CODE_PATH: MxscPath =
    MxscPath::new("../collateral-manager/output/collateral-manager.mxsc.json");
pub const GOVERNANCE_CODE_PATH: MxscPath =
    MxscPath::new("../governance/output/governance.mxsc.json");

// Carteiras de teste
pub const OWNER: TestAddress = TestAddress::new("owner");
pub const PROVIDER_1: TestAddress = TestAddress::new("provider1");
pub const PROVIDER_2: TestAddress = TestAddress::new("provider2");
pub const BORROWER_1: TestAddress = TestAddress::new("borrower1");
pub const BORROWER_2: TestAddress = TestAddress::new("borrower2");
pub const VOTER_A: TestAddress = TestAddress::new("voter-a");
pub const VOTER_B: TestAddress = TestAddress::new("voter-b");
pub const ATTACKER: TestAddress = TestAddress::new("attacker");

// Contratos
pub const REGISTRY: TestSCAddress = TestSCAddress::new("loan-registry");
pub const LEDGER: TestSCAddress = TestSCAddress::new("fund-ledger");
pub const TOKEN: TestSCAddress = TestSCAddress::new("governance-token");
pub const COLLATERAL: TestSCAddress = TestSCAddress::new("collateral-manager");
pub const GOVERNANCE: TestSCAddress = TestSCAddress::new("governance");

pub const START_BLOCK: u64 = 10_000;
pub const VOTING_PERIOD: u64 = 1_440;
pub const OWNER_FUNDS: u64 = 10_000_000;
pub const PROVIDER_1_FUNDS: u64 = 200_000;
pub const PROVIDER_2_FUNDS: u64 = 300_000;
pub const TOKEN_SUPPLY: u64 = 10_000_000;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("tests");

    blockchain.register_contract(LOAN_REGISTRY_CODE_PATH, loan_registry::ContractBuilder);
    blockchain.register_contract(FUND_LEDGER_CODE_PATH, fund_ledger::ContractBuilder);
    blockchain.register_contract(GOVERNANCE_TOKEN_CODE_PATH, governance_token::ContractBuilder);
    blockchain.register_contract(
        COLLATERAL_MANAGER_CODE_PATH,
        collateral_manager::ContractBuilder,
    );
    blockchain.register_contract(GOVERNANCE_CODE_PATH, governance::ContractBuilder);

    blockchain
}

/// Implanta e conecta todos os contratos da plataforma.
/// O dono administra todos eles; o registro confia no ledger para status e
/// na governança para parâmetros de risco. Os votantes recebem 4M e 3M de
/// tokens de governança de um suprimento de 10M.
pub fn deploy_platform() -> ScenarioWorld {
    let mut world = world();

    world.account(OWNER).nonce(1).balance(OWNER_FUNDS);
    world.account(PROVIDER_1).nonce(1).balance(PROVIDER_1_FUNDS);
    world.account(PROVIDER_2).nonce(1).balance(PROVIDER_2_FUNDS);
    world.account(BORROWER_1).nonce(1).balance(10_000u64);
    world.account(BORROWER_2).nonce(1).balance(15_000u64);
    world.account(VOTER_A).nonce(1);
    world.account(VOTER_B).nonce(1);
    world.account(ATTACKER).nonce(1).balance(50_000u64);
    world.current_block().block_nonce(START_BLOCK);

    world
        .tx()
        .from(OWNER)
        .typed(loan_registry_proxy::LoanRegistryProxy)
        .init()
        .code(LOAN_REGISTRY_CODE_PATH)
        .new_address(REGISTRY)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(fund_ledger_proxy::FundLedgerProxy)
        .init(
            REGISTRY,
            EgldOrEsdtTokenIdentifier::<StaticApi>::egld(),
            100u64,
            1_000_000u64,
        )
        .code(FUND_LEDGER_CODE_PATH)
        .new_address(LEDGER)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(governance_token_proxy::GovernanceTokenProxy)
        .init(TOKEN_SUPPLY, "Platform Governance", "PGOV", 18u8)
        .code(GOVERNANCE_TOKEN_CODE_PATH)
        .new_address(TOKEN)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .init()
        .code(COLLATERAL_MANAGER_CODE_PATH)
        .new_address(COLLATERAL)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(governance_proxy::GovernanceProxy)
        .init(TOKEN, REGISTRY, COLLATERAL, VOTING_PERIOD, 5_000u64, 1_000_000u64)
        .code(GOVERNANCE_CODE_PATH)
        .new_address(GOVERNANCE)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(REGISTRY)
        .typed(loan_registry_proxy::LoanRegistryProxy)
        .set_ledger_contract(LEDGER)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(REGISTRY)
        .typed(loan_registry_proxy::LoanRegistryProxy)
        .set_governance_contract(GOVERNANCE)
        .run();

    world
        .tx()
        .from(OWNER)
        .to(COLLATERAL)
        .typed(collateral_manager_proxy::CollateralManagerProxy)
        .set_governance_contract(GOVERNANCE)
        .run();

    for (voter, amount) in [(VOTER_A, 4_000_000u64), (VOTER_B, 3_000_000u64)] {
        world
            .tx()
            .from(OWNER)
            .to(TOKEN)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .transfer(voter, amount)
            .run();
    }

    world
}

// Funções de utilidade para cálculos comuns

pub fn total_owed(principal: u64, interest_rate: u64) -> u64 {
    principal + principal * interest_rate / BPS_DENOMINATOR
}

pub fn expected_share(repayment: u64, contribution: u64, total_funded: u64) -> u64 {
    (repayment as u128 * contribution as u128 / total_funded as u128) as u64
}
