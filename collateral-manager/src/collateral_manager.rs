// ==========================================================================
// MÓDULO: collateral-manager/src/collateral_manager.rs
// Descrição: Parâmetros de garantia da plataforma, ajustáveis pelo
//            administrador ou por propostas aprovadas na governança
// ==========================================================================

#![no_std]

multiversx_sc::imports!();

pub mod collateral_manager_proxy;

use common_types::admin;
use common_types::config::*;
use common_types::errors::*;

#[multiversx_sc::contract]
pub trait CollateralManager: admin::AdminModule {
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.init_admin(&caller);

        self.collateral_ratio().set(DEFAULT_COLLATERAL_RATIO);
        self.liquidation_threshold().set(DEFAULT_LIQUIDATION_THRESHOLD);
        self.liquidation_discount().set(DEFAULT_LIQUIDATION_DISCOUNT);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setGovernanceContract)]
    fn set_governance_contract(&self, address: ManagedAddress) {
        self.require_admin();
        require!(!address.is_zero(), ERR_ZERO_ADDRESS);
        self.governance_contract().set(&address);
    }

    // Garantia exigida sobre o principal (15000 = 150%)
    #[endpoint(setCollateralRatio)]
    fn set_collateral_ratio(&self, ratio: u64) {
        self.require_parameter_manager();
        require!(ratio > 0 && ratio <= MAX_COLLATERAL_RATIO, ERR_INVALID_AMOUNT);

        self.collateral_ratio().set(ratio);
        self.parameter_updated_event(&ManagedBuffer::from("collateral_ratio"), ratio);
    }

    #[endpoint(setLiquidationThreshold)]
    fn set_liquidation_threshold(&self, threshold: u64) {
        self.require_parameter_manager();
        require!(threshold > 0 && threshold <= BPS_DENOMINATOR, ERR_INVALID_AMOUNT);

        self.liquidation_threshold().set(threshold);
        self.parameter_updated_event(&ManagedBuffer::from("liquidation_threshold"), threshold);
    }

    #[endpoint(setLiquidationDiscount)]
    fn set_liquidation_discount(&self, discount: u64) {
        self.require_parameter_manager();
        require!(discount <= BPS_DENOMINATOR, ERR_INVALID_AMOUNT);

        self.liquidation_discount().set(discount);
        self.parameter_updated_event(&ManagedBuffer::from("liquidation_discount"), discount);
    }

    fn require_parameter_manager(&self) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        let is_governance =
            !self.governance_contract().is_empty() && caller == self.governance_contract().get();
        require!(self.is_admin(&caller) || is_governance, ERR_NOT_AUTHORIZED);
    }

    #[event("collateral_parameter_updated")]
    fn parameter_updated_event(&self, #[indexed] parameter: &ManagedBuffer, #[indexed] value: u64);

    #[view(getGovernanceContract)]
    #[storage_mapper("governance_contract")]
    fn governance_contract(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCollateralRatio)]
    #[storage_mapper("collateral_ratio")]
    fn collateral_ratio(&self) -> SingleValueMapper<u64>;

    #[view(getLiquidationThreshold)]
    #[storage_mapper("liquidation_threshold")]
    fn liquidation_threshold(&self) -> SingleValueMapper<u64>;

    #[view(getLiquidationDiscount)]
    #[storage_mapper("liquidation_discount")]
    fn liquidation_discount(&self) -> SingleValueMapper<u64>;
}
