// ==========================================================================
// MÓDULO: loan-registry/src/loan_registry.rs
// Descrição: Contrato inteligente que mantém o registro dos empréstimos
//            (identidade, termos e status) da plataforma de empréstimos
//            peer-to-peer na blockchain MultiversX
// ==========================================================================

#![no_std]

multiversx_sc::imports!();

pub mod loan_registry_proxy;

use common_types::admin;
use common_types::config::*;
use common_types::errors::*;
use common_types::{Loan, LoanStatus};

#[multiversx_sc::contract]
pub trait LoanRegistry: admin::AdminModule {
    // Inicializa o contrato; quem faz o deploy se torna administrador
    // e os limites de risco recebem os valores padrão
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.init_admin(&caller);

        self.min_loan_amount().set(BigUint::from(DEFAULT_MIN_LOAN_AMOUNT));
        self.max_loan_amount().set(BigUint::from(DEFAULT_MAX_LOAN_AMOUNT));
        self.min_interest_rate().set(DEFAULT_MIN_INTEREST_RATE);
        self.max_interest_rate().set(DEFAULT_MAX_INTEREST_RATE);
        self.min_duration().set(DEFAULT_MIN_DURATION);
        self.max_duration().set(DEFAULT_MAX_DURATION);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ============================
    // Ciclo de vida do empréstimo
    // ============================

    /// Registra um novo empréstimo pendente e retorna seu id (começa em 1)
    #[endpoint(createLoan)]
    fn create_loan(
        &self,
        borrower: ManagedAddress,
        amount: BigUint,
        interest_rate: u64,
        duration: u64,
    ) -> u64 {
        self.require_not_paused();
        require!(!borrower.is_zero(), ERR_ZERO_ADDRESS);
        require!(
            amount >= self.min_loan_amount().get() && amount <= self.max_loan_amount().get(),
            ERR_INVALID_AMOUNT
        );
        require!(
            interest_rate >= self.min_interest_rate().get()
                && interest_rate <= self.max_interest_rate().get(),
            ERR_INVALID_INTEREST_RATE
        );
        require!(
            duration >= self.min_duration().get() && duration <= self.max_duration().get(),
            ERR_INVALID_DURATION
        );

        let loan_id = self.loan_counter().get() + 1;
        self.loan_counter().set(loan_id);

        let start_block = self.blockchain().get_block_nonce();
        let loan = Loan {
            id: loan_id,
            borrower: borrower.clone(),
            amount: amount.clone(),
            interest_rate,
            duration,
            start_block,
            deadline_block: start_block + duration,
            status: LoanStatus::Pending,
            total_repaid: BigUint::zero(),
            ledger_contract: None,
            collateral_contract: None,
        };
        self.loans(loan_id).set(&loan);
        self.borrower_loans(&borrower).push(&loan_id);

        self.loan_created_event(loan_id, &borrower, &amount);

        loan_id
    }

    /// Altera o status de um empréstimo. Permitido ao administrador e ao
    /// ledger registrado, que ativa o empréstimo ao completar a captação.
    #[endpoint(updateLoanStatus)]
    fn update_loan_status(&self, loan_id: u64, new_status: LoanStatus) -> bool {
        self.require_not_paused();
        self.require_status_manager();
        require!(new_status != LoanStatus::Pending, ERR_INVALID_STATUS);

        let mut loan = self.require_loan(loan_id);
        require!(!loan.status.is_terminal(), ERR_INVALID_STATUS);

        let previous_status = loan.status;
        loan.status = new_status;
        self.loans(loan_id).set(&loan);

        self.loan_status_updated_event(loan_id, previous_status, new_status);
        true
    }

    /// Contador dos termos de registro. Não é conciliado com a liquidação
    /// feita no ledger, que é quem decide quando o empréstimo está quitado.
    #[endpoint(recordRepayment)]
    fn record_repayment(&self, loan_id: u64, amount: BigUint) -> bool {
        self.require_not_paused();
        self.require_status_manager();

        let mut loan = self.require_loan(loan_id);
        require!(loan.status == LoanStatus::Active, ERR_LOAN_NOT_ACTIVE);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let new_total = &loan.total_repaid + &amount;
        require!(new_total <= loan.total_owed(), ERR_INVALID_AMOUNT);

        loan.total_repaid = new_total;
        self.loans(loan_id).set(&loan);

        self.repayment_recorded_event(loan_id, &amount, &loan.total_repaid);
        true
    }

    /// Vincula o empréstimo aos contratos que o atendem.
    /// Só enquanto pendente e uma única vez.
    #[endpoint(setLoanContracts)]
    fn set_loan_contracts(
        &self,
        loan_id: u64,
        ledger_contract: ManagedAddress,
        collateral_contract: ManagedAddress,
    ) {
        self.require_not_paused();
        self.require_admin();
        require!(
            !ledger_contract.is_zero() && !collateral_contract.is_zero(),
            ERR_ZERO_ADDRESS
        );

        let mut loan = self.require_loan(loan_id);
        require!(loan.status == LoanStatus::Pending, ERR_LOAN_NOT_PENDING);
        require!(
            loan.ledger_contract.is_none() && loan.collateral_contract.is_none(),
            ERR_CONTRACTS_ALREADY_SET
        );

        loan.ledger_contract = Some(ledger_contract.clone());
        loan.collateral_contract = Some(collateral_contract.clone());
        self.loans(loan_id).set(&loan);

        self.loan_contracts_set_event(loan_id, &ledger_contract, &collateral_contract);
    }

    // ============================
    // Contratos de serviço
    // ============================

    #[endpoint(setLedgerContract)]
    fn set_ledger_contract(&self, address: ManagedAddress) {
        self.require_admin();
        require!(!address.is_zero(), ERR_ZERO_ADDRESS);
        self.ledger_contract().set(&address);
    }

    #[endpoint(setGovernanceContract)]
    fn set_governance_contract(&self, address: ManagedAddress) {
        self.require_admin();
        require!(!address.is_zero(), ERR_ZERO_ADDRESS);
        self.governance_contract().set(&address);
    }

    // ============================
    // Parâmetros de risco (administrador ou governança)
    // ============================

    #[endpoint(setMinLoanAmount)]
    fn set_min_loan_amount(&self, amount: BigUint) {
        self.require_risk_manager();
        require!(
            amount > 0u64 && amount <= self.max_loan_amount().get(),
            ERR_INVALID_AMOUNT
        );
        self.min_loan_amount().set(&amount);
        self.risk_parameter_updated_event(&ManagedBuffer::from("min_loan_amount"), &amount);
    }

    #[endpoint(setMaxLoanAmount)]
    fn set_max_loan_amount(&self, amount: BigUint) {
        self.require_risk_manager();
        require!(amount >= self.min_loan_amount().get(), ERR_INVALID_AMOUNT);
        self.max_loan_amount().set(&amount);
        self.risk_parameter_updated_event(&ManagedBuffer::from("max_loan_amount"), &amount);
    }

    #[endpoint(setMinInterestRate)]
    fn set_min_interest_rate(&self, rate: u64) {
        self.require_risk_manager();
        require!(
            rate > 0 && rate <= self.max_interest_rate().get(),
            ERR_INVALID_INTEREST_RATE
        );
        self.min_interest_rate().set(rate);
        self.risk_parameter_updated_event(
            &ManagedBuffer::from("min_interest_rate"),
            &BigUint::from(rate),
        );
    }

    #[endpoint(setMaxInterestRate)]
    fn set_max_interest_rate(&self, rate: u64) {
        self.require_risk_manager();
        require!(
            rate >= self.min_interest_rate().get() && rate <= BPS_DENOMINATOR,
            ERR_INVALID_INTEREST_RATE
        );
        self.max_interest_rate().set(rate);
        self.risk_parameter_updated_event(
            &ManagedBuffer::from("max_interest_rate"),
            &BigUint::from(rate),
        );
    }

    #[endpoint(setMinDuration)]
    fn set_min_duration(&self, duration: u64) {
        self.require_risk_manager();
        require!(
            duration > 0 && duration <= self.max_duration().get(),
            ERR_INVALID_DURATION
        );
        self.min_duration().set(duration);
        self.risk_parameter_updated_event(
            &ManagedBuffer::from("min_duration"),
            &BigUint::from(duration),
        );
    }

    #[endpoint(setMaxDuration)]
    fn set_max_duration(&self, duration: u64) {
        self.require_risk_manager();
        require!(duration >= self.min_duration().get(), ERR_INVALID_DURATION);
        self.max_duration().set(duration);
        self.risk_parameter_updated_event(
            &ManagedBuffer::from("max_duration"),
            &BigUint::from(duration),
        );
    }

    // ============================
    // Consultas
    // ============================

    #[view(getLoanDetails)]
    fn get_loan_details(&self, loan_id: u64) -> Loan<Self::Api> {
        self.require_loan(loan_id)
    }

    /// Consulta que não falha, usada pelos contratos de serviço
    #[view(findLoan)]
    fn find_loan(&self, loan_id: u64) -> Option<Loan<Self::Api>> {
        if self.loans(loan_id).is_empty() {
            return None;
        }
        Some(self.loans(loan_id).get())
    }

    #[view(isOverdue)]
    fn is_overdue(&self, loan_id: u64) -> bool {
        let loan = self.require_loan(loan_id);
        loan.is_overdue(self.blockchain().get_block_nonce())
    }

    #[view(getTotalOwed)]
    fn get_total_owed(&self, loan_id: u64) -> BigUint {
        self.require_loan(loan_id).total_owed()
    }

    #[view(getBorrowerLoans)]
    fn get_borrower_loans(&self, borrower: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for loan_id in self.borrower_loans(&borrower).iter() {
            result.push(loan_id);
        }
        result
    }

    // ============================
    // Funções internas
    // ============================

    fn require_loan(&self, loan_id: u64) -> Loan<Self::Api> {
        require!(!self.loans(loan_id).is_empty(), ERR_LOAN_NOT_FOUND);
        self.loans(loan_id).get()
    }

    fn require_status_manager(&self) {
        let caller = self.blockchain().get_caller();
        let is_ledger =
            !self.ledger_contract().is_empty() && caller == self.ledger_contract().get();
        require!(self.is_admin(&caller) || is_ledger, ERR_NOT_AUTHORIZED);
    }

    fn require_risk_manager(&self) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        let is_governance =
            !self.governance_contract().is_empty() && caller == self.governance_contract().get();
        require!(self.is_admin(&caller) || is_governance, ERR_NOT_AUTHORIZED);
    }

    // ============================
    // Eventos
    // ============================

    #[event("loan_created")]
    fn loan_created_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("loan_status_updated")]
    fn loan_status_updated_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] previous_status: LoanStatus,
        #[indexed] new_status: LoanStatus,
    );

    #[event("repayment_recorded")]
    fn repayment_recorded_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] amount: &BigUint,
        total_repaid: &BigUint,
    );

    #[event("loan_contracts_set")]
    fn loan_contracts_set_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] ledger_contract: &ManagedAddress,
        #[indexed] collateral_contract: &ManagedAddress,
    );

    #[event("risk_parameter_updated")]
    fn risk_parameter_updated_event(
        &self,
        #[indexed] parameter: &ManagedBuffer,
        #[indexed] value: &BigUint,
    );

    // ============================
    // Storage
    // ============================

    #[view(getLoanCount)]
    #[storage_mapper("loan_counter")]
    fn loan_counter(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("loans")]
    fn loans(&self, loan_id: u64) -> SingleValueMapper<Loan<Self::Api>>;

    #[storage_mapper("borrower_loans")]
    fn borrower_loans(&self, borrower: &ManagedAddress) -> VecMapper<u64>;

    #[view(getLedgerContract)]
    #[storage_mapper("ledger_contract")]
    fn ledger_contract(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getGovernanceContract)]
    #[storage_mapper("governance_contract")]
    fn governance_contract(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getMinLoanAmount)]
    #[storage_mapper("min_loan_amount")]
    fn min_loan_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(getMaxLoanAmount)]
    #[storage_mapper("max_loan_amount")]
    fn max_loan_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(getMinInterestRate)]
    #[storage_mapper("min_interest_rate")]
    fn min_interest_rate(&self) -> SingleValueMapper<u64>;

    #[view(getMaxInterestRate)]
    #[storage_mapper("max_interest_rate")]
    fn max_interest_rate(&self) -> SingleValueMapper<u64>;

    #[view(getMinDuration)]
    #[storage_mapper("min_duration")]
    fn min_duration(&self) -> SingleValueMapper<u64>;

    #[view(getMaxDuration)]
    #[storage_mapper("max_duration")]
    fn max_duration(&self) -> SingleValueMapper<u64>;
}
