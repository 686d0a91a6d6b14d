// ==========================================================================
// MÓDULO: fund-ledger/src/fund_ledger.rs
// Descrição: Contrato inteligente que mantém os saldos dos credores, a
//            captação de cada empréstimo e a liquidação proporcional dos
//            pagamentos na blockchain MultiversX
// ==========================================================================

#![no_std]

multiversx_sc::imports!();

pub mod fund_ledger_proxy;

use common_types::admin;
use common_types::errors::*;
use common_types::{FundingRecord, Loan, LoanStatus};
use loan_registry::loan_registry_proxy;

#[multiversx_sc::contract]
pub trait FundLedger: admin::AdminModule {
    // Inicializa o ledger com o registro de empréstimos, o token aceito
    // pelo pool e os limites de depósito. Quem faz o deploy é o administrador.
    #[init]
    fn init(
        &self,
        loan_registry_address: ManagedAddress,
        pool_token: EgldOrEsdtTokenIdentifier,
        min_deposit: BigUint,
        max_deposit: BigUint,
    ) {
        require!(!loan_registry_address.is_zero(), ERR_ZERO_ADDRESS);
        require!(pool_token.is_valid(), ERR_INVALID_TOKEN);
        require!(min_deposit > 0u64 && min_deposit <= max_deposit, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.init_admin(&caller);

        self.loan_registry_address().set(&loan_registry_address);
        self.pool_token().set(&pool_token);
        self.min_deposit().set(&min_deposit);
        self.max_deposit().set(&max_deposit);
        self.total_pooled().set(BigUint::zero());
        self.undistributed_remainder().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ============================
    // Saldos dos credores
    // ============================

    /// Credita o pagamento anexado ao saldo disponível de quem chama
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        self.require_not_paused();

        let payment = self.call_value().egld_or_single_esdt();
        self.require_pool_token(&payment.token_identifier, payment.token_nonce);
        self.require_amount_within_limits(&payment.amount);

        let caller = self.blockchain().get_caller();
        self.lender_balance(&caller).update(|balance| *balance += &payment.amount);
        self.total_pooled().update(|total| *total += &payment.amount);

        self.funds_deposited_event(&caller, &payment.amount);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        self.require_not_paused();
        self.require_amount_within_limits(&amount);

        let caller = self.blockchain().get_caller();
        let balance = self.lender_balance(&caller).get();
        require!(balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.lender_balance(&caller).set(&(balance - &amount));
        self.total_pooled().update(|total| *total -= &amount);

        let token = self.pool_token().get();
        self.send().direct(&caller, &token, 0, &amount);

        self.funds_withdrawn_event(&caller, &amount);
    }

    // ============================
    // Captação
    // ============================

    /// Compromete parte do saldo de quem chama com um empréstimo pendente.
    /// Quando a captação alcança o principal, o empréstimo é ativado no
    /// registro e o principal é enviado ao tomador na mesma transação.
    #[endpoint(fundLoan)]
    fn fund_loan(&self, loan_id: u64, amount: BigUint) -> bool {
        self.require_not_paused();
        require!(
            amount > 0u64 && amount <= self.max_deposit().get(),
            ERR_INVALID_AMOUNT
        );

        let loan = self.require_loan(loan_id);
        require!(loan.status == LoanStatus::Pending, ERR_LOAN_NOT_PENDING);
        self.require_linked_to_self(&loan);

        let mut record = self.funding_or_default(loan_id);
        require!(!record.funded, ERR_ALREADY_FUNDED);

        let caller = self.blockchain().get_caller();
        let balance = self.lender_balance(&caller).get();
        require!(balance >= amount, ERR_INSUFFICIENT_BALANCE);

        let remaining = &loan.amount - &record.total_funded;
        require!(amount <= remaining, ERR_INVALID_AMOUNT);

        self.lender_balance(&caller).set(&(balance - &amount));
        self.total_pooled().update(|total| *total -= &amount);
        self.contributions(&caller, loan_id)
            .update(|contribution| *contribution += &amount);
        self.loan_lenders(loan_id).insert(caller.clone());

        record.total_funded += &amount;
        if record.total_funded == loan.amount {
            record.funded = true;
        }
        self.funding(loan_id).set(&record);

        self.loan_funded_event(loan_id, &caller, &amount);

        if record.funded {
            self.activate_loan(&loan);
        }

        true
    }

    /// Devolve ao saldo de quem chama toda a sua contribuição para um
    /// empréstimo que não completou a captação no ledger. Vale para qualquer
    /// status do registro: se o administrador mudou o status antes da
    /// captação terminar, o principal nunca saiu do contrato.
    #[endpoint(unfundLoan)]
    fn unfund_loan(&self, loan_id: u64) -> BigUint {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let contribution = self.contributions(&caller, loan_id).get();
        require!(contribution > 0u64, ERR_CONTRIBUTION_NOT_FOUND);

        // Captação completa: o principal já foi entregue ao tomador
        let mut record = self.funding_or_default(loan_id);
        require!(!record.funded, ERR_LOAN_NOT_PENDING);

        record.total_funded -= &contribution;
        self.funding(loan_id).set(&record);
        self.contributions(&caller, loan_id).clear();
        self.loan_lenders(loan_id).swap_remove(&caller);

        self.lender_balance(&caller).update(|balance| *balance += &contribution);
        self.total_pooled().update(|total| *total += &contribution);

        self.contribution_withdrawn_event(loan_id, &caller, &contribution);

        contribution
    }

    // ============================
    // Liquidação
    // ============================

    /// Reparte o pagamento anexado entre os credores do empréstimo, na
    /// proporção de cada contribuição. O resto do arredondamento fica
    /// acumulado no contrato. Quando o total liquidado alcança o valor
    /// devido, o empréstimo passa a Repaid no registro.
    #[payable("*")]
    #[endpoint(distributeRepayment)]
    fn distribute_repayment(&self, loan_id: u64, repayment_amount: BigUint) -> bool {
        self.require_not_paused();
        self.require_admin();

        let payment = self.call_value().egld_or_single_esdt();
        self.require_pool_token(&payment.token_identifier, payment.token_nonce);
        require!(
            repayment_amount > 0u64 && payment.amount == repayment_amount,
            ERR_INVALID_AMOUNT
        );

        let loan = self.require_loan(loan_id);
        require!(loan.status == LoanStatus::Active, ERR_LOAN_NOT_ACTIVE);

        // Só empréstimos cujo principal foi desembolsado pelo ledger
        let mut record = self.funding_or_default(loan_id);
        require!(record.funded && record.total_funded > 0u64, ERR_NO_FUNDING);

        let mut distributed = BigUint::zero();
        for lender in self.loan_lenders(loan_id).iter() {
            let contribution = self.contributions(&lender, loan_id).get();
            if contribution == 0u64 {
                continue;
            }

            let share = &repayment_amount * &contribution / &record.total_funded;
            if share == 0u64 {
                continue;
            }

            self.lender_balance(&lender).update(|balance| *balance += &share);
            distributed += &share;
            self.repayment_share_credited_event(loan_id, &lender, &share);
        }

        let remainder = &repayment_amount - &distributed;
        self.total_pooled().update(|total| *total += &distributed);
        if remainder > 0u64 {
            self.undistributed_remainder()
                .update(|accumulated| *accumulated += &remainder);
        }

        record.total_settled += &repayment_amount;
        self.funding(loan_id).set(&record);

        self.repayment_distributed_event(loan_id, &repayment_amount, &record.total_settled);

        if record.total_settled >= loan.total_owed() {
            self.update_registry_status(loan_id, LoanStatus::Repaid);
        }

        true
    }

    /// Envia ao administrador o resto acumulado dos arredondamentos
    #[endpoint(claimUndistributedRemainder)]
    fn claim_undistributed_remainder(&self) -> BigUint {
        self.require_not_paused();
        self.require_admin();

        let amount = self.undistributed_remainder().get();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        self.undistributed_remainder().set(BigUint::zero());

        let caller = self.blockchain().get_caller();
        let token = self.pool_token().get();
        self.send().direct(&caller, &token, 0, &amount);

        self.remainder_claimed_event(&caller, &amount);

        amount
    }

    #[endpoint(setDepositLimits)]
    fn set_deposit_limits(&self, min_deposit: BigUint, max_deposit: BigUint) {
        self.require_admin();
        require!(min_deposit > 0u64 && min_deposit <= max_deposit, ERR_INVALID_AMOUNT);

        self.min_deposit().set(&min_deposit);
        self.max_deposit().set(&max_deposit);
        self.deposit_limits_updated_event(&min_deposit, &max_deposit);
    }

    // ============================
    // Consultas
    // ============================

    #[view(getLenderBalance)]
    fn get_lender_balance(&self, lender: ManagedAddress) -> BigUint {
        self.lender_balance(&lender).get()
    }

    #[view(getLoanFunding)]
    fn get_loan_funding(&self, loan_id: u64) -> FundingRecord<Self::Api> {
        require!(!self.funding(loan_id).is_empty(), ERR_FUNDING_NOT_FOUND);
        self.funding(loan_id).get()
    }

    #[view(getContribution)]
    fn get_contribution(&self, lender: ManagedAddress, loan_id: u64) -> BigUint {
        self.contributions(&lender, loan_id).get()
    }

    #[view(getLoanLenders)]
    fn get_loan_lenders(&self, loan_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for lender in self.loan_lenders(loan_id).iter() {
            result.push(lender);
        }
        result
    }

    // ============================
    // Funções internas
    // ============================

    fn require_pool_token(&self, token: &EgldOrEsdtTokenIdentifier, nonce: u64) {
        require!(
            *token == self.pool_token().get() && nonce == 0,
            ERR_INVALID_TOKEN
        );
    }

    fn require_amount_within_limits(&self, amount: &BigUint) {
        require!(
            *amount >= self.min_deposit().get() && *amount <= self.max_deposit().get(),
            ERR_INVALID_AMOUNT
        );
    }

    // Empréstimos vinculados a outro ledger não podem ser captados aqui
    fn require_linked_to_self(&self, loan: &Loan<Self::Api>) {
        if let Some(ledger) = &loan.ledger_contract {
            require!(
                *ledger == self.blockchain().get_sc_address(),
                ERR_INVALID_CONTRACT
            );
        }
    }

    fn require_loan(&self, loan_id: u64) -> Loan<Self::Api> {
        let registry = self.loan_registry_address().get();
        let found = self
            .tx()
            .to(&registry)
            .typed(loan_registry_proxy::LoanRegistryProxy)
            .find_loan(loan_id)
            .returns(ReturnsResult)
            .sync_call_readonly();

        match found {
            Some(loan) => loan,
            None => sc_panic!(ERR_LOAN_NOT_FOUND),
        }
    }

    fn funding_or_default(&self, loan_id: u64) -> FundingRecord<Self::Api> {
        if self.funding(loan_id).is_empty() {
            return FundingRecord::default();
        }
        self.funding(loan_id).get()
    }

    fn activate_loan(&self, loan: &Loan<Self::Api>) {
        self.update_registry_status(loan.id, LoanStatus::Active);

        let token = self.pool_token().get();
        self.send().direct(&loan.borrower, &token, 0, &loan.amount);

        self.loan_activated_event(loan.id, &loan.borrower, &loan.amount);
    }

    fn update_registry_status(&self, loan_id: u64, status: LoanStatus) {
        let registry = self.loan_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(loan_registry_proxy::LoanRegistryProxy)
            .update_loan_status(loan_id, status)
            .sync_call();
    }

    // ============================
    // Eventos
    // ============================

    #[event("funds_deposited")]
    fn funds_deposited_event(&self, #[indexed] lender: &ManagedAddress, amount: &BigUint);

    #[event("funds_withdrawn")]
    fn funds_withdrawn_event(&self, #[indexed] lender: &ManagedAddress, amount: &BigUint);

    #[event("loan_funded")]
    fn loan_funded_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] lender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("loan_activated")]
    fn loan_activated_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] borrower: &ManagedAddress,
        principal: &BigUint,
    );

    #[event("contribution_withdrawn")]
    fn contribution_withdrawn_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] lender: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("repayment_share_credited")]
    fn repayment_share_credited_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] lender: &ManagedAddress,
        share: &BigUint,
    );

    #[event("repayment_distributed")]
    fn repayment_distributed_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] amount: &BigUint,
        total_settled: &BigUint,
    );

    #[event("remainder_claimed")]
    fn remainder_claimed_event(&self, #[indexed] admin: &ManagedAddress, amount: &BigUint);

    #[event("deposit_limits_updated")]
    fn deposit_limits_updated_event(
        &self,
        #[indexed] min_deposit: &BigUint,
        #[indexed] max_deposit: &BigUint,
    );

    // ============================
    // Storage
    // ============================

    #[view(getLoanRegistryAddress)]
    #[storage_mapper("loan_registry_address")]
    fn loan_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPoolToken)]
    #[storage_mapper("pool_token")]
    fn pool_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getMinDeposit)]
    #[storage_mapper("min_deposit")]
    fn min_deposit(&self) -> SingleValueMapper<BigUint>;

    #[view(getMaxDeposit)]
    #[storage_mapper("max_deposit")]
    fn max_deposit(&self) -> SingleValueMapper<BigUint>;

    // Soma dos saldos disponíveis de todos os credores
    #[view(getTotalPooled)]
    #[storage_mapper("total_pooled")]
    fn total_pooled(&self) -> SingleValueMapper<BigUint>;

    #[view(getUndistributedRemainder)]
    #[storage_mapper("undistributed_remainder")]
    fn undistributed_remainder(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lender_balance")]
    fn lender_balance(&self, lender: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("contributions")]
    fn contributions(&self, lender: &ManagedAddress, loan_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("funding")]
    fn funding(&self, loan_id: u64) -> SingleValueMapper<FundingRecord<Self::Api>>;

    #[storage_mapper("loan_lenders")]
    fn loan_lenders(&self, loan_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
