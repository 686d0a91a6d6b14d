#![no_std]

// Importações completas do MultiversX SC
multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod admin;
pub mod config;
pub mod errors;

use config::BPS_DENOMINATOR;

/// Ciclo de vida de um empréstimo: Pending -> Active -> {Repaid, Defaulted}.
/// Repaid e Defaulted são terminais.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoanStatus {
    Pending,
    Active,
    Repaid,
    Defaulted,
}

impl LoanStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoanStatus::Repaid | LoanStatus::Defaulted)
    }
}

/// Termos de registro de um empréstimo, mantidos pelo LoanRegistry
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Loan<M: ManagedTypeApi> {
    pub id: u64,
    pub borrower: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub interest_rate: u64,   // pontos base
    pub duration: u64,        // em blocos
    pub start_block: u64,
    pub deadline_block: u64,
    pub status: LoanStatus,
    pub total_repaid: BigUint<M>,
    pub ledger_contract: Option<ManagedAddress<M>>,
    pub collateral_contract: Option<ManagedAddress<M>>,
}

impl<M: ManagedTypeApi> Loan<M> {
    pub fn interest_amount(&self) -> BigUint<M> {
        &self.amount * &BigUint::from(self.interest_rate) / &BigUint::from(BPS_DENOMINATOR)
    }

    /// Principal mais juros
    pub fn total_owed(&self) -> BigUint<M> {
        &self.amount + &self.interest_amount()
    }

    /// Apenas informativo: nenhum empréstimo passa a Defaulted sozinho.
    pub fn is_overdue(&self, current_block: u64) -> bool {
        self.status == LoanStatus::Active && current_block > self.deadline_block
    }
}

/// Estado de captação e liquidação de um empréstimo no FundLedger
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct FundingRecord<M: ManagedTypeApi> {
    pub total_funded: BigUint<M>,
    pub funded: bool,
    pub total_settled: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for FundingRecord<M> {
    fn default() -> Self {
        FundingRecord {
            total_funded: BigUint::zero(),
            funded: false,
            total_settled: BigUint::zero(),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub target_contract: ManagedAddress<M>,
    pub target_operation: ManagedBuffer<M>,
    pub parameter: u64,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub start_block: u64,
    pub end_block: u64,
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_votes(&self) -> BigUint<M> {
        &self.votes_for + &self.votes_against
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub in_favor: bool,
    pub tokens: BigUint<M>,
}

/// Estado derivado de uma proposta (não é armazenado)
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    Open,
    Passed,
    Failed,
    Executed,
}
