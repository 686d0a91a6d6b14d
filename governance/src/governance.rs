// ==========================================================================
// MÓDULO: governance/src/governance.rs
// Descrição: Propostas, votação ponderada pelo token de governança e
//            execução de alterações de parâmetros nos contratos da plataforma
// ==========================================================================

#![no_std]

multiversx_sc::imports!();

pub mod governance_proxy;

use common_types::admin;
use common_types::config::BPS_DENOMINATOR;
use common_types::errors::*;
use common_types::{Proposal, ProposalState, VoteRecord};
use governance_token::governance_token_proxy;

#[multiversx_sc::contract]
pub trait Governance: admin::AdminModule {
    #[init]
    fn init(
        &self,
        governance_token: ManagedAddress,
        loan_registry: ManagedAddress,
        collateral_manager: ManagedAddress,
        voting_period: u64,
        quorum_bps: u64,
        min_proposal_threshold: BigUint,
    ) {
        require!(
            !governance_token.is_zero() && !loan_registry.is_zero() && !collateral_manager.is_zero(),
            ERR_ZERO_ADDRESS
        );
        require!(voting_period > 0, ERR_INVALID_DURATION);
        require!(quorum_bps > 0 && quorum_bps <= BPS_DENOMINATOR, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.init_admin(&caller);

        self.governance_token().set(&governance_token);
        self.loan_registry().set(&loan_registry);
        self.collateral_manager().set(&collateral_manager);
        self.voting_period().set(voting_period);
        self.quorum_bps().set(quorum_bps);
        self.min_proposal_threshold().set(&min_proposal_threshold);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ============================
    // Propostas
    // ============================

    /// Abre uma proposta de alteração de parâmetro. A janela de votação vai
    /// do bloco atual até `bloco atual + voting_period`.
    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        description: ManagedBuffer,
        target_contract: ManagedAddress,
        target_operation: ManagedBuffer,
        parameter: u64,
    ) -> u64 {
        self.require_not_paused();
        require!(!target_contract.is_zero(), ERR_ZERO_ADDRESS);

        let caller = self.blockchain().get_caller();
        require!(
            self.token_balance(&caller) >= self.min_proposal_threshold().get(),
            ERR_INSUFFICIENT_BALANCE
        );

        let proposal_id = self.proposal_counter().get() + 1;
        self.proposal_counter().set(proposal_id);

        let start_block = self.blockchain().get_block_nonce();
        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            target_contract,
            target_operation,
            parameter,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            start_block,
            end_block: start_block + self.voting_period().get(),
            executed: false,
        };
        self.proposals(proposal_id).set(&proposal);

        self.proposal_created_event(
            proposal_id,
            &caller,
            &proposal.target_contract,
            &proposal.target_operation,
            proposal.end_block,
        );

        proposal_id
    }

    /// Registra o voto de quem chama. O peso é conferido contra o saldo
    /// atual de tokens, sem bloqueio: o mesmo saldo pode votar em várias
    /// propostas abertas.
    #[endpoint]
    fn vote(&self, proposal_id: u64, in_favor: bool, tokens: BigUint) -> bool {
        self.require_not_paused();
        require!(tokens > 0u64, ERR_INVALID_AMOUNT);

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            self.blockchain().get_block_nonce() < proposal.end_block,
            ERR_VOTING_CLOSED
        );
        require!(!proposal.executed, ERR_PROPOSAL_INACTIVE);

        let caller = self.blockchain().get_caller();
        require!(self.votes(proposal_id, &caller).is_empty(), ERR_ALREADY_VOTED);
        require!(self.token_balance(&caller) >= tokens, ERR_INSUFFICIENT_BALANCE);

        if in_favor {
            proposal.votes_for += &tokens;
        } else {
            proposal.votes_against += &tokens;
        }
        self.proposals(proposal_id).set(&proposal);
        self.votes(proposal_id, &caller).set(VoteRecord {
            in_favor,
            tokens: tokens.clone(),
        });

        self.vote_cast_event(proposal_id, &caller, in_favor, &tokens);
        true
    }

    /// Executa uma proposta aprovada: marca como executada e faz uma única
    /// chamada síncrona `target_operation(parameter)` no contrato alvo.
    /// Se a chamada falhar, a transação inteira é revertida.
    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) -> bool {
        self.require_not_paused();

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            self.blockchain().get_block_nonce() >= proposal.end_block,
            ERR_VOTING_NOT_ENDED
        );
        require!(!proposal.executed, ERR_PROPOSAL_INACTIVE);
        require!(self.has_passed(&proposal), ERR_PROPOSAL_NOT_PASSED);
        require!(
            proposal.target_contract == self.loan_registry().get()
                || proposal.target_contract == self.collateral_manager().get(),
            ERR_INVALID_CONTRACT
        );

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        self.tx()
            .to(&proposal.target_contract)
            .raw_call(proposal.target_operation.clone())
            .argument(&proposal.parameter)
            .sync_call();

        self.proposal_executed_event(
            proposal_id,
            &proposal.target_contract,
            &proposal.target_operation,
            proposal.parameter,
        );
        true
    }

    // ============================
    // Configuração (administrador)
    // ============================

    #[endpoint(setVotingPeriod)]
    fn set_voting_period(&self, voting_period: u64) {
        self.require_admin();
        require!(voting_period > 0, ERR_INVALID_DURATION);
        self.voting_period().set(voting_period);
    }

    #[endpoint(setQuorumBps)]
    fn set_quorum_bps(&self, quorum_bps: u64) {
        self.require_admin();
        require!(quorum_bps > 0 && quorum_bps <= BPS_DENOMINATOR, ERR_INVALID_AMOUNT);
        self.quorum_bps().set(quorum_bps);
    }

    #[endpoint(setMinProposalThreshold)]
    fn set_min_proposal_threshold(&self, threshold: BigUint) {
        self.require_admin();
        self.min_proposal_threshold().set(&threshold);
    }

    // ============================
    // Consultas
    // ============================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getVoterDetails)]
    fn get_voter_details(&self, proposal_id: u64, voter: ManagedAddress) -> VoteRecord<Self::Api> {
        require!(!self.votes(proposal_id, &voter).is_empty(), ERR_VOTE_NOT_FOUND);
        self.votes(proposal_id, &voter).get()
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        let proposal = self.require_proposal(proposal_id);
        if proposal.executed {
            return ProposalState::Executed;
        }
        if self.blockchain().get_block_nonce() < proposal.end_block {
            return ProposalState::Open;
        }
        if self.has_passed(&proposal) {
            ProposalState::Passed
        } else {
            ProposalState::Failed
        }
    }

    // ============================
    // Funções internas
    // ============================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(!self.proposals(proposal_id).is_empty(), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(proposal_id).get()
    }

    // Quórum sobre o suprimento total e maioria estrita a favor
    fn has_passed(&self, proposal: &Proposal<Self::Api>) -> bool {
        let weighted_votes = proposal.total_votes() * BigUint::from(BPS_DENOMINATOR);
        let required = self.token_total_supply() * BigUint::from(self.quorum_bps().get());
        let quorum_reached = weighted_votes >= required;

        quorum_reached && proposal.votes_for > proposal.votes_against
    }

    fn token_balance(&self, address: &ManagedAddress) -> BigUint {
        let token = self.governance_token().get();
        self.tx()
            .to(&token)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .balance_of(address)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn token_total_supply(&self) -> BigUint {
        let token = self.governance_token().get();
        self.tx()
            .to(&token)
            .typed(governance_token_proxy::GovernanceTokenProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ============================
    // Eventos
    // ============================

    #[event("proposal_created")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] target_contract: &ManagedAddress,
        #[indexed] target_operation: &ManagedBuffer,
        end_block: u64,
    );

    #[event("vote_cast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] in_favor: bool,
        tokens: &BigUint,
    );

    #[event("proposal_executed")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] target_contract: &ManagedAddress,
        #[indexed] target_operation: &ManagedBuffer,
        parameter: u64,
    );

    // ============================
    // Storage
    // ============================

    #[view(getProposalCount)]
    #[storage_mapper("proposal_counter")]
    fn proposal_counter(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("votes")]
    fn votes(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;

    #[view(getGovernanceToken)]
    #[storage_mapper("governance_token")]
    fn governance_token(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLoanRegistry)]
    #[storage_mapper("loan_registry")]
    fn loan_registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCollateralManager)]
    #[storage_mapper("collateral_manager")]
    fn collateral_manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getVotingPeriod)]
    #[storage_mapper("voting_period")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    #[view(getQuorumBps)]
    #[storage_mapper("quorum_bps")]
    fn quorum_bps(&self) -> SingleValueMapper<u64>;

    #[view(getMinProposalThreshold)]
    #[storage_mapper("min_proposal_threshold")]
    fn min_proposal_threshold(&self) -> SingleValueMapper<BigUint>;
}
