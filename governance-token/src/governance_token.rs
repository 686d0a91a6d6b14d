// ==========================================================================
// MÓDULO: governance-token/src/governance_token.rs
// Descrição: Token fungível simples usado como peso de voto na governança
//            da plataforma de empréstimos
// ==========================================================================

#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod governance_token_proxy;

use common_types::admin;
use common_types::errors::{ERR_INSUFFICIENT_BALANCE, ERR_INVALID_AMOUNT, ERR_ZERO_ADDRESS};

/// Estrutura que armazena as informações básicas do token
/// - name: Nome do token
/// - ticker: Símbolo/código do token (ex: GOV)
/// - decimals: Número de casas decimais
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct TokenInfo<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub ticker: ManagedBuffer<M>,
    pub decimals: u8,
}

/// Contrato do token de governança.
/// Os saldos são consultados pelo contrato de governança para validar
/// propostas e votos.
#[multiversx_sc::contract]
pub trait GovernanceToken: admin::AdminModule {
    /// Função de inicialização que é chamada uma única vez quando o contrato é deployado
    /// @param initial_supply: Quantidade inicial de tokens, atribuída a quem faz o deploy
    /// @param token_name: Nome completo do token
    /// @param token_ticker: Símbolo/código do token
    /// @param token_decimals: Número de casas decimais do token
    #[init]
    fn init(
        &self,
        initial_supply: BigUint,
        token_name: ManagedBuffer,
        token_ticker: ManagedBuffer,
        token_decimals: u8,
    ) {
        let token_info = TokenInfo {
            name: token_name,
            ticker: token_ticker,
            decimals: token_decimals,
        };
        self.token_info().set(&token_info);

        // Quem faz o deploy administra o token e recebe o suprimento inicial
        let caller = self.blockchain().get_caller();
        self.init_admin(&caller);
        self.total_token_supply().set(BigUint::zero());
        self.mint(&caller, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ======== FUNÇÕES DE VISUALIZAÇÃO (VIEW) ========

    /// Retorna o nome completo do token
    #[view(getName)]
    fn get_name(&self) -> ManagedBuffer {
        self.token_info().get().name
    }

    /// Retorna o símbolo/ticker do token
    #[view(getTicker)]
    fn get_ticker(&self) -> ManagedBuffer {
        self.token_info().get().ticker
    }

    /// Retorna o número de casas decimais do token
    #[view(getDecimals)]
    fn get_decimals(&self) -> u8 {
        self.token_info().get().decimals
    }

    /// Retorna o suprimento total de tokens em circulação
    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.total_token_supply().get()
    }

    /// Retorna o saldo de tokens de um endereço (zero se nunca recebeu tokens)
    /// @param address: Endereço a consultar
    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balances(&address).get()
    }

    // ======== TRANSFERÊNCIAS ========

    /// Transfere tokens de quem chama para outro endereço.
    /// Bloqueada enquanto o contrato estiver pausado.
    /// @param to: Endereço de destino
    /// @param amount: Quantidade de tokens a transferir
    #[endpoint]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        self.require_not_paused();
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.perform_transfer(&caller, &to, &amount);
    }

    // ======== FUNÇÕES DE MINT (CRIAR) E BURN (DESTRUIR) TOKENS ========

    /// Cria novos tokens e os atribui a um endereço (somente administrador)
    /// @param to: Endereço que receberá os novos tokens
    /// @param amount: Quantidade de tokens a criar
    #[endpoint(mint)]
    fn mint_endpoint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_not_paused();
        self.require_admin();
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.mint(&to, &amount);
    }

    /// Destrói tokens de um endereço específico (somente administrador)
    /// @param address: Endereço de onde os tokens serão destruídos
    /// @param amount: Quantidade de tokens a destruir
    #[endpoint(burn)]
    fn burn_endpoint(&self, address: ManagedAddress, amount: BigUint) {
        self.require_not_paused();
        self.require_admin();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.burn(&address, &amount);
    }

    /// Permite que um usuário destrua seus próprios tokens
    /// @param amount: Quantidade de tokens a destruir
    #[endpoint(burnOwn)]
    fn burn_own(&self, amount: BigUint) {
        self.require_not_paused();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.burn(&caller, &amount);
    }

    // ======== FUNÇÕES INTERNAS (AUXILIARES) ========

    fn mint(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }

        self.balances(to).update(|balance| *balance += amount);
        self.total_token_supply().update(|supply| *supply += amount);

        self.mint_event(to, amount);
    }

    fn burn(&self, address: &ManagedAddress, amount: &BigUint) {
        let balance = self.balances(address).get();
        require!(&balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(address).set(&(&balance - amount));
        self.total_token_supply().update(|supply| *supply -= amount);

        self.burn_event(address, amount);
    }

    fn perform_transfer(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let balance = self.balances(from).get();
        require!(&balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(from).set(&(&balance - amount));
        self.balances(to).update(|to_balance| *to_balance += amount);

        self.transfer_event(from, to, amount);
    }

    // ======== DEFINIÇÃO DE EVENTOS ========

    /// Evento emitido quando tokens são transferidos
    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    /// Evento emitido quando novos tokens são criados
    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, #[indexed] amount: &BigUint);

    /// Evento emitido quando tokens são destruídos
    #[event("burn")]
    fn burn_event(&self, #[indexed] from: &ManagedAddress, #[indexed] amount: &BigUint);

    // ======== DEFINIÇÃO DE STORAGE ========

    /// Informações básicas do token (nome, ticker, decimais)
    #[storage_mapper("token_info")]
    fn token_info(&self) -> SingleValueMapper<TokenInfo<Self::Api>>;

    /// Suprimento total de tokens em circulação
    #[storage_mapper("total_supply")]
    fn total_token_supply(&self) -> SingleValueMapper<BigUint>;

    /// Saldo de tokens de cada endereço
    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
