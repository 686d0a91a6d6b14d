multiversx_sc::imports!();

use crate::errors::{ERR_NOT_AUTHORIZED, ERR_PAUSED, ERR_ZERO_ADDRESS};

/// Superfície administrativa comum a todos os contratos da plataforma:
/// administrador único, transferência de administração e pausa de emergência.
#[multiversx_sc::module]
pub trait AdminModule {
    /// Define o administrador inicial e deixa o contrato ativo.
    /// Deve ser chamado pelo `#[init]` de cada contrato.
    fn init_admin(&self, admin: &ManagedAddress) {
        self.admin().set(admin);
        self.paused().set(false);
    }

    /// Pausa ou despausa todas as operações que alteram estado
    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.require_admin();
        self.paused().set(paused);
        self.paused_changed_event(paused);
    }

    /// Transfere a administração para outro endereço (nunca o endereço nulo)
    #[endpoint(transferAdmin)]
    fn transfer_admin(&self, new_admin: ManagedAddress) {
        self.require_admin();
        require!(!new_admin.is_zero(), ERR_ZERO_ADDRESS);

        let previous_admin = self.admin().get();
        self.admin().set(&new_admin);
        self.admin_transferred_event(&previous_admin, &new_admin);
    }

    fn is_admin(&self, address: &ManagedAddress) -> bool {
        *address == self.admin().get()
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_admin(&caller), ERR_NOT_AUTHORIZED);
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[event("paused_changed")]
    fn paused_changed_event(&self, #[indexed] paused: bool);

    #[event("admin_transferred")]
    fn admin_transferred_event(
        &self,
        #[indexed] previous_admin: &ManagedAddress,
        #[indexed] new_admin: &ManagedAddress,
    );
}
