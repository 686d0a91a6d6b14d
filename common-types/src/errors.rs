// Mensagens de erro compartilhadas entre os contratos.
// Cada constante corresponde a uma categoria da taxonomia de erros da plataforma.

// Autorização
pub const ERR_NOT_AUTHORIZED: &str = "not authorized";

// Validação
pub const ERR_INVALID_AMOUNT: &str = "invalid amount";
pub const ERR_INVALID_DURATION: &str = "invalid duration";
pub const ERR_INVALID_INTEREST_RATE: &str = "invalid interest rate";
pub const ERR_INVALID_STATUS: &str = "invalid loan status";
pub const ERR_ZERO_ADDRESS: &str = "zero address not allowed";
pub const ERR_INVALID_CONTRACT: &str = "invalid contract";
pub const ERR_INVALID_TOKEN: &str = "invalid payment token";

// Não encontrado
pub const ERR_LOAN_NOT_FOUND: &str = "loan not found";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal not found";
pub const ERR_FUNDING_NOT_FOUND: &str = "funding record not found";
pub const ERR_VOTE_NOT_FOUND: &str = "vote not found";
pub const ERR_CONTRIBUTION_NOT_FOUND: &str = "contribution not found";

// Conflito de estado
pub const ERR_LOAN_NOT_ACTIVE: &str = "loan not active";
pub const ERR_LOAN_NOT_PENDING: &str = "loan not pending";
pub const ERR_ALREADY_FUNDED: &str = "loan already funded";
pub const ERR_NO_FUNDING: &str = "loan has no funding";
pub const ERR_CONTRACTS_ALREADY_SET: &str = "loan contracts already set";
pub const ERR_ALREADY_VOTED: &str = "already voted";
pub const ERR_VOTING_CLOSED: &str = "voting closed";
pub const ERR_VOTING_NOT_ENDED: &str = "voting period not ended";
pub const ERR_PROPOSAL_INACTIVE: &str = "proposal inactive";
pub const ERR_PROPOSAL_NOT_PASSED: &str = "proposal did not pass";

// Disponibilidade
pub const ERR_PAUSED: &str = "contract is paused";

// Recursos
pub const ERR_INSUFFICIENT_BALANCE: &str = "insufficient balance";
