// Parâmetros padrão da plataforma.
// Os limites de risco são apenas valores iniciais: o registro de empréstimos
// guarda os valores correntes em storage e a governança pode alterá-los.

/// Base dos pontos base (10000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const DEFAULT_MIN_LOAN_AMOUNT: u64 = 100;
pub const DEFAULT_MAX_LOAN_AMOUNT: u64 = 1_000_000_000_000;

/// 1% a 50% em pontos base
pub const DEFAULT_MIN_INTEREST_RATE: u64 = 100;
pub const DEFAULT_MAX_INTEREST_RATE: u64 = 5_000;

/// Duração em blocos: de ~1 dia a ~1 ano (blocos de 10 minutos)
pub const DEFAULT_MIN_DURATION: u64 = 144;
pub const DEFAULT_MAX_DURATION: u64 = 52_560;

pub const DEFAULT_VOTING_PERIOD: u64 = 1_440;
pub const DEFAULT_QUORUM_BPS: u64 = 5_000;
pub const DEFAULT_MIN_PROPOSAL_THRESHOLD: u64 = 1_000_000;

/// Parâmetros iniciais do gerenciador de garantias, em pontos base
pub const DEFAULT_COLLATERAL_RATIO: u64 = 15_000;
pub const DEFAULT_LIQUIDATION_THRESHOLD: u64 = 8_000;
pub const DEFAULT_LIQUIDATION_DISCOUNT: u64 = 500;
/// Garantia máxima exigida: 5x o principal
pub const MAX_COLLATERAL_RATIO: u64 = 50_000;
