use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You are not authorized to perform this action.")]
    Unauthorized,
    #[msg("Bot configuration already exists for this owner.")]
    AlreadyInitialized,
    #[msg("Invalid slippage (must be <= 10000 bps).")]
    InvalidSlippage,
    #[msg("The bot is not active.")]
    BotNotActive,
    #[msg("Trade amount exceeds the configured per-trade limit.")]
    AmountExceedsLimit,
    #[msg("Owner has no token account for this asset. Create the associated token account first.")]
    TokenAccountNotFound,
    #[msg("Standing delegation is missing, revoked, or smaller than the requested trade.")]
    InsufficientDelegatedAllowance,
    #[msg("Liquidity venue call failed or returned less than minimum_amount_out.")]
    ExternalVenueFailure,
    #[msg("Venue drew more input tokens than the declared amount_in.")]
    ExcessiveInputSpent,
    #[msg("Token account is not owned by the addressed owner.")]
    InvalidTokenAccountOwner,
    #[msg("Unrecognized liquidity venue program.")]
    InvalidVenueProgram,
    #[msg("Mint mismatch between user token account and pool vault.")]
    MintMismatch,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
