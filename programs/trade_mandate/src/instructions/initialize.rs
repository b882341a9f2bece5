use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::constants::BOT_CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::instructions::delegation::approve_to_config;
use crate::state::BotConfig;

/// Create the per-owner bot configuration.
/// Idempotent-rejecting: a second creation for the same owner fails without
/// touching the stored record.
pub fn initialize_bot(
    ctx: Context<InitializeBot>,
    backend_authority: Pubkey,
    max_trade_amount: u64,
    max_slippage_bps: u16,
) -> Result<()> {
    BotConfig::validate_slippage(max_slippage_bps)?;

    let bot_config = &mut ctx.accounts.bot_config;
    // A freshly allocated init_if_needed account is still zeroed.
    require!(
        bot_config.owner == Pubkey::default(),
        ErrorCode::AlreadyInitialized
    );

    populate(
        bot_config,
        ctx.accounts.owner.key(),
        backend_authority,
        max_trade_amount,
        max_slippage_bps,
        ctx.bumps.bot_config,
    );

    Ok(())
}

/// Create (if absent) and grant the standing delegation in one owner-signed
/// transaction. Splitting this into two round trips loses users between
/// signatures, so the handshake is a single submission.
pub fn initialize_bot_with_delegation(
    ctx: Context<InitializeBotWithDelegation>,
    backend_authority: Pubkey,
    max_trade_amount: u64,
    max_slippage_bps: u16,
    approve_amount: u64,
) -> Result<()> {
    BotConfig::validate_slippage(max_slippage_bps)?;

    // Existence probe, not create-and-catch: init_if_needed loads the record
    // when it already exists, and a fresh one is still zeroed.
    let is_fresh = ctx.accounts.bot_config.owner == Pubkey::default();
    if is_fresh {
        let bump = ctx.bumps.bot_config;
        let bot_config = &mut ctx.accounts.bot_config;
        populate(
            bot_config,
            ctx.accounts.owner.key(),
            backend_authority,
            max_trade_amount,
            max_slippage_bps,
            bump,
        );
    } else {
        msg!("Bot config already exists, approving delegation only");
    }

    approve_to_config(
        &ctx.accounts.owner,
        &ctx.accounts.owner_token_account,
        &ctx.accounts.bot_config,
        &ctx.accounts.token_program,
        approve_amount,
    )
}

fn populate(
    bot_config: &mut BotConfig,
    owner: Pubkey,
    backend_authority: Pubkey,
    max_trade_amount: u64,
    max_slippage_bps: u16,
    bump: u8,
) {
    bot_config.owner = owner;
    bot_config.backend_authority = backend_authority;
    bot_config.max_trade_amount = max_trade_amount;
    bot_config.max_slippage_bps = max_slippage_bps;
    bot_config.is_active = true;
    bot_config.trades_executed = 0;
    bot_config.bump = bump;

    msg!(
        "Bot initialized for owner: {}, backend_authority: {}, max_trade_amount: {}, max_slippage: {}bps",
        owner,
        backend_authority,
        max_trade_amount,
        max_slippage_bps
    );
}

#[derive(Accounts)]
pub struct InitializeBot<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = BotConfig::INIT_SPACE,
        seeds = [BOT_CONFIG_SEED, owner.key().as_ref()],
        bump
    )]
    pub bot_config: Account<'info, BotConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InitializeBotWithDelegation<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = BotConfig::INIT_SPACE,
        seeds = [BOT_CONFIG_SEED, owner.key().as_ref()],
        bump
    )]
    pub bot_config: Account<'info, BotConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: probed in the handler; a missing account must surface as
    /// TokenAccountNotFound rather than a deserialization failure.
    #[account(mut)]
    pub owner_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
