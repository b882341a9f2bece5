use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{BOT_CONFIG_SEED, VENUE_PROGRAM_ID};
use crate::delegation;
use crate::errors::ErrorCode;
use crate::state::BotConfig;
use crate::venue;

/// Backend-signed commitment to a trade before the venue interaction.
/// Validates, emits the intent, moves no value and mutates no state. The
/// same checks run again in execute_swap; a passed authorize is never
/// trusted across the gap.
pub fn authorize_swap(
    ctx: Context<AuthorizeSwap>,
    amount_in: u64,
    minimum_amount_out: u64,
) -> Result<()> {
    let bot_config = &ctx.accounts.bot_config;
    bot_config.validate_trade(amount_in)?;

    emit!(SwapAuthorized {
        owner: bot_config.owner,
        backend_authority: bot_config.backend_authority,
        amount_in,
        minimum_amount_out,
    });
    msg!(
        "Swap authorized. Owner: {}, Amount In: {}, Min Out: {}",
        bot_config.owner,
        amount_in,
        minimum_amount_out
    );
    Ok(())
}

/// Backend-signed execution against the liquidity venue.
/// The config PDA, as the owner's standing delegate, signs the venue CPI;
/// funds move straight between the owner's token accounts and the pool.
/// All or nothing: a venue failure or an under-delivery aborts the whole
/// transaction, counter included.
pub fn execute_swap(
    ctx: Context<ExecuteSwap>,
    amount_in: u64,
    minimum_amount_out: u64,
) -> Result<()> {
    // 1. Re-validate everything authorize_swap checked; the owner may have
    //    deactivated the bot or tightened the limits in between.
    ctx.accounts.bot_config.validate_trade(amount_in)?;

    // 2. The standing allowance must name this config and cover the trade.
    //    The owner can still revoke before the CPI lands; the token program
    //    then fails the transfer and the whole transaction with it.
    let config_key = ctx.accounts.bot_config.key();
    let delegate = match ctx.accounts.user_token_in.delegate {
        COption::Some(delegate) => Some(delegate),
        COption::None => None,
    };
    delegation::require_allowance(
        delegate,
        ctx.accounts.user_token_in.delegated_amount,
        &config_key,
        amount_in,
    )?;

    // 3. Balance snapshots for post-CPI verification.
    let balance_in_before = ctx.accounts.user_token_in.amount;
    let balance_out_before = ctx.accounts.user_token_out.amount;

    // 4. Venue CPI, signed by the config PDA. The backend key never touches
    //    the funds.
    let ix = venue::swap_base_input_instruction(
        &ctx.accounts.venue_program.key(),
        &venue::SwapBaseInputKeys {
            pool_authority: ctx.accounts.pool_authority.key(),
            pool_input_vault: ctx.accounts.pool_input_vault.key(),
            pool_output_vault: ctx.accounts.pool_output_vault.key(),
            user_source: ctx.accounts.user_token_in.key(),
            user_destination: ctx.accounts.user_token_out.key(),
            user_authority: config_key,
            token_program: ctx.accounts.token_program.key(),
        },
        amount_in,
        minimum_amount_out,
    );

    let owner_key = ctx.accounts.bot_config.owner;
    let bump = ctx.accounts.bot_config.bump;
    let seeds = &[BOT_CONFIG_SEED, owner_key.as_ref(), &[bump]];
    let signer = &[&seeds[..]];

    invoke_signed(
        &ix,
        &[
            ctx.accounts.pool_authority.to_account_info(),
            ctx.accounts.pool_input_vault.to_account_info(),
            ctx.accounts.pool_output_vault.to_account_info(),
            ctx.accounts.user_token_in.to_account_info(),
            ctx.accounts.user_token_out.to_account_info(),
            ctx.accounts.bot_config.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.venue_program.to_account_info(),
        ],
        signer,
    )
    .map_err(|_| error!(ErrorCode::ExternalVenueFailure))?;

    // 5. Judge the venue by balance deltas, not by its return data.
    ctx.accounts.user_token_in.reload()?;
    ctx.accounts.user_token_out.reload()?;
    let balance_in_after = ctx.accounts.user_token_in.amount;
    let balance_out_after = ctx.accounts.user_token_out.amount;

    let amount_received = balance_out_after.checked_sub(balance_out_before).unwrap_or(0);
    require!(
        amount_received >= minimum_amount_out,
        ErrorCode::ExternalVenueFailure
    );

    let amount_spent = balance_in_before.checked_sub(balance_in_after).unwrap_or(0);
    require!(amount_spent <= amount_in, ErrorCode::ExcessiveInputSpent);

    // 6. Counter moves only after everything above held.
    let bot_config = &mut ctx.accounts.bot_config;
    bot_config.record_execution()?;

    emit!(SwapExecuted {
        owner: bot_config.owner,
        amount_in,
        amount_out: amount_received,
        trades_executed: bot_config.trades_executed,
    });
    msg!(
        "Swap executed. In: {}, Out: {}, Trade #{}",
        amount_spent,
        amount_received,
        bot_config.trades_executed
    );
    Ok(())
}

#[derive(Accounts)]
pub struct AuthorizeSwap<'info> {
    #[account(
        seeds = [BOT_CONFIG_SEED, owner.key().as_ref()],
        bump = bot_config.bump,
        has_one = owner @ ErrorCode::Unauthorized,
        constraint = bot_config.backend_authority == backend_signer.key() @ ErrorCode::Unauthorized
    )]
    pub bot_config: Account<'info, BotConfig>,

    /// CHECK: anchors the PDA derivation and the has_one check; the owner
    /// does not sign backend-submitted calls.
    pub owner: UncheckedAccount<'info>,

    pub backend_signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct ExecuteSwap<'info> {
    #[account(
        mut,
        seeds = [BOT_CONFIG_SEED, owner.key().as_ref()],
        bump = bot_config.bump,
        has_one = owner @ ErrorCode::Unauthorized,
        constraint = bot_config.backend_authority == backend_signer.key() @ ErrorCode::Unauthorized
    )]
    pub bot_config: Account<'info, BotConfig>,

    /// CHECK: anchors the PDA derivation and the has_one check; the owner
    /// does not sign backend-submitted calls.
    pub owner: UncheckedAccount<'info>,

    pub backend_signer: Signer<'info>,

    /// Source of funds: the owner's own token account, moved via the
    /// standing delegation.
    #[account(
        mut,
        constraint = user_token_in.owner == owner.key() @ ErrorCode::InvalidTokenAccountOwner,
        constraint = user_token_in.mint == pool_input_vault.mint @ ErrorCode::MintMismatch
    )]
    pub user_token_in: Account<'info, TokenAccount>,

    /// Destination: the owner's token account for the output asset.
    #[account(
        mut,
        constraint = user_token_out.owner == owner.key() @ ErrorCode::InvalidTokenAccountOwner,
        constraint = user_token_out.mint == pool_output_vault.mint @ ErrorCode::MintMismatch
    )]
    pub user_token_out: Account<'info, TokenAccount>,

    /// CHECK: pinned to the configured venue deployment.
    #[account(address = VENUE_PROGRAM_ID @ ErrorCode::InvalidVenueProgram)]
    pub venue_program: UncheckedAccount<'info>,

    /// CHECK: venue-owned pool authority, verified by the venue program.
    pub pool_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub pool_input_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub pool_output_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct SwapAuthorized {
    pub owner: Pubkey,
    pub backend_authority: Pubkey,
    pub amount_in: u64,
    pub minimum_amount_out: u64,
}

#[event]
pub struct SwapExecuted {
    pub owner: Pubkey,
    pub amount_in: u64,
    pub amount_out: u64,
    pub trades_executed: u64,
}
