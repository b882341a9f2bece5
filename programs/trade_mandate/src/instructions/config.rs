use anchor_lang::prelude::*;

use crate::constants::BOT_CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::state::BotConfig;

/// Owner-signed update of risk limits and activation. Absent fields stay
/// unchanged. Validation runs before any field is written.
pub fn update_config(
    ctx: Context<UpdateConfig>,
    max_trade_amount: Option<u64>,
    max_slippage_bps: Option<u16>,
    is_active: Option<bool>,
) -> Result<()> {
    if let Some(slippage) = max_slippage_bps {
        BotConfig::validate_slippage(slippage)?;
    }

    let bot_config = &mut ctx.accounts.bot_config;

    if let Some(amount) = max_trade_amount {
        bot_config.max_trade_amount = amount;
        msg!("Updated max_trade_amount to: {}", amount);
    }

    if let Some(slippage) = max_slippage_bps {
        bot_config.max_slippage_bps = slippage;
        msg!("Updated max_slippage_bps to: {}", slippage);
    }

    if let Some(active) = is_active {
        bot_config.is_active = active;
        msg!("Updated is_active to: {}", active);
    }

    Ok(())
}

/// Rotate the backend signer. Owner-only; the old authority loses its
/// submit rights the moment this lands.
pub fn update_backend_authority(
    ctx: Context<UpdateConfig>,
    new_backend_authority: Pubkey,
) -> Result<()> {
    let bot_config = &mut ctx.accounts.bot_config;
    bot_config.backend_authority = new_backend_authority;
    msg!("Rotated backend_authority to: {}", new_backend_authority);
    Ok(())
}

/// Close the config account and return the rent to the owner. The standing
/// token delegation, if any, survives until the owner revokes it.
pub fn close_bot(ctx: Context<CloseBot>) -> Result<()> {
    msg!("Closing bot config for owner: {}", ctx.accounts.owner.key());
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [BOT_CONFIG_SEED, owner.key().as_ref()],
        bump = bot_config.bump,
        has_one = owner @ ErrorCode::Unauthorized
    )]
    pub bot_config: Account<'info, BotConfig>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct CloseBot<'info> {
    #[account(
        mut,
        close = owner,
        seeds = [BOT_CONFIG_SEED, owner.key().as_ref()],
        bump = bot_config.bump,
        has_one = owner @ ErrorCode::Unauthorized
    )]
    pub bot_config: Account<'info, BotConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,
}
