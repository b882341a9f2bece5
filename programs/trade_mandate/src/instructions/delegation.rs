use anchor_lang::prelude::*;
use anchor_spl::token::{self, Approve, Revoke, Token, TokenAccount};

use crate::constants::BOT_CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::state::BotConfig;

/// Grant the config PDA a bounded allowance over the owner's token account.
/// The PDA is the delegate, never the backend key: revoking the delegation
/// or closing the config cuts the backend off completely.
pub fn approve_delegation(ctx: Context<ApproveDelegation>, amount: u64) -> Result<()> {
    approve_to_config(
        &ctx.accounts.owner,
        &ctx.accounts.owner_token_account,
        &ctx.accounts.bot_config,
        &ctx.accounts.token_program,
        amount,
    )
}

/// Zero the delegation on the owner's token account, whoever the current
/// delegate is.
pub fn revoke_delegation(ctx: Context<RevokeDelegation>) -> Result<()> {
    token::revoke(CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Revoke {
            source: ctx.accounts.owner_token_account.to_account_info(),
            authority: ctx.accounts.owner.to_account_info(),
        },
    ))?;

    msg!(
        "Revoked delegation on token account: {}",
        ctx.accounts.owner_token_account.key()
    );
    Ok(())
}

/// Probe the owner's token account and run the approve CPI.
/// The probe reports a missing or foreign account as TokenAccountNotFound so
/// the wallet can tell the user to create the ATA, instead of surfacing a
/// raw deserialization error.
pub(crate) fn approve_to_config<'info>(
    owner: &Signer<'info>,
    owner_token_account: &UncheckedAccount<'info>,
    bot_config: &Account<'info, BotConfig>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    let info = owner_token_account.to_account_info();
    if info.data_is_empty() || info.owner != &token::ID {
        return err!(ErrorCode::TokenAccountNotFound);
    }
    let token_account = {
        let data = info.try_borrow_data()?;
        TokenAccount::try_deserialize(&mut &data[..])?
    };
    require_keys_eq!(
        token_account.owner,
        owner.key(),
        ErrorCode::TokenAccountNotFound
    );

    token::approve(
        CpiContext::new(
            token_program.to_account_info(),
            Approve {
                to: info,
                delegate: bot_config.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!(
        "Delegated {} base units of {} to config: {}",
        amount,
        token_account.mint,
        bot_config.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct ApproveDelegation<'info> {
    #[account(
        seeds = [BOT_CONFIG_SEED, owner.key().as_ref()],
        bump = bot_config.bump,
        has_one = owner @ ErrorCode::Unauthorized
    )]
    pub bot_config: Account<'info, BotConfig>,

    pub owner: Signer<'info>,

    /// CHECK: probed in the handler; a missing account must surface as
    /// TokenAccountNotFound rather than a deserialization failure.
    #[account(mut)]
    pub owner_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct RevokeDelegation<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        token::authority = owner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
