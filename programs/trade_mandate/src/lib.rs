//! Non-custodial delegated trading authority.
//!
//! A token owner creates a per-owner config PDA, grants it a bounded SPL
//! delegation over their own token account, and names a backend signer that
//! may submit swaps within the configured limits. Funds never leave the
//! owner's wallet except through the venue swap itself, and the owner can
//! revoke the delegation or deactivate the bot unilaterally at any time.

use anchor_lang::prelude::*;

pub mod constants;
pub mod delegation;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod venue;

use instructions::*;

declare_id!("AFrpU4WsWTUSAxuHT9WJp5fx5pVwgtXxgng9XAtNSBmZ");

#[program]
pub mod trade_mandate {
    use super::*;

    /// Create the trading config for the signing owner.
    pub fn initialize_bot(
        ctx: Context<InitializeBot>,
        backend_authority: Pubkey,
        max_trade_amount: u64,
        max_slippage_bps: u16,
    ) -> Result<()> {
        instructions::initialize::initialize_bot(
            ctx,
            backend_authority,
            max_trade_amount,
            max_slippage_bps,
        )
    }

    /// Create the config (if absent) and grant the token delegation in a
    /// single owner-signed transaction.
    pub fn initialize_bot_with_delegation(
        ctx: Context<InitializeBotWithDelegation>,
        backend_authority: Pubkey,
        max_trade_amount: u64,
        max_slippage_bps: u16,
        approve_amount: u64,
    ) -> Result<()> {
        instructions::initialize::initialize_bot_with_delegation(
            ctx,
            backend_authority,
            max_trade_amount,
            max_slippage_bps,
            approve_amount,
        )
    }

    /// Update risk limits and activation. Owner only.
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        max_trade_amount: Option<u64>,
        max_slippage_bps: Option<u16>,
        is_active: Option<bool>,
    ) -> Result<()> {
        instructions::config::update_config(ctx, max_trade_amount, max_slippage_bps, is_active)
    }

    /// Rotate the backend signer. Owner only.
    pub fn update_backend_authority(
        ctx: Context<UpdateConfig>,
        new_backend_authority: Pubkey,
    ) -> Result<()> {
        instructions::config::update_backend_authority(ctx, new_backend_authority)
    }

    /// Grant the config PDA a bounded spending allowance. Owner only.
    pub fn approve_delegation(ctx: Context<ApproveDelegation>, amount: u64) -> Result<()> {
        instructions::delegation::approve_delegation(ctx, amount)
    }

    /// Zero any standing delegation on the owner's token account.
    pub fn revoke_delegation(ctx: Context<RevokeDelegation>) -> Result<()> {
        instructions::delegation::revoke_delegation(ctx)
    }

    /// Backend-signed validation of a trade intent. No value moves.
    pub fn authorize_swap(
        ctx: Context<AuthorizeSwap>,
        amount_in: u64,
        minimum_amount_out: u64,
    ) -> Result<()> {
        instructions::swap::authorize_swap(ctx, amount_in, minimum_amount_out)
    }

    /// Backend-signed execution against the liquidity venue.
    pub fn execute_swap(
        ctx: Context<ExecuteSwap>,
        amount_in: u64,
        minimum_amount_out: u64,
    ) -> Result<()> {
        instructions::swap::execute_swap(ctx, amount_in, minimum_amount_out)
    }

    /// Close the config and reclaim rent. Owner only.
    pub fn close_bot(ctx: Context<CloseBot>) -> Result<()> {
        instructions::config::close_bot(ctx)
    }
}
