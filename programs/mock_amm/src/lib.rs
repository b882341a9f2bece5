use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

declare_id!("DcVa1Kxo9DCUuvj6E8eJpUv9pARdGwWTM72MCT2vC3rS");

pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";

/// Deterministic fill rate: every swap pays out 96% of the input.
pub const MOCK_RATE_BPS: u64 = 9_600;
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Output for a given input at the fixed mock rate. None on overflow.
pub fn quote_base_input(amount_in: u64) -> Option<u64> {
    amount_in
        .checked_mul(MOCK_RATE_BPS)?
        .checked_div(BPS_DENOMINATOR)
}

#[program]
pub mod mock_amm {
    use super::*;

    /// Mock swap_base_input for localnet verification.
    /// Simulates a cross-mint swap at a deterministic 96% rate.
    ///
    /// NOTE: This is for LOCALNET TESTING ONLY.
    ///
    /// Pulls `amount_in` from the user source with whatever authority the
    /// caller provided (the delegating program's PDA in the real flow) and
    /// pays the output from its own vault. This is sufficient to prove:
    /// 1. the venue CPI wiring is correct
    /// 2. a config PDA can sign as an SPL delegate via invoke_signed
    /// 3. minimum_amount_out is enforced venue-side too
    pub fn swap_base_input(
        ctx: Context<SwapBaseInput>,
        amount_in: u64,
        minimum_amount_out: u64,
    ) -> Result<()> {
        require!(
            ctx.accounts.pool_input_vault.mint == ctx.accounts.user_source.mint,
            MockAmmError::MintMismatch
        );
        require!(
            ctx.accounts.pool_output_vault.mint == ctx.accounts.user_destination.mint,
            MockAmmError::MintMismatch
        );

        let amount_out = quote_base_input(amount_in).ok_or(MockAmmError::MathOverflow)?;
        require!(
            amount_out >= minimum_amount_out,
            MockAmmError::SlippageExceeded
        );
        require!(
            ctx.accounts.pool_output_vault.amount >= amount_out,
            MockAmmError::InsufficientPoolLiquidity
        );

        // Pull the input. The token program checks that user_authority is
        // the owner or a delegate with enough allowance.
        let cpi_accounts = Transfer {
            from: ctx.accounts.user_source.to_account_info(),
            to: ctx.accounts.pool_input_vault.to_account_info(),
            authority: ctx.accounts.user_authority.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
        );
        token::transfer(cpi_ctx, amount_in)?;

        // Pay the output from the pool vault, signed by the pool authority.
        let bump = ctx.bumps.pool_authority;
        let seeds = &[POOL_AUTHORITY_SEED, &[bump]];
        let signer = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.pool_output_vault.to_account_info(),
            to: ctx.accounts.user_destination.to_account_info(),
            authority: ctx.accounts.pool_authority.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        token::transfer(cpi_ctx, amount_out)?;

        msg!(
            "MockAmm: amount_in={}, amount_out={}, min_out={}",
            amount_in,
            amount_out,
            minimum_amount_out
        );

        Ok(())
    }
}

#[derive(Accounts)]
pub struct SwapBaseInput<'info> {
    /// CHECK: PDA owning the pool vaults; only signs via seeds.
    #[account(seeds = [POOL_AUTHORITY_SEED], bump)]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(mut, token::authority = pool_authority)]
    pub pool_input_vault: Account<'info, TokenAccount>,

    #[account(mut, token::authority = pool_authority)]
    pub pool_output_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user_source: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user_destination: Account<'info, TokenAccount>,

    /// CHECK: owner or delegate of user_source; the token program enforces
    /// its spending rights.
    pub user_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

#[error_code]
pub enum MockAmmError {
    #[msg("Vault mint does not match the user token account mint.")]
    MintMismatch,
    #[msg("Slippage exceeded: amount_out < minimum_amount_out.")]
    SlippageExceeded,
    #[msg("Pool vault cannot cover the quoted output.")]
    InsufficientPoolLiquidity,
    #[msg("Math overflow in amount calculation.")]
    MathOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_pays_ninety_six_percent() {
        assert_eq!(quote_base_input(10_000_000_000), Some(9_600_000_000));
        assert_eq!(quote_base_input(10_000), Some(9_600));
        assert_eq!(quote_base_input(0), Some(0));
    }

    #[test]
    fn quote_rounds_down() {
        // 1 * 9600 / 10000
        assert_eq!(quote_base_input(1), Some(0));
        assert_eq!(quote_base_input(104), Some(99));
    }

    #[test]
    fn quote_guards_against_overflow() {
        assert_eq!(quote_base_input(u64::MAX), None);
    }
}
