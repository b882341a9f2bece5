use anchor_lang::prelude::*;

use crate::constants::{BOT_CONFIG_SEED, MAX_SLIPPAGE_BPS};
use crate::errors::ErrorCode;

/// Per-owner trading mandate.
/// Non-custodial: the owner keeps the funds in their own wallet and grants a
/// bounded SPL delegation to this PDA. The backend authority can submit
/// swaps against it but can never withdraw.
#[account]
pub struct BotConfig {
    pub owner: Pubkey,
    pub backend_authority: Pubkey,
    pub max_trade_amount: u64,
    pub max_slippage_bps: u16,
    pub is_active: bool,
    pub trades_executed: u64,
    pub bump: u8,
}

impl BotConfig {
    // 8 discriminator + 32 owner + 32 backend_authority + 8 max_trade_amount
    // + 2 max_slippage_bps + 1 is_active + 8 trades_executed + 1 bump
    pub const INIT_SPACE: usize = 8 + 32 + 32 + 8 + 2 + 1 + 8 + 1;

    /// Canonical config address for an owner. Callable by any party; wallets
    /// and dashboards locate a user's record with this, no registry needed.
    pub fn find_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[BOT_CONFIG_SEED, owner.as_ref()], program_id)
    }

    pub fn validate_slippage(max_slippage_bps: u16) -> Result<()> {
        require!(
            max_slippage_bps <= MAX_SLIPPAGE_BPS,
            ErrorCode::InvalidSlippage
        );
        Ok(())
    }

    /// Gate checks shared by authorize_swap and execute_swap. Activation is
    /// the coarser gate and is checked before the numeric bound.
    pub fn validate_trade(&self, amount_in: u64) -> Result<()> {
        require!(self.is_active, ErrorCode::BotNotActive);
        require!(
            amount_in <= self.max_trade_amount,
            ErrorCode::AmountExceedsLimit
        );
        Ok(())
    }

    /// Bump the trade counter after a successful execution.
    pub fn record_execution(&mut self) -> Result<()> {
        self.trades_executed = self
            .trades_executed
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    fn code(result: Result<()>) -> u32 {
        match result.unwrap_err() {
            Error::AnchorError(e) => e.error_code_number,
            other => panic!("expected an AnchorError, got {}", other),
        }
    }

    fn expected(error: ErrorCode) -> u32 {
        ERROR_CODE_OFFSET + error as u32
    }

    fn config(is_active: bool, max_trade_amount: u64) -> BotConfig {
        BotConfig {
            owner: Pubkey::new_unique(),
            backend_authority: Pubkey::new_unique(),
            max_trade_amount,
            max_slippage_bps: 500,
            is_active,
            trades_executed: 0,
            bump: 255,
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let program_id = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let first = BotConfig::find_address(&owner, &program_id);
        let second = BotConfig::find_address(&owner, &program_id);
        assert_eq!(first, second);
    }

    #[test]
    fn derivation_is_collision_free_across_owners() {
        let program_id = Pubkey::new_unique();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let owner = Pubkey::new_unique();
            let (address, _) = BotConfig::find_address(&owner, &program_id);
            assert!(seen.insert(address), "two owners derived the same config");
        }
    }

    #[test]
    fn stored_bump_reproduces_own_address() {
        let program_id = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let (address, bump) = BotConfig::find_address(&owner, &program_id);
        let rederived = Pubkey::create_program_address(
            &[BOT_CONFIG_SEED, owner.as_ref(), &[bump]],
            &program_id,
        )
        .unwrap();
        assert_eq!(address, rederived);
    }

    #[test]
    fn slippage_bound_is_inclusive() {
        assert!(BotConfig::validate_slippage(0).is_ok());
        assert!(BotConfig::validate_slippage(500).is_ok());
        assert!(BotConfig::validate_slippage(10_000).is_ok());
        assert_eq!(
            code(BotConfig::validate_slippage(10_001)),
            expected(ErrorCode::InvalidSlippage)
        );
        assert_eq!(
            code(BotConfig::validate_slippage(20_000)),
            expected(ErrorCode::InvalidSlippage)
        );
    }

    #[test]
    fn trade_within_limits_passes() {
        let config = config(true, 100_000_000_000);
        assert!(config.validate_trade(10_000_000_000).is_ok());
        assert!(config.validate_trade(100_000_000_000).is_ok());
    }

    #[test]
    fn over_limit_trade_is_rejected() {
        let config = config(true, 100_000_000_000);
        assert_eq!(
            code(config.validate_trade(300_000_000_000)),
            expected(ErrorCode::AmountExceedsLimit)
        );
    }

    #[test]
    fn inactive_bot_rejects_before_amount_bound() {
        // Both gates violated at once: activation must win.
        let config = config(false, 100);
        assert_eq!(
            code(config.validate_trade(300)),
            expected(ErrorCode::BotNotActive)
        );
    }

    #[test]
    fn counter_increments_by_exactly_one() {
        let mut config = config(true, 100);
        for expected_count in 1..=5u64 {
            config.record_execution().unwrap();
            assert_eq!(config.trades_executed, expected_count);
        }
    }

    #[test]
    fn counter_overflow_is_an_error() {
        let mut config = config(true, 100);
        config.trades_executed = u64::MAX;
        assert_eq!(
            code(config.record_execution()),
            expected(ErrorCode::MathOverflow)
        );
        assert_eq!(config.trades_executed, u64::MAX);
    }
}
