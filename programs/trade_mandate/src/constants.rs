use anchor_lang::prelude::*;

/// PDA namespace for per-owner bot configuration accounts.
pub const BOT_CONFIG_SEED: &[u8] = b"bot_config";

/// Basis-point ceiling (100%).
pub const MAX_SLIPPAGE_BPS: u16 = 10_000;

// Liquidity venue program id (pointed at the mock AMM for localnet; replace
// with the production CPMM deployment before mainnet).
pub const VENUE_PROGRAM_ID: Pubkey = pubkey!("DcVa1Kxo9DCUuvj6E8eJpUv9pARdGwWTM72MCT2vC3rS");
