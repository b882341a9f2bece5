//! CPMM venue interface
//!
//! Builds the `swap_base_input` instruction for the external liquidity
//! venue. The venue is opaque to this program: we hand it a fixed account
//! list and `(amount_in, minimum_amount_out)`, sign as the config PDA (the
//! standing delegate of the owner's source account), and judge the result by
//! token-balance deltas afterwards.
//!
//! ```text
//! trade_mandate → swap_base_input CPI → venue program (CPMM)
//!                                     → mock_amm (localnet)
//! ```

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use solana_program::hash;

/// Anchor global-namespace method name exposed by the venue.
pub const SWAP_BASE_INPUT_METHOD: &str = "global:swap_base_input";

/// Complete account list of the venue's `swap_base_input`, in wire order.
/// Exhaustive on purpose: a missing or extra account is a construction-time
/// mistake here, not a ledger-time surprise.
pub struct SwapBaseInputKeys {
    pub pool_authority: Pubkey,
    pub pool_input_vault: Pubkey,
    pub pool_output_vault: Pubkey,
    pub user_source: Pubkey,
    pub user_destination: Pubkey,
    /// Owner or standing delegate of `user_source`; must sign the venue call.
    pub user_authority: Pubkey,
    pub token_program: Pubkey,
}

/// First 8 bytes of sha256 of the method name, the venue's instruction
/// discriminator.
pub fn swap_base_input_discriminator() -> [u8; 8] {
    let digest = hash::hash(SWAP_BASE_INPUT_METHOD.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest.to_bytes()[..8]);
    discriminator
}

/// Assemble the venue swap instruction. Data layout is the discriminator
/// followed by the two u64 args in little-endian (borsh) order.
pub fn swap_base_input_instruction(
    venue_program: &Pubkey,
    keys: &SwapBaseInputKeys,
    amount_in: u64,
    minimum_amount_out: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(24);
    data.extend_from_slice(&swap_base_input_discriminator());
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&minimum_amount_out.to_le_bytes());

    Instruction {
        program_id: *venue_program,
        accounts: vec![
            AccountMeta::new_readonly(keys.pool_authority, false),
            AccountMeta::new(keys.pool_input_vault, false),
            AccountMeta::new(keys.pool_output_vault, false),
            AccountMeta::new(keys.user_source, false),
            AccountMeta::new(keys.user_destination, false),
            AccountMeta::new_readonly(keys.user_authority, true),
            AccountMeta::new_readonly(keys.token_program, false),
        ],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> SwapBaseInputKeys {
        SwapBaseInputKeys {
            pool_authority: Pubkey::new_unique(),
            pool_input_vault: Pubkey::new_unique(),
            pool_output_vault: Pubkey::new_unique(),
            user_source: Pubkey::new_unique(),
            user_destination: Pubkey::new_unique(),
            user_authority: Pubkey::new_unique(),
            token_program: Pubkey::new_unique(),
        }
    }

    #[test]
    fn data_is_discriminator_then_le_args() {
        let venue = Pubkey::new_unique();
        let ix = swap_base_input_instruction(&venue, &keys(), 10_000_000_000, 9_500_000_000);

        assert_eq!(ix.data.len(), 24);
        assert_eq!(ix.data[..8], swap_base_input_discriminator()[..]);
        assert_eq!(
            u64::from_le_bytes(ix.data[8..16].try_into().unwrap()),
            10_000_000_000
        );
        assert_eq!(
            u64::from_le_bytes(ix.data[16..24].try_into().unwrap()),
            9_500_000_000
        );
    }

    #[test]
    fn account_order_matches_the_venue_declaration() {
        let venue = Pubkey::new_unique();
        let keys = keys();
        let ix = swap_base_input_instruction(&venue, &keys, 1, 0);

        assert_eq!(ix.program_id, venue);
        let pubkeys: Vec<Pubkey> = ix.accounts.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(
            pubkeys,
            vec![
                keys.pool_authority,
                keys.pool_input_vault,
                keys.pool_output_vault,
                keys.user_source,
                keys.user_destination,
                keys.user_authority,
                keys.token_program,
            ]
        );
    }

    #[test]
    fn only_the_user_authority_signs() {
        let ix = swap_base_input_instruction(&Pubkey::new_unique(), &keys(), 1, 0);
        let signers: Vec<bool> = ix.accounts.iter().map(|meta| meta.is_signer).collect();
        assert_eq!(signers, vec![false, false, false, false, false, true, false]);
    }

    #[test]
    fn vaults_and_user_accounts_are_writable() {
        let ix = swap_base_input_instruction(&Pubkey::new_unique(), &keys(), 1, 0);
        let writable: Vec<bool> = ix.accounts.iter().map(|meta| meta.is_writable).collect();
        assert_eq!(writable, vec![false, true, true, true, true, false, false]);
    }

    #[test]
    fn discriminator_is_stable() {
        assert_eq!(
            swap_base_input_discriminator(),
            swap_base_input_discriminator()
        );
    }
}
