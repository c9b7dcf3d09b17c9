use crate::errors::RaffleError;

use anchor_lang::prelude::*;

/// ========================================
/// Winner Selection Helpers
/// ========================================

/// Reduces a 32-byte random value modulo the player count
///
/// Folds the value byte by byte (big-endian) so the result depends on
/// all 256 bits of oracle output, not just a truncated word.
///
/// Args:
/// - random_value: Raw value revealed by the randomness oracle
/// - player_count: Number of players in the round
///
/// Returns: Index of the winning player, or NoPlayers for an empty round
pub fn select_winner_index(random_value: &[u8; 32], player_count: u64) -> Result<u64> {
    require!(player_count > 0, RaffleError::NoPlayers);

    let modulus = player_count as u128;
    let mut acc: u128 = 0;
    for byte in random_value {
        acc = ((acc << 8) | *byte as u128) % modulus;
    }

    Ok(acc as u64)
}

/// Validates a randomness seed is too young to have a revealed value
///
/// Switchboard reveals a value from `seed_slot + 1` onward, so a
/// settlement may only commit to an account seeded in the immediately
/// previous slot. Any older seed may already carry a publicly readable
/// value, which would let the trigger caller choose the outcome.
///
/// Args:
/// - seed_slot: Slot the randomness account was seeded at
/// - current_slot: Current slot from the clock sysvar
///
/// Returns: Ok only when the seed was committed in the previous slot
pub fn require_fresh_seed(seed_slot: u64, current_slot: u64) -> Result<()> {
    require!(
        seed_slot.saturating_add(1) == current_slot,
        RaffleError::RandomnessAlreadyRevealed
    );

    Ok(())
}

/// ========================================
/// Vault Payout Helpers
/// ========================================

/// Moves `amount` lamports from the vault PDA to the recipient
///
/// The vault is program-owned, so lamports are moved by direct balance
/// adjustment rather than a system program CPI. Any failure surfaces as
/// PayoutFailed and rolls the whole instruction back.
pub fn payout_from_vault(vault: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let mut vault_lamports = vault
        .try_borrow_mut_lamports()
        .map_err(|_| RaffleError::PayoutFailed)?;
    let mut to_lamports = to
        .try_borrow_mut_lamports()
        .map_err(|_| RaffleError::PayoutFailed)?;

    **vault_lamports = (**vault_lamports)
        .checked_sub(amount)
        .ok_or(RaffleError::PayoutFailed)?;
    **to_lamports = (**to_lamports)
        .checked_add(amount)
        .ok_or(RaffleError::PayoutFailed)?;

    Ok(())
}
