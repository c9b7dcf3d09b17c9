use anchor_lang::prelude::*;

use crate::{contexts::*, errors::RaffleError, events::*, states::RaffleStatus};

/// ========================================
/// Admin Instructions
/// ========================================

/// Initialize the raffle
///
/// Creates the raffle state and vault PDAs and opens the first round.
/// The interval clock starts at the current block timestamp, so the
/// first settlement cannot trigger before `interval` seconds pass.
///
/// Args:
/// - ctx: Context containing raffle and vault PDAs plus the payer
/// - entrance_fee: Minimum lamports required to enter a round
/// - interval: Seconds a round must stay open before settlement
///
/// Returns: Result indicating success or failure
pub fn initialize(ctx: Context<Initialize>, entrance_fee: u64, interval: i64) -> Result<()> {
    // Validation: a free raffle or a zero-length round makes no sense
    require!(entrance_fee > 0, RaffleError::InvalidEntranceFee);
    require!(interval > 0, RaffleError::InvalidInterval);

    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    raffle.bump = ctx.bumps.raffle;
    raffle.entrance_fee = entrance_fee;
    raffle.interval = interval;
    raffle.status = RaffleStatus::Open;
    raffle.last_timestamp = clock.unix_timestamp;
    raffle.pot = 0;
    raffle.players = Vec::new();
    raffle.randomness_account = Pubkey::default();
    raffle.commit_slot = 0;
    raffle.recent_winner = Pubkey::default();
    raffle.rounds_settled = 0;

    ctx.accounts.vault.bump = ctx.bumps.vault;

    emit!(RaffleInitialized {
        raffle: raffle.key(),
        entrance_fee,
        interval,
    });

    Ok(())
}
