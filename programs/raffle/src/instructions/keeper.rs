use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::{contexts::*, errors::RaffleError, events::*, helpers::*};

/// ========================================
/// Keeper Instructions
/// ========================================

/// Trigger settlement of a due round
///
/// Callable by anyone; the trigger conditions are re-validated on-chain,
/// so an off-chain scheduler is a convenience and never an authority.
/// Locks the round and commits to a Switchboard randomness account whose
/// value will be revealed in a later slot.
///
/// Process:
/// 1. Re-check all trigger conditions (open, interval, players, pot)
/// 2. Validate the randomness account is freshly committed
/// 3. Lock the round and record the commitment
///
/// Args:
/// - ctx: Context containing the raffle and the randomness account
///
/// Returns: Result indicating success or failure
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    // ============ UPKEEP VALIDATION ============
    // Log each condition before rejecting so off-chain callers can see
    // exactly which one failed.
    let check = raffle.upkeep_check(clock.unix_timestamp);
    if !check.all() {
        msg!(
            "Upkeep not needed: open={} interval_elapsed={} has_players={} has_pot={}",
            check.is_open,
            check.interval_elapsed,
            check.has_players,
            check.has_pot
        );
        return Err(error!(RaffleError::UpkeepNotNeeded));
    }

    // ============ RANDOMNESS VALIDATION ============
    // The seed must come from the immediately previous slot, so no value
    // can exist for it yet; anything older may already be revealed.
    let randomness_account = &ctx.accounts.randomness_account_data;
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| RaffleError::InvalidRandomnessAccount)?;
    require_fresh_seed(randomness_data.seed_slot, clock.slot)?;

    // ============ ROUND LOCKING ============
    // Locks out entries and duplicate triggers until the winner is picked
    raffle.begin_settlement(
        randomness_account.key(),
        randomness_data.seed_slot,
        clock.unix_timestamp,
    )?;

    emit!(WinnerRequested {
        randomness_account: randomness_account.key(),
        round: raffle.rounds_settled,
    });

    Ok(())
}

/// Settle a locked round with the revealed randomness
///
/// Callable by anyone once the committed randomness account has resolved.
/// Pays the entire pot to the selected player and reopens the raffle for
/// the next round in the same transaction.
///
/// Process:
/// 1. Validate the round is locked and this account is the committed one
/// 2. Extract the revealed value from the Switchboard oracle
/// 3. Select the winner (full value modulo player count)
/// 4. Disburse the pot from the vault
/// 5. Reset the round
///
/// Args:
/// - ctx: Context containing raffle, vault, winner, and randomness accounts
///
/// Returns: Result indicating success or failure
pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
    let clock = Clock::get()?;
    let randomness_account = &ctx.accounts.randomness_account_data;
    let raffle = &mut ctx.accounts.raffle;

    // ============ FULFILLMENT VALIDATION ============
    // Only the account committed at trigger time can settle the round
    raffle.verify_pending_request(&randomness_account.key())?;

    // ============ RANDOMNESS EXTRACTION ============
    // Get the resolved randomness from the Switchboard oracle
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

    require_eq!(
        randomness_data.seed_slot,
        raffle.commit_slot,
        RaffleError::RandomnessExpired
    );

    let random_value = randomness_data
        .get_value(clock.slot)
        .map_err(|_| RaffleError::RandomnessNotResolved)?;

    // ============ WINNER SELECTION ============
    let winner = raffle.winner(&random_value)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        RaffleError::WinnerAccountMismatch
    );

    // Capture round details before the reset clears them
    let prize = raffle.pot;
    let round = raffle.rounds_settled;

    // ============ PRIZE PAYOUT ============
    // The whole pot goes to the winner; a failed payout aborts the
    // instruction and leaves the round locked for a retry.
    let vault_info = ctx.accounts.vault.to_account_info();
    payout_from_vault(&vault_info, &ctx.accounts.winner, prize)?;

    // ============ ROUND RESET ============
    // Reopen in place for the next round
    raffle.reset(winner, clock.unix_timestamp);

    emit!(WinnerPicked {
        winner,
        prize,
        randomness_account: randomness_account.key(),
        round,
    });

    Ok(())
}
