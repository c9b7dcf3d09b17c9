use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{contexts::*, events::*};

/// ========================================
/// User Instructions
/// ========================================

/// Enter the current raffle round
///
/// The player pays at least the entrance fee; the full payment (including
/// any overpayment) moves into the vault and is credited to the pot, and
/// the player joins the roster for the pending drawing. Entering twice
/// adds two roster slots and two chances to win.
///
/// Process:
/// 1. Validate the round is open and the payment covers the fee
/// 2. Record the player and credit the pot
/// 3. Transfer the payment into the vault
///
/// Args:
/// - ctx: Context containing raffle, vault, and the entering player
/// - amount: Lamports the player is paying to enter
///
/// Returns: Result indicating success or failure
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let raffle = &mut ctx.accounts.raffle;

    // ============ ENTRY VALIDATION ============
    // Rejects locked rounds, underpayment, and a full roster before
    // any lamports move. A CPI failure below unwinds this bookkeeping
    // with the rest of the transaction.
    raffle.record_entry(player, amount)?;

    // ============ PAYMENT TRANSFER ============
    // Move the full payment into the vault via system program CPI
    let cpi_context = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.player.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_context, amount)?;

    emit!(RaffleEntered {
        player,
        amount,
        player_count: ctx.accounts.raffle.player_count(),
    });

    Ok(())
}
