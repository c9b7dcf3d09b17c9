use anchor_lang::prelude::*;
use switchboard_on_demand::get_switchboard_on_demand_program_id;

use crate::{constants::*, errors::*, states::*};

/// ========================================
/// Account Structs
/// ========================================

/// Accounts required for initializing the raffle
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The raffle state account (PDA)
    #[account(
        init,
        payer = payer,
        space = 8 + RaffleState::INIT_SPACE,
        seeds = [RAFFLE_STATE],
        bump
    )]
    pub raffle: Account<'info, RaffleState>,

    /// Vault account that will hold the pot (PDA)
    #[account(
        init,
        payer = payer,
        space = 8 + Vault::INIT_SPACE,
        seeds = [VAULT],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// Account funding the state and vault accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for entering the current round
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The raffle state account
    #[account(
        mut,
        seeds = [RAFFLE_STATE],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, RaffleState>,

    /// Vault receiving the entrance payment
    #[account(
        mut,
        seeds = [VAULT],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    /// Player entering the round
    #[account(mut)]
    pub player: Signer<'info>,

    /// System program for the SOL transfer
    pub system_program: Program<'info, System>,
}

/// Accounts required for triggering settlement of a due round
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The raffle state account
    #[account(
        mut,
        seeds = [RAFFLE_STATE],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, RaffleState>,

    /// Caller triggering settlement (no special authority required)
    pub caller: Signer<'info>,

    /// Switchboard randomness account the round will commit to
    /// CHECK: Validated to be owned by Switchboard program
    #[account(
        owner = get_switchboard_on_demand_program_id() @ RaffleError::InvalidRandomnessAccount
    )]
    pub randomness_account_data: AccountInfo<'info>,
}

/// Accounts required for settling a locked round with revealed randomness
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// The raffle state account
    #[account(
        mut,
        seeds = [RAFFLE_STATE],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, RaffleState>,

    /// Vault holding the pot to disburse
    #[account(
        mut,
        seeds = [VAULT],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    /// Caller completing settlement (no special authority required)
    pub caller: Signer<'info>,

    /// Account receiving the prize
    /// CHECK: Validated in the instruction to match the player selected by the revealed value
    #[account(mut)]
    pub winner: AccountInfo<'info>,

    /// Switchboard randomness account (must match the one committed at trigger)
    /// CHECK: Address must match raffle.randomness_account and be owned by Switchboard
    #[account(
        address = raffle.randomness_account @ RaffleError::StaleRandomnessRequest,
        owner = get_switchboard_on_demand_program_id() @ RaffleError::InvalidRandomnessAccount
    )]
    pub randomness_account_data: AccountInfo<'info>,
}
