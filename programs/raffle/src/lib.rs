//! Raffle Program
//!
//! A Solana program that implements an autonomous, periodically settled
//! raffle where players can:
//! - Enter an open round by paying a SOL entrance fee into a program vault
//! - Win the entire pot, with the winner drawn from verifiable randomness
//!   provided by Switchboard oracles
//!
//! Settlement is permissionless: once a round has run for its configured
//! interval with at least one entry, any caller may trigger it, and the
//! trigger conditions are always re-validated on-chain. Picking the winner
//! pays out the pot and reopens the raffle in place for the next round.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod states;

use contexts::*;

declare_id!("3foYWK1LdxdzczP1Bmovf1X4ZuKZif2dvEikDWBbmrZf");

#[program]
pub mod raffle {
    use super::*;

    // ========================================
    // Admin Instructions
    // ========================================

    /// Initialize the raffle with an entrance fee and round interval
    pub fn initialize(ctx: Context<Initialize>, entrance_fee: u64, interval: i64) -> Result<()> {
        instructions::admin::initialize(ctx, entrance_fee, interval)
    }

    // ========================================
    // User Instructions
    // ========================================

    /// Enter the current round by paying at least the entrance fee
    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::user::enter_raffle(ctx, amount)
    }

    // ========================================
    // Keeper Instructions
    // ========================================

    /// Trigger settlement of a due round (callable by anyone)
    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        instructions::keeper::perform_upkeep(ctx)
    }

    /// Settle a locked round with the revealed randomness (callable by anyone)
    pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
        instructions::keeper::pick_winner(ctx)
    }
}
