/// Events module for the Raffle program
/// Contains all event structures that are emitted by the program instructions
/// for off-chain tracking and monitoring.
use anchor_lang::prelude::*;

/// Emitted when the raffle is created
#[event]
pub struct RaffleInitialized {
    pub raffle: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
}

/// Emitted when a player enters the current round
#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub player_count: u64,
}

/// Emitted when upkeep runs and a random winner is requested from the oracle
#[event]
pub struct WinnerRequested {
    pub randomness_account: Pubkey,
    pub round: u64,
}

/// Emitted when the revealed randomness picks a winner and the pot is paid out
#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub prize: u64,
    pub randomness_account: Pubkey,
    pub round: u64,
}
