/// Error definitions for the Raffle program
///
/// Contains all custom error types that can be returned by the program instructions.
use anchor_lang::prelude::*;

/// Custom error codes for the raffle program
#[error_code]
pub enum RaffleError {
    #[msg("The raffle is not open for entries.")]
    RaffleNotOpen,
    #[msg("The amount paid is below the entrance fee.")]
    InsufficientEntranceFee,
    #[msg("The round has reached its maximum number of entries.")]
    RaffleFull,
    #[msg("Upkeep is not needed. See the program logs for the failed conditions.")]
    UpkeepNotNeeded,
    #[msg("The randomness account is invalid or not owned by the Switchboard program.")]
    InvalidRandomnessAccount,
    #[msg("The randomness account was not seeded in the previous slot; its value may already be revealed.")]
    RandomnessAlreadyRevealed,
    #[msg("The randomness account does not match the pending settlement request.")]
    StaleRandomnessRequest,
    #[msg("The randomness account was re-seeded since the settlement was requested.")]
    RandomnessExpired,
    #[msg("Randomness has not been resolved by the oracle yet.")]
    RandomnessNotResolved,
    #[msg("The winner account does not match the selected player.")]
    WinnerAccountMismatch,
    #[msg("Transferring the prize to the winner failed.")]
    PayoutFailed,
    #[msg("The player list is empty. This should not happen.")]
    NoPlayers,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("The entrance fee must be greater than zero.")]
    InvalidEntranceFee,
    #[msg("The interval must be greater than zero.")]
    InvalidInterval,
}
