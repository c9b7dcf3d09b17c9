use anchor_lang::prelude::*;
/// Constants module for the Raffle program
///
/// Contains all program-wide constants and configuration values.

/// Maximum number of entries a single round can hold. The raffle account is
/// sized for this bound at creation, so a round reset never reallocates.
#[constant]
pub const MAX_PLAYERS: usize = 256;

/// Seeds for PDA derivation

/// Seed for the raffle state PDA
#[constant]
pub const RAFFLE_STATE: &[u8] = b"raffle_state";

/// Seed for the vault PDA holding the round pot
#[constant]
pub const VAULT: &[u8] = b"vault";
