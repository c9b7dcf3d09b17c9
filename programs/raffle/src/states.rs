/// States module for the Raffle program
///
/// Contains all account structures and their implementations used to store
/// program state on-chain.
use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::errors::RaffleError;
use crate::helpers::select_winner_index;

/// Lifecycle of a raffle round
///
/// `Open` accepts entries; `Calculating` means a winner request is in
/// flight and the round is locked until it resolves.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RaffleStatus {
    Open,
    Calculating,
}

/// Result of evaluating the trigger conditions for a round
///
/// Each field is one condition; settlement may begin only when all
/// four hold. Kept as separate flags so callers can report exactly
/// which condition failed.
#[derive(Clone, Copy, Debug)]
pub struct UpkeepCheck {
    /// Round is accepting entries (not already settling)
    pub is_open: bool,
    /// At least `interval` seconds have passed since the round started
    pub interval_elapsed: bool,
    /// At least one player has entered
    pub has_players: bool,
    /// The pot holds a non-zero prize
    pub has_pot: bool,
}

impl UpkeepCheck {
    /// True when every trigger condition holds
    pub fn all(&self) -> bool {
        self.is_open && self.interval_elapsed && self.has_players && self.has_pot
    }
}

/// Main state account for a raffle
///
/// Stores the round configuration, the current player roster and pot,
/// and the bookkeeping for the pending randomness request. A single
/// account is reused across rounds; `reset` rolls it back to a fresh
/// open round after each payout.
#[account]
#[derive(InitSpace)]
pub struct RaffleState {
    /// Bump seed for the raffle state PDA
    pub bump: u8,
    /// Minimum lamports required to enter a round
    pub entrance_fee: u64,
    /// Seconds a round must stay open before settlement can trigger
    pub interval: i64,
    /// Current lifecycle state of the round
    pub status: RaffleStatus,
    /// Unix timestamp the current round started (or settlement began)
    pub last_timestamp: i64,
    /// Total lamports collected from entries this round
    pub pot: u64,
    /// Players entered in the current round, in entry order
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
    /// Randomness account committed to for the pending settlement
    pub randomness_account: Pubkey,
    /// Slot the pending randomness account was committed at
    pub commit_slot: u64,
    /// Winner of the most recently settled round
    pub recent_winner: Pubkey,
    /// Number of rounds settled since initialization
    pub rounds_settled: u64,
}

impl RaffleState {
    /// Record an entry into the current round
    ///
    /// Validates the round is open and the payment covers the entrance
    /// fee before adding the player to the roster and crediting the
    /// full payment to the pot.
    pub fn record_entry(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(self.status == RaffleStatus::Open, RaffleError::RaffleNotOpen);
        require!(amount >= self.entrance_fee, RaffleError::InsufficientEntranceFee);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        // Reject before mutating anything, so a failed entry leaves no trace.
        let pot = self
            .pot
            .checked_add(amount)
            .ok_or(RaffleError::MathOverflow)?;

        self.players.push(player);
        self.pot = pot;

        Ok(())
    }

    /// Evaluate the trigger conditions for the current round at `now`
    pub fn upkeep_check(&self, now: i64) -> UpkeepCheck {
        UpkeepCheck {
            is_open: self.status == RaffleStatus::Open,
            interval_elapsed: now.saturating_sub(self.last_timestamp) >= self.interval,
            has_players: !self.players.is_empty(),
            has_pot: self.pot > 0,
        }
    }

    /// True when the round is due for settlement at `now`
    pub fn upkeep_needed(&self, now: i64) -> bool {
        self.upkeep_check(now).all()
    }

    /// Lock the round for settlement and commit to a randomness account
    ///
    /// Re-validates the trigger conditions so a stale caller cannot
    /// lock a round that is no longer due. While `Calculating`, entries
    /// and duplicate settlement requests are rejected.
    pub fn begin_settlement(
        &mut self,
        randomness_account: Pubkey,
        commit_slot: u64,
        now: i64,
    ) -> Result<()> {
        require!(self.upkeep_needed(now), RaffleError::UpkeepNotNeeded);

        self.status = RaffleStatus::Calculating;
        self.last_timestamp = now;
        self.randomness_account = randomness_account;
        self.commit_slot = commit_slot;

        Ok(())
    }

    /// Validate that `randomness_account` is the one committed to
    ///
    /// Fulfillment is only accepted while the round is locked and only
    /// from the exact account recorded by `begin_settlement`.
    pub fn verify_pending_request(&self, randomness_account: &Pubkey) -> Result<()> {
        require!(
            self.status == RaffleStatus::Calculating,
            RaffleError::StaleRandomnessRequest
        );
        require_keys_eq!(
            self.randomness_account,
            *randomness_account,
            RaffleError::StaleRandomnessRequest
        );

        Ok(())
    }

    /// Select the winning player for `random_value`
    ///
    /// Reduces the full 32-byte value modulo the player count, so every
    /// byte of the oracle output influences the result.
    pub fn winner(&self, random_value: &[u8; 32]) -> Result<Pubkey> {
        let index = select_winner_index(random_value, self.players.len() as u64)?;
        Ok(self.players[index as usize])
    }

    /// Roll the account back to a fresh open round
    ///
    /// Clears the roster and pot, releases the settlement lock, and
    /// restarts the interval clock at `now`.
    pub fn reset(&mut self, winner: Pubkey, now: i64) {
        self.status = RaffleStatus::Open;
        self.players.clear();
        self.pot = 0;
        self.last_timestamp = now;
        self.randomness_account = Pubkey::default();
        self.commit_slot = 0;
        self.recent_winner = winner;
        self.rounds_settled = self.rounds_settled.saturating_add(1);
    }

    /// Number of players in the current round
    pub fn player_count(&self) -> u64 {
        self.players.len() as u64
    }

    /// Player at `index`, if the roster is that long
    pub fn player_at(&self, index: u64) -> Option<Pubkey> {
        self.players.get(index as usize).copied()
    }
}

/// Vault account holding the pot for a raffle
///
/// Lamports are held directly on this PDA; the account data only needs
/// to remember its own bump.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    /// Bump seed for the vault PDA
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEE: u64 = 100;
    const INTERVAL: i64 = 60;

    fn fresh_raffle(last_timestamp: i64) -> RaffleState {
        RaffleState {
            bump: 255,
            entrance_fee: FEE,
            interval: INTERVAL,
            status: RaffleStatus::Open,
            last_timestamp,
            pot: 0,
            players: Vec::new(),
            randomness_account: Pubkey::default(),
            commit_slot: 0,
            recent_winner: Pubkey::default(),
            rounds_settled: 0,
        }
    }

    fn value_bytes(value: u64) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        bytes
    }

    #[test]
    fn entry_records_player_and_credits_pot() {
        let mut raffle = fresh_raffle(0);
        let player = Pubkey::new_unique();

        raffle.record_entry(player, FEE).unwrap();

        assert_eq!(raffle.player_count(), 1);
        assert_eq!(raffle.player_at(0), Some(player));
        assert_eq!(raffle.pot, FEE);
    }

    #[test]
    fn entry_accepts_overpayment_in_full() {
        let mut raffle = fresh_raffle(0);

        raffle.record_entry(Pubkey::new_unique(), FEE + 37).unwrap();

        assert_eq!(raffle.pot, FEE + 37);
    }

    #[test]
    fn entry_rejects_underpayment() {
        let mut raffle = fresh_raffle(0);

        let res = raffle.record_entry(Pubkey::new_unique(), FEE - 1);

        assert_eq!(res, Err(RaffleError::InsufficientEntranceFee.into()));
        assert_eq!(raffle.player_count(), 0);
        assert_eq!(raffle.pot, 0);
    }

    #[test]
    fn entry_rejected_while_calculating() {
        let mut raffle = fresh_raffle(0);
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        raffle.begin_settlement(Pubkey::new_unique(), 10, INTERVAL).unwrap();

        // Rejected no matter how much the entrant pays.
        let res = raffle.record_entry(Pubkey::new_unique(), FEE);
        assert_eq!(res, Err(RaffleError::RaffleNotOpen.into()));

        let res = raffle.record_entry(Pubkey::new_unique(), FEE * 10);
        assert_eq!(res, Err(RaffleError::RaffleNotOpen.into()));
        assert_eq!(raffle.player_count(), 1);
    }

    #[test]
    fn entry_rejected_when_roster_full() {
        let mut raffle = fresh_raffle(0);
        for _ in 0..MAX_PLAYERS {
            raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        }

        let res = raffle.record_entry(Pubkey::new_unique(), FEE);

        assert_eq!(res, Err(RaffleError::RaffleFull.into()));
    }

    #[test]
    fn entry_rejected_on_pot_overflow() {
        let mut raffle = fresh_raffle(0);
        raffle.pot = u64::MAX;

        let res = raffle.record_entry(Pubkey::new_unique(), FEE);

        assert_eq!(res, Err(RaffleError::MathOverflow.into()));
        // The failed entry must not leave the player on the roster.
        assert_eq!(raffle.player_count(), 0);
        assert_eq!(raffle.pot, u64::MAX);
    }

    #[test]
    fn upkeep_requires_all_four_conditions() {
        let mut raffle = fresh_raffle(0);

        // No players, no pot yet.
        assert!(!raffle.upkeep_needed(INTERVAL));

        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();

        // Interval not yet elapsed.
        assert!(!raffle.upkeep_needed(INTERVAL - 1));
        // Boundary: exactly `interval` seconds counts as elapsed.
        assert!(raffle.upkeep_needed(INTERVAL));
        assert!(raffle.upkeep_needed(INTERVAL + 1));

        raffle.begin_settlement(Pubkey::new_unique(), 10, INTERVAL).unwrap();

        // Locked rounds are never due again.
        assert!(!raffle.upkeep_needed(INTERVAL * 10));
        let check = raffle.upkeep_check(INTERVAL * 10);
        assert!(!check.is_open);
        assert!(check.interval_elapsed);
        assert!(check.has_players);
        assert!(check.has_pot);
    }

    #[test]
    fn settlement_rejected_before_interval() {
        let mut raffle = fresh_raffle(0);
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();

        let res = raffle.begin_settlement(Pubkey::new_unique(), 10, INTERVAL - 1);

        assert_eq!(res, Err(RaffleError::UpkeepNotNeeded.into()));
        assert_eq!(raffle.status, RaffleStatus::Open);
    }

    #[test]
    fn settlement_rejected_without_players() {
        let mut raffle = fresh_raffle(0);

        let res = raffle.begin_settlement(Pubkey::new_unique(), 10, INTERVAL);

        assert_eq!(res, Err(RaffleError::UpkeepNotNeeded.into()));
    }

    #[test]
    fn settlement_locks_round_and_records_commitment() {
        let mut raffle = fresh_raffle(0);
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        let randomness = Pubkey::new_unique();

        raffle.begin_settlement(randomness, 42, INTERVAL + 5).unwrap();

        assert_eq!(raffle.status, RaffleStatus::Calculating);
        assert_eq!(raffle.last_timestamp, INTERVAL + 5);
        assert_eq!(raffle.randomness_account, randomness);
        assert_eq!(raffle.commit_slot, 42);

        // A second trigger while locked is rejected.
        let res = raffle.begin_settlement(Pubkey::new_unique(), 43, INTERVAL * 10);
        assert_eq!(res, Err(RaffleError::UpkeepNotNeeded.into()));
    }

    #[test]
    fn fulfillment_requires_locked_round() {
        let raffle = fresh_raffle(0);

        let res = raffle.verify_pending_request(&Pubkey::new_unique());

        assert_eq!(res, Err(RaffleError::StaleRandomnessRequest.into()));
    }

    #[test]
    fn fulfillment_requires_committed_account() {
        let mut raffle = fresh_raffle(0);
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        let randomness = Pubkey::new_unique();
        raffle.begin_settlement(randomness, 10, INTERVAL).unwrap();

        let res = raffle.verify_pending_request(&Pubkey::new_unique());
        assert_eq!(res, Err(RaffleError::StaleRandomnessRequest.into()));

        // A rejected fulfillment leaves the locked round untouched.
        assert_eq!(raffle.status, RaffleStatus::Calculating);
        assert_eq!(raffle.pot, FEE);
        assert_eq!(raffle.player_count(), 1);

        assert!(raffle.verify_pending_request(&randomness).is_ok());
    }

    #[test]
    fn winner_uses_value_modulo_player_count() {
        let mut raffle = fresh_raffle(0);
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for player in &players {
            raffle.record_entry(*player, FEE).unwrap();
        }

        // 7 % 3 == 1, 9 % 3 == 0.
        assert_eq!(raffle.winner(&value_bytes(7)).unwrap(), players[1]);
        assert_eq!(raffle.winner(&value_bytes(9)).unwrap(), players[0]);
    }

    #[test]
    fn winner_with_two_players() {
        let mut raffle = fresh_raffle(0);
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        raffle.record_entry(first, FEE).unwrap();
        raffle.record_entry(second, FEE).unwrap();

        // 5 % 2 == 1.
        assert_eq!(raffle.winner(&value_bytes(5)).unwrap(), second);
    }

    #[test]
    fn winner_with_empty_roster_is_rejected() {
        let raffle = fresh_raffle(0);

        let res = raffle.winner(&value_bytes(7));

        assert_eq!(res, Err(RaffleError::NoPlayers.into()));
    }

    #[test]
    fn reset_reopens_round_for_new_entries() {
        let mut raffle = fresh_raffle(0);
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        raffle.begin_settlement(Pubkey::new_unique(), 10, INTERVAL).unwrap();
        let winner = Pubkey::new_unique();

        raffle.reset(winner, INTERVAL + 30);

        assert_eq!(raffle.status, RaffleStatus::Open);
        assert_eq!(raffle.player_count(), 0);
        assert_eq!(raffle.pot, 0);
        assert_eq!(raffle.last_timestamp, INTERVAL + 30);
        assert_eq!(raffle.randomness_account, Pubkey::default());
        assert_eq!(raffle.commit_slot, 0);
        assert_eq!(raffle.recent_winner, winner);
        assert_eq!(raffle.rounds_settled, 1);

        // The next round accepts entries again and runs a fresh clock.
        raffle.record_entry(Pubkey::new_unique(), FEE).unwrap();
        assert!(!raffle.upkeep_needed(INTERVAL + 30 + INTERVAL - 1));
        assert!(raffle.upkeep_needed(INTERVAL + 30 + INTERVAL));
    }

    #[test]
    fn single_entry_round_pays_the_only_player() {
        // Fee 100 lamports, 60 second interval, one entrant at t = 0.
        let mut raffle = fresh_raffle(0);
        let player = Pubkey::new_unique();
        raffle.record_entry(player, 100).unwrap();

        assert!(!raffle.upkeep_needed(59));
        let randomness = Pubkey::new_unique();
        raffle.begin_settlement(randomness, 7, 61).unwrap();
        assert_eq!(raffle.last_timestamp, 61);

        // Any value modulo one player picks that player.
        let winner = raffle.winner(&value_bytes(42)).unwrap();
        assert_eq!(winner, player);

        let prize = raffle.pot;
        assert_eq!(prize, 100);
        raffle.reset(winner, 61);
        assert_eq!(raffle.pot, 0);
    }

    #[test]
    fn full_round_scenario() {
        // Fee 100 lamports, 60 second interval, three entrants.
        let mut raffle = fresh_raffle(1_000);
        let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        raffle.record_entry(players[0], 100).unwrap();
        raffle.record_entry(players[1], 100).unwrap();
        raffle.record_entry(players[2], 250).unwrap();
        assert_eq!(raffle.pot, 450);

        // Due at t = 1_061, one second past the interval.
        assert!(!raffle.upkeep_needed(1_059));
        let randomness = Pubkey::new_unique();
        raffle.begin_settlement(randomness, 500, 1_061).unwrap();

        raffle.verify_pending_request(&randomness).unwrap();
        // 42 % 3 == 0.
        let winner = raffle.winner(&value_bytes(42)).unwrap();
        assert_eq!(winner, players[0]);

        raffle.reset(winner, 1_062);
        assert_eq!(raffle.recent_winner, players[0]);
        assert_eq!(raffle.status, RaffleStatus::Open);
    }
}
