use anchor_lang::prelude::*;

use crate::errors::GameError;

// PDA seeds
pub const GAME_CONFIG_SEED: &str = "game_config";
pub const HOUSE_VAULT_SEED: &str = "house_vault";
pub const ASSET_SEED: &str = "asset";
pub const VAULT_TOKEN_SEED: &str = "vault_token";
pub const SESSION_SEED: &str = "session";
pub const REQUEST_SEED: &str = "request";
pub const PRICE_FEED_SEED: &str = "price_feed";

/// Marker used in place of a mint for native lamport wagers.
pub const NATIVE_ASSET: Pubkey = Pubkey::new_from_array([0u8; 32]);

pub const MIN_GAMES: u16 = 1;
pub const MAX_GAMES: u16 = 100;

pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;
pub const DEFAULT_CALLBACK_COMPUTE_UNITS: u32 = 400_000;
pub const DEFAULT_ORACLE_BASE_FEE: u64 = 100_000;
pub const DEFAULT_ORACLE_FEE_PER_WORD: u64 = 5_000;
/// ~1.12% of free bankroll per round
pub const DEFAULT_MAX_WAGER_PPM: u32 = 11_224;
/// $200.00
pub const DEFAULT_MAX_WAGER_USD_CENTS: u64 = 20_000;
/// Roughly one minute at 400ms per slot
pub const DEFAULT_REFUND_DELAY_SLOTS: u64 = 150;

#[derive(AnchorDeserialize, AnchorSerialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum SessionStatus {
    Idle,
    AwaitingRandomness,
}

#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    pub owner: Pubkey,
    pub oracle_coordinator: Pubkey,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub request_confirmations: u16,
    pub callback_compute_units: u32,
    pub oracle_base_fee: u64,
    pub oracle_fee_per_word: u64,
    pub max_wager_ppm: u32,
    pub max_wager_usd_cents: u64,
    pub refund_delay_slots: u64,
    pub request_nonce: u64,
    pub bump: u8,
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.max_wager_ppm > 0 && self.max_wager_ppm <= 1_000_000,
            GameError::InvalidConfig
        );
        require!(self.callback_compute_units > 0, GameError::InvalidConfig);
        require!(self.request_confirmations > 0, GameError::InvalidConfig);
        // a refund must never race a callback the oracle is still allowed to deliver
        require!(
            self.refund_delay_slots > self.request_confirmations as u64,
            GameError::InvalidConfig
        );
        require!(
            self.oracle_coordinator != Pubkey::default(),
            GameError::InvalidConfig
        );
        Ok(())
    }

    /// Returns the current nonce as the next request id and advances it.
    pub fn next_request_id(&mut self) -> Result<u64> {
        let id = self.request_nonce;
        self.request_nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or(GameError::Overflow)?;
        Ok(id)
    }
}

#[account]
#[derive(InitSpace)]
pub struct HouseVault {
    pub locked: bool,
    pub fees_reserved: u64, // lamports owed to the operator for oracle requests
    pub bump: u8,
}

impl HouseVault {
    pub fn accrue_fee(&mut self, fee: u64) -> Result<()> {
        self.fees_reserved = self
            .fees_reserved
            .checked_add(fee)
            .ok_or(GameError::Overflow)?;
        Ok(())
    }

    pub fn release_fees(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.fees_reserved,
            GameError::InsufficientVaultBalance
        );
        self.fees_reserved -= amount;
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct AssetConfig {
    pub mint: Pubkey,
    pub allowed: bool,
    pub total_reserved: u64, // worst-case payouts of pending sessions
    pub bump: u8,
}

impl AssetConfig {
    pub fn is_native(&self) -> bool {
        self.mint == NATIVE_ASSET
    }

    pub fn reserve(&mut self, amount: u64) -> Result<()> {
        self.total_reserved = self
            .total_reserved
            .checked_add(amount)
            .ok_or(GameError::Overflow)?;
        Ok(())
    }

    pub fn release(&mut self, amount: u64) -> Result<()> {
        self.total_reserved = self
            .total_reserved
            .checked_sub(amount)
            .ok_or(GameError::Overflow)?;
        Ok(())
    }
}

/// Parameters a player fixes when opening a batch.
#[derive(Clone, Copy, Debug)]
pub struct SessionTerms {
    pub asset: Pubkey,
    pub wager: u64,
    pub prediction: bool,
    pub num_games: u16,
    pub stop_gain: u64,
    pub stop_loss: u64,
    pub oracle_fee: u64,
    pub reserved_payout: u64,
}

#[account]
#[derive(InitSpace, Debug)]
pub struct WagerSession {
    pub player: Pubkey,
    pub asset: Pubkey,
    pub status: SessionStatus,
    pub wager: u64,
    pub prediction: bool,
    pub num_games: u16,
    pub stop_gain: u64,
    pub stop_loss: u64,
    pub request_id: u64,
    pub request_slot: u64,
    pub oracle_fee: u64,
    pub reserved_payout: u64,
    pub bump: u8,
}

impl WagerSession {
    pub fn ensure_idle(&self) -> Result<()> {
        require!(self.status == SessionStatus::Idle, GameError::SessionBusy);
        Ok(())
    }

    pub fn ensure_awaiting(&self) -> Result<()> {
        require!(
            self.status == SessionStatus::AwaitingRandomness,
            GameError::NoActiveSession
        );
        Ok(())
    }

    pub fn is_pending_request(&self, request_id: u64) -> bool {
        self.status == SessionStatus::AwaitingRandomness && self.request_id == request_id
    }

    /// Principal held in escrow, excluding the oracle fee.
    pub fn stake(&self) -> Result<u64> {
        self.wager
            .checked_mul(self.num_games as u64)
            .ok_or(error!(GameError::Overflow))
    }

    pub fn begin(&mut self, terms: SessionTerms, request_id: u64, slot: u64) -> Result<()> {
        self.ensure_idle()?;
        self.asset = terms.asset;
        self.wager = terms.wager;
        self.prediction = terms.prediction;
        self.num_games = terms.num_games;
        self.stop_gain = terms.stop_gain;
        self.stop_loss = terms.stop_loss;
        self.oracle_fee = terms.oracle_fee;
        self.reserved_payout = terms.reserved_payout;
        self.request_id = request_id;
        self.request_slot = slot;
        self.status = SessionStatus::AwaitingRandomness;
        Ok(())
    }

    /// Decodes session account data that may not exist yet. A missing,
    /// foreign or idle session reads as no active session.
    pub fn load_pending(owner: &Pubkey, data: &[u8]) -> Result<WagerSession> {
        require!(
            *owner == crate::ID && !data.is_empty(),
            GameError::NoActiveSession
        );
        let session = WagerSession::try_deserialize(&mut &data[..])
            .map_err(|_| error!(GameError::NoActiveSession))?;
        session.ensure_awaiting()?;
        Ok(session)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }

    /// Returns the session to Idle. The previous terms are kept for inspection
    /// but no longer bind to any request.
    pub fn reset(&mut self) {
        self.status = SessionStatus::Idle;
        self.reserved_payout = 0;
    }
}

/// Correlates an outstanding oracle request with the session waiting on it.
#[account]
#[derive(InitSpace)]
pub struct RandomnessRequest {
    pub request_id: u64,
    pub player: Pubkey,
    pub num_words: u16,
    pub requested_slot: u64,
    pub bump: u8,
}

impl RandomnessRequest {
    pub fn matches(&self, request_id: u64, player: &Pubkey) -> bool {
        self.request_id == request_id && self.player == *player
    }
}

#[account]
#[derive(InitSpace)]
pub struct PriceFeed {
    pub authority: Pubkey,
    pub price: i64,
    pub decimals: u8,
    pub updated_at: i64,
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn test_config() -> GameConfig {
        GameConfig {
            owner: Pubkey::new_unique(),
            oracle_coordinator: Pubkey::new_unique(),
            subscription_id: 1,
            key_hash: [7u8; 32],
            request_confirmations: DEFAULT_REQUEST_CONFIRMATIONS,
            callback_compute_units: DEFAULT_CALLBACK_COMPUTE_UNITS,
            oracle_base_fee: DEFAULT_ORACLE_BASE_FEE,
            oracle_fee_per_word: DEFAULT_ORACLE_FEE_PER_WORD,
            max_wager_ppm: DEFAULT_MAX_WAGER_PPM,
            max_wager_usd_cents: DEFAULT_MAX_WAGER_USD_CENTS,
            refund_delay_slots: DEFAULT_REFUND_DELAY_SLOTS,
            request_nonce: 1,
            bump: 0,
        }
    }

    fn idle_session() -> WagerSession {
        WagerSession {
            player: Pubkey::new_unique(),
            asset: NATIVE_ASSET,
            status: SessionStatus::Idle,
            wager: 0,
            prediction: false,
            num_games: 0,
            stop_gain: 0,
            stop_loss: 0,
            request_id: 0,
            request_slot: 0,
            oracle_fee: 0,
            reserved_payout: 0,
            bump: 0,
        }
    }

    fn terms() -> SessionTerms {
        SessionTerms {
            asset: NATIVE_ASSET,
            wager: 100,
            prediction: true,
            num_games: 5,
            stop_gain: 150,
            stop_loss: 300,
            oracle_fee: 125_000,
            reserved_payout: 990,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(test_config().validate().is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(1_000_001)]
    fn test_config_rejects_bankroll_fraction(#[case] ppm: u32) {
        let mut config = test_config();
        config.max_wager_ppm = ppm;
        assert!(config.validate().is_err());
    }

    #[rstest]
    #[case(3, 3)]
    #[case(10, 5)]
    fn test_config_rejects_refund_delay_not_above_confirmations(
        #[case] confirmations: u16,
        #[case] delay: u64,
    ) {
        let mut config = test_config();
        config.request_confirmations = confirmations;
        config.refund_delay_slots = delay;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_missing_coordinator() {
        let mut config = test_config();
        config.oracle_coordinator = Pubkey::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_ids_are_unique_and_increasing() {
        let mut config = test_config();
        let first = config.next_request_id().unwrap();
        let second = config.next_request_id().unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(config.request_nonce, 3);
    }

    #[test]
    fn test_request_nonce_overflow_is_an_error() {
        let mut config = test_config();
        config.request_nonce = u64::MAX;
        assert!(config.next_request_id().is_err());
    }

    #[test]
    fn test_begin_moves_session_to_awaiting() {
        let mut session = idle_session();
        session.begin(terms(), 42, 1_000).unwrap();

        assert_eq!(session.status, SessionStatus::AwaitingRandomness);
        assert_eq!(session.request_id, 42);
        assert_eq!(session.request_slot, 1_000);
        assert_eq!(session.stake().unwrap(), 500);
        assert!(session.is_pending_request(42));
        assert!(!session.is_pending_request(43));
    }

    #[test]
    fn test_second_begin_while_pending_is_rejected() {
        let mut session = idle_session();
        session.begin(terms(), 1, 10).unwrap();

        let mut other = terms();
        other.wager = 1;
        assert!(session.begin(other, 2, 11).is_err());
        // the pending batch is untouched
        assert_eq!(session.wager, 100);
        assert_eq!(session.request_id, 1);
    }

    #[test]
    fn test_reset_releases_request_binding() {
        let mut session = idle_session();
        session.begin(terms(), 9, 10).unwrap();
        session.reset();

        assert_eq!(session.status, SessionStatus::Idle);
        assert!(!session.is_pending_request(9));
        assert!(session.ensure_awaiting().is_err());
        assert!(session.ensure_idle().is_ok());
    }

    fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error {e:?}"),
        }
    }

    fn session_bytes(session: &WagerSession) -> Vec<u8> {
        let mut data = Vec::new();
        session.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn test_missing_session_reads_as_no_active_session() {
        let no_active = GameError::NoActiveSession as u32 + anchor_lang::error::ERROR_CODE_OFFSET;
        // never created or closed: system-owned and empty
        let err = WagerSession::load_pending(&Pubkey::default(), &[]).unwrap_err();
        assert_eq!(error_code(err), no_active);

        let mut pending = idle_session();
        pending.begin(terms(), 4, 10).unwrap();
        let foreign = WagerSession::load_pending(&Pubkey::new_unique(), &session_bytes(&pending));
        assert_eq!(error_code(foreign.unwrap_err()), no_active);

        let idle = WagerSession::load_pending(&crate::ID, &session_bytes(&idle_session()));
        assert_eq!(error_code(idle.unwrap_err()), no_active);

        let garbage = WagerSession::load_pending(&crate::ID, &[1, 2, 3]);
        assert_eq!(error_code(garbage.unwrap_err()), no_active);
    }

    #[test]
    fn test_pending_session_loads() {
        let mut pending = idle_session();
        pending.begin(terms(), 4, 10).unwrap();
        let loaded = WagerSession::load_pending(&crate::ID, &session_bytes(&pending)).unwrap();
        assert_eq!(loaded.request_id, 4);
        assert_eq!(loaded.player, pending.player);
        assert_eq!(loaded.stake().unwrap(), 500);
    }

    #[test]
    fn test_idle_session_has_no_pending_request() {
        let session = idle_session();
        assert!(!session.is_pending_request(0));
        assert!(session.ensure_awaiting().is_err());
    }

    #[test]
    fn test_asset_reservation_accounting() {
        let mut asset = AssetConfig {
            mint: NATIVE_ASSET,
            allowed: true,
            total_reserved: 0,
            bump: 0,
        };
        asset.reserve(990).unwrap();
        asset.reserve(10).unwrap();
        assert_eq!(asset.total_reserved, 1_000);
        asset.release(990).unwrap();
        assert_eq!(asset.total_reserved, 10);
        assert!(asset.release(11).is_err());
        assert!(asset.is_native());
    }

    #[test]
    fn test_vault_fee_accounting() {
        let mut vault = HouseVault {
            locked: false,
            fees_reserved: 0,
            bump: 0,
        };
        vault.accrue_fee(125_000).unwrap();
        assert!(vault.release_fees(125_001).is_err());
        vault.release_fees(25_000).unwrap();
        assert_eq!(vault.fees_reserved, 100_000);
    }

    #[test]
    fn test_request_record_matching() {
        let player = Pubkey::new_unique();
        let request = RandomnessRequest {
            request_id: 5,
            player,
            num_words: 3,
            requested_slot: 100,
            bump: 0,
        };
        assert!(request.matches(5, &player));
        assert!(!request.matches(6, &player));
        assert!(!request.matches(5, &Pubkey::new_unique()));
    }
}
