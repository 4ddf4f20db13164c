use anchor_lang::prelude::*;
#[event]
pub struct InitializeHouseVaultEvent {
    pub house_vault: Pubkey,
    pub owner: Pubkey,
    pub locked: bool,
    pub timestamp: i64,
}
#[event]
pub struct PlayAcceptedEvent {
    pub player: Pubkey,
    pub wager: u64,
    pub asset: Pubkey,
    pub prediction: bool,
    pub num_games: u16,
    pub stop_gain: u64,
    pub stop_loss: u64,
    pub oracle_fee: u64,
    pub request_id: u64,
    pub timestamp: i64,
}
/// Picked up by the off-chain oracle coordinator.
#[event]
pub struct RandomnessRequestedEvent {
    pub request_id: u64,
    pub player: Pubkey,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub request_confirmations: u16,
    pub callback_compute_units: u32,
    pub num_words: u16,
    pub slot: u64,
}
#[event]
pub struct OutcomeResolvedEvent {
    pub player: Pubkey,
    pub request_id: u64,
    pub wager: u64,
    pub asset: Pubkey,
    pub payout: u64,
    /// `payout` minus the escrowed stake; negative when the house won.
    pub net: i64,
    pub outcomes: Vec<bool>,
    pub round_payouts: Vec<u64>,
    pub games_played: u16,
    pub timestamp: i64,
}
#[event]
pub struct RefundIssuedEvent {
    pub player: Pubkey,
    pub amount: u64,
    pub asset: Pubkey,
    pub slots_waited: u64,
    pub timestamp: i64,
}
#[event]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
#[event]
pub struct SubscriptionChangedEvent {
    pub old_subscription_id: u64,
    pub new_subscription_id: u64,
}
#[event]
pub struct AssetAllowListedEvent {
    pub asset: Pubkey,
    pub allowed: bool,
}
#[event]
pub struct HouseEdgeWithdrawnEvent {
    pub to: Pubkey,
    pub amount: u64,
    pub asset: Pubkey,
}
#[event]
pub struct OracleFeesWithdrawnEvent {
    pub to: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}
#[event]
pub struct ToggleHouseLockEvent {
    pub house_vault: Pubkey,
    pub owner: Pubkey,
    pub locked: bool,
    pub timestamp: i64,
}
