use anchor_lang::prelude::*;
#[error_code]
pub enum GameError {
    #[msg("Number of games must be between 1 and 100")]
    InvalidRoundCount,
    #[msg("Wager must be greater than zero")]
    InvalidBetAmount,
    #[msg("Player already has a session awaiting randomness")]
    SessionBusy,
    #[msg("Asset is not allowed for wagering")]
    AssetNotAllowed,
    #[msg("Wager exceeds the bankroll or USD limit")]
    WagerAboveLimit,
    #[msg("Escrowed value does not cover wager and oracle fee")]
    InsufficientPayment,
    #[msg("Player cannot pay the oracle fee")]
    FeeUnaffordable,
    #[msg("Caller is not authorized for this instruction")]
    UnauthorizedCaller,
    #[msg("No pending session matches this request id")]
    UnknownRequest,
    #[msg("Random word count does not match the number of games")]
    RandomnessLengthMismatch,
    #[msg("Player has no session awaiting randomness")]
    NoActiveSession,
    #[msg("Refund delay has not elapsed yet")]
    TimeoutNotReached,
    #[msg("House vault is locked")]
    HouseLocked,
    #[msg("Insufficient vault balance for payout")]
    InsufficientVaultBalance,
    #[msg("Recipient rejected a direct transfer and no wrapped SOL account was supplied")]
    WrappedAccountRequired,
    #[msg("Token accounts are missing or do not match the wager asset")]
    InvalidTokenAccounts,
    #[msg("Price feed returned a non-positive price")]
    InvalidPrice,
    #[msg("Invalid game configuration")]
    InvalidConfig,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Asset account does not match the session asset")]
    AssetMismatch,
}
