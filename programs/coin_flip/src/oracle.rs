//! Randomness oracle client
//!
//! Requests are published as a `RandomnessRequest` record plus a
//! `RandomnessRequestedEvent` that the off-chain coordinator watches. The
//! coordinator answers through `fulfill_randomness` with one raw word per
//! round. There is no retry on this side: if the answer never comes the
//! player falls back to `refund`.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::GameError;
use crate::events::RandomnessRequestedEvent;
use crate::states::*;

/// Fee charged for a request of `num_words` random values.
pub fn quote_fee(config: &GameConfig, num_words: u16) -> Result<u64> {
    config
        .oracle_fee_per_word
        .checked_mul(num_words as u64)
        .and_then(|v| v.checked_add(config.oracle_base_fee))
        .ok_or(error!(GameError::Overflow))
}

/// Odd words land on `true`, even words on `false`.
pub fn outcomes_from_words(words: &[u64]) -> Vec<bool> {
    words.iter().map(|w| w % 2 == 1).collect()
}

/// Records the request and emits the event the coordinator acts on.
pub fn request_randomness(
    config: &GameConfig,
    request: &mut RandomnessRequest,
    request_id: u64,
    player: Pubkey,
    num_words: u16,
    slot: u64,
    bump: u8,
) {
    request.request_id = request_id;
    request.player = player;
    request.num_words = num_words;
    request.requested_slot = slot;
    request.bump = bump;

    emit!(RandomnessRequestedEvent {
        request_id,
        player,
        subscription_id: config.subscription_id,
        key_hash: config.key_hash,
        request_confirmations: config.request_confirmations,
        callback_compute_units: config.callback_compute_units,
        num_words,
        slot,
    });
}

/// Checks a callback against the pending session before any state changes.
pub fn verify_fulfillment(
    session: &WagerSession,
    request: &RandomnessRequest,
    request_id: u64,
    words: &[u64],
) -> Result<()> {
    require!(
        session.is_pending_request(request_id),
        GameError::UnknownRequest
    );
    require!(
        request.matches(request_id, &session.player),
        GameError::UnknownRequest
    );
    require!(
        words.len() == session.num_games as usize && request.num_words == session.num_games,
        GameError::RandomnessLengthMismatch
    );
    Ok(())
}

/// Reads the request record behind `info`. A closed or foreign account means
/// the request is not outstanding.
pub fn load_request(info: &AccountInfo) -> Result<RandomnessRequest> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return err!(GameError::UnknownRequest);
    }
    let data = info.try_borrow_data()?;
    let request = RandomnessRequest::try_deserialize(&mut &data[..])
        .map_err(|_| error!(GameError::UnknownRequest))?;
    Ok(request)
}

/// Closes a request record and hands its rent back to `destination`.
pub fn close_request<'info>(
    info: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    let rent = info.lamports();
    **destination.try_borrow_mut_lamports()? = destination
        .lamports()
        .checked_add(rent)
        .ok_or(GameError::Overflow)?;
    **info.try_borrow_mut_lamports()? = 0;
    info.assign(&system_program::ID);
    info.resize(0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(base: u64, per_word: u64) -> GameConfig {
        GameConfig {
            owner: Pubkey::default(),
            oracle_coordinator: Pubkey::new_unique(),
            subscription_id: 1,
            key_hash: [0u8; 32],
            request_confirmations: DEFAULT_REQUEST_CONFIRMATIONS,
            callback_compute_units: DEFAULT_CALLBACK_COMPUTE_UNITS,
            oracle_base_fee: base,
            oracle_fee_per_word: per_word,
            max_wager_ppm: DEFAULT_MAX_WAGER_PPM,
            max_wager_usd_cents: DEFAULT_MAX_WAGER_USD_CENTS,
            refund_delay_slots: DEFAULT_REFUND_DELAY_SLOTS,
            request_nonce: 1,
            bump: 0,
        }
    }

    fn pending_session(player: Pubkey, request_id: u64, num_games: u16) -> WagerSession {
        WagerSession {
            player,
            asset: NATIVE_ASSET,
            status: SessionStatus::AwaitingRandomness,
            wager: 100,
            prediction: true,
            num_games,
            stop_gain: 10_000,
            stop_loss: 10_000,
            request_id,
            request_slot: 50,
            oracle_fee: 0,
            reserved_payout: 198 * num_games as u64,
            bump: 0,
        }
    }

    fn request(player: Pubkey, request_id: u64, num_words: u16) -> RandomnessRequest {
        RandomnessRequest {
            request_id,
            player,
            num_words,
            requested_slot: 50,
            bump: 0,
        }
    }

    #[rstest]
    #[case(100_000, 5_000, 1, 105_000)]
    #[case(100_000, 5_000, 100, 600_000)]
    #[case(0, 0, 50, 0)]
    fn test_quote_fee(
        #[case] base: u64,
        #[case] per_word: u64,
        #[case] words: u16,
        #[case] expected: u64,
    ) {
        assert_eq!(quote_fee(&config(base, per_word), words).unwrap(), expected);
    }

    #[test]
    fn test_quote_fee_overflow() {
        assert!(quote_fee(&config(1, u64::MAX), 2).is_err());
    }

    #[rstest]
    #[case(&[1, 1, 1], &[true, true, true])]
    #[case(&[0, 2, 4], &[false, false, false])]
    #[case(&[9, 11, 13, 14], &[true, true, true, false])]
    #[case(&[u64::MAX, u64::MAX - 1], &[true, false])]
    fn test_outcomes_from_words(#[case] words: &[u64], #[case] expected: &[bool]) {
        assert_eq!(outcomes_from_words(words), expected.to_vec());
    }

    #[test]
    fn test_outcomes_preserve_length() {
        let words: Vec<u64> = (0..100).collect();
        let outcomes = outcomes_from_words(&words);
        assert_eq!(outcomes.len(), 100);
        assert_eq!(outcomes.iter().filter(|o| **o).count(), 50);
    }

    #[test]
    fn test_fulfillment_accepted_for_pending_request() {
        let player = Pubkey::new_unique();
        let session = pending_session(player, 7, 3);
        assert!(verify_fulfillment(&session, &request(player, 7, 3), 7, &[1, 2, 3]).is_ok());
    }

    #[test]
    fn test_fulfillment_rejected_for_wrong_request_id() {
        let player = Pubkey::new_unique();
        let session = pending_session(player, 7, 3);
        assert!(verify_fulfillment(&session, &request(player, 8, 3), 8, &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_fulfillment_rejected_after_resolution() {
        let player = Pubkey::new_unique();
        let mut session = pending_session(player, 7, 3);
        session.reset();
        assert!(verify_fulfillment(&session, &request(player, 7, 3), 7, &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_fulfillment_rejected_for_foreign_request_record() {
        let player = Pubkey::new_unique();
        let session = pending_session(player, 7, 3);
        let foreign = request(Pubkey::new_unique(), 7, 3);
        assert!(verify_fulfillment(&session, &foreign, 7, &[1, 2, 3]).is_err());
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1, 2])]
    #[case(vec![1, 2, 3, 4])]
    fn test_fulfillment_rejects_wrong_word_count(#[case] words: Vec<u64>) {
        let player = Pubkey::new_unique();
        let session = pending_session(player, 7, 3);
        assert!(verify_fulfillment(&session, &request(player, 7, 3), 7, &words).is_err());
    }
}
