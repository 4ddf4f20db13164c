use anchor_lang::prelude::*;

use crate::errors::GameError;

/// A winning round pays 1.98x the wager (2% house edge on a fair flip).
pub const PAYOUT_MULTIPLIER_NUM: u64 = 198;
pub const PAYOUT_MULTIPLIER_DEN: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub games_played: u16,
    /// Gross amount returned to the player, including unplayed stake.
    pub payout: u64,
    /// `payout` minus the full escrowed stake.
    pub net: i64,
    pub outcomes: Vec<bool>,
    pub round_payouts: Vec<u64>,
}

/// Amount credited for a single winning round, truncated.
pub fn win_payout(wager: u64) -> Result<u64> {
    let scaled = (wager as u128)
        .checked_mul(PAYOUT_MULTIPLIER_NUM as u128)
        .ok_or(GameError::Overflow)?
        / PAYOUT_MULTIPLIER_DEN as u128;
    u64::try_from(scaled).map_err(|_| error!(GameError::Overflow))
}

/// Worst case the house can owe for a batch: every round won.
pub fn max_payout(wager: u64, num_games: u16) -> Result<u64> {
    win_payout(wager)?
        .checked_mul(num_games as u64)
        .ok_or(error!(GameError::Overflow))
}

/// Replays `outcomes` in order against `prediction` and stops as soon as the
/// cumulative profit reaches `stop_gain` or the cumulative loss reaches
/// `stop_loss`. Rounds after the stop are refunded at face value.
pub fn settle(
    outcomes: &[bool],
    prediction: bool,
    wager: u64,
    stop_gain: u64,
    stop_loss: u64,
) -> Result<Settlement> {
    let per_win = win_payout(wager)?;
    let num_games = outcomes.len();

    let mut profit: i128 = 0;
    let mut paid: u128 = 0;
    let mut used = Vec::with_capacity(num_games);
    let mut round_payouts = Vec::with_capacity(num_games);

    for &outcome in outcomes {
        let round = if outcome == prediction { per_win } else { 0 };
        profit += round as i128 - wager as i128;
        paid += round as u128;
        used.push(outcome);
        round_payouts.push(round);

        if profit >= stop_gain as i128 || -profit >= stop_loss as i128 {
            break;
        }
    }

    let games_played = used.len();
    let unplayed = (num_games - games_played) as u128;
    let total = paid
        .checked_add(unplayed * wager as u128)
        .ok_or(GameError::Overflow)?;
    let payout = u64::try_from(total).map_err(|_| error!(GameError::Overflow))?;
    let stake = (wager as i128) * num_games as i128;
    let net = i64::try_from(payout as i128 - stake).map_err(|_| error!(GameError::Overflow))?;

    Ok(Settlement {
        games_played: u16::try_from(games_played).map_err(|_| error!(GameError::Overflow))?,
        payout,
        net,
        outcomes: used,
        round_payouts,
    })
}
