use anchor_lang::prelude::*;

use crate::errors::GameError;
use crate::states::*;
use crate::{oracle, payout};

pub const PPM: u64 = 1_000_000;
pub const LAMPORTS_PER_SOL: u128 = 1_000_000_000;

/// Largest per-round wager the free bankroll supports.
pub fn bankroll_ceiling(available: u64, max_wager_ppm: u32) -> u64 {
    ((available as u128 * max_wager_ppm as u128) / PPM as u128) as u64
}

/// USD value of `lamports` in cents, `None` on overflow.
pub fn usd_value_cents(lamports: u64, price: i64, decimals: u8) -> Option<u128> {
    let price = u128::try_from(price).ok()?;
    let scale = 10u128.checked_pow(decimals as u32)?;
    (lamports as u128)
        .checked_mul(price)?
        .checked_mul(100)?
        .checked_div(scale)?
        .checked_div(LAMPORTS_PER_SOL)
}

/// Applies the bankroll fraction to every wager and, for native wagers, the
/// USD ceiling from the price feed.
pub fn check_wager(
    config: &GameConfig,
    wager: u64,
    available: u64,
    price_feed: Option<&PriceFeed>,
) -> Result<()> {
    require!(
        wager <= bankroll_ceiling(available, config.max_wager_ppm),
        GameError::WagerAboveLimit
    );

    if let Some(feed) = price_feed {
        require!(feed.price > 0, GameError::InvalidPrice);
        let within = usd_value_cents(wager, feed.price, feed.decimals)
            .is_some_and(|cents| cents <= config.max_wager_usd_cents as u128);
        require!(within, GameError::WagerAboveLimit);
    }
    Ok(())
}

/// What a play takes from the player and holds against the bankroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escrow {
    /// `wager * num_games` in the wager asset.
    pub stake: u64,
    /// Always lamports, whatever the asset.
    pub oracle_fee: u64,
    pub reserved_payout: u64,
}

impl Escrow {
    /// Lamports the player sends: stake and fee for native wagers, the fee
    /// alone otherwise.
    pub fn lamports(&self, native: bool) -> Result<u64> {
        if native {
            self.stake
                .checked_add(self.oracle_fee)
                .ok_or(error!(GameError::Overflow))
        } else {
            Ok(self.oracle_fee)
        }
    }

    /// Least `escrow_amount` a play must declare in the wager asset.
    pub fn declared_minimum(&self, native: bool) -> Result<u64> {
        if native {
            self.lamports(true)
        } else {
            Ok(self.stake)
        }
    }
}

pub fn escrow_required(config: &GameConfig, wager: u64, num_games: u16) -> Result<Escrow> {
    let stake = wager
        .checked_mul(num_games as u64)
        .ok_or(GameError::Overflow)?;
    Ok(Escrow {
        stake,
        oracle_fee: oracle::quote_fee(config, num_games)?,
        reserved_payout: payout::max_payout(wager, num_games)?,
    })
}

/// Checks a play request that does not depend on balances. Fails with the
/// first violated rule: round count, wager, session state, house lock, asset.
pub fn check_play(
    wager: u64,
    num_games: u16,
    session: &WagerSession,
    house_vault: &HouseVault,
    asset_config: &AssetConfig,
) -> Result<()> {
    require!(
        (MIN_GAMES..=MAX_GAMES).contains(&num_games),
        GameError::InvalidRoundCount
    );
    require!(wager > 0, GameError::InvalidBetAmount);
    session.ensure_idle()?;
    require!(!house_vault.locked, GameError::HouseLocked);
    require!(asset_config.allowed, GameError::AssetNotAllowed);
    Ok(())
}
