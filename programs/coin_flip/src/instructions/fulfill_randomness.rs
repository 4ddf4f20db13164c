use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameError;
use crate::events::OutcomeResolvedEvent;
use crate::states::*;
use crate::{ledger, oracle, payout};

/// Oracle callback: resolves a pending batch with one raw word per round
///
/// Only the registered coordinator may call this. The words are turned into
/// coin outcomes, replayed against the player's prediction until a stop
/// condition trips, and the resulting payout (wins plus untouched stake of
/// unplayed rounds) is sent to the player. Losses stay in the vault.
pub fn fulfill_randomness(
    ctx: Context<FulfillRandomness>,
    request_id: u64,
    random_words: Vec<u64>,
) -> Result<()> {
    let session = &mut ctx.accounts.session;
    let asset_config = &mut ctx.accounts.asset_config;
    let clock = Clock::get()?;

    let request_info = ctx.accounts.request.to_account_info();
    let request = oracle::load_request(&request_info)?;
    oracle::verify_fulfillment(session, &request, request_id, &random_words)?;

    let outcomes = oracle::outcomes_from_words(&random_words);
    let settlement = payout::settle(
        &outcomes,
        session.prediction,
        session.wager,
        session.stop_gain,
        session.stop_loss,
    )?;

    asset_config.release(session.reserved_payout)?;

    let vault_info = ctx.accounts.house_vault.to_account_info();
    let player_info = ctx.accounts.player.to_account_info();
    // request rent reaches the player before the payout
    oracle::close_request(&request_info, &player_info)?;

    if asset_config.is_native() {
        let route = ledger::pay_native(
            &vault_info,
            &player_info,
            ctx.accounts.player_wrapped.as_ref(),
            ctx.accounts.token_program.as_ref(),
            settlement.payout,
        )?;
        msg!("Settlement route: {:?}", route);
    } else {
        let tokens = ledger::token_accounts(
            &session.asset,
            &session.player,
            &vault_info.key(),
            &ctx.accounts.vault_token,
            &ctx.accounts.player_token,
            &ctx.accounts.token_program,
        )?;
        ledger::pay_token(
            &vault_info,
            ctx.accounts.house_vault.bump,
            &tokens,
            settlement.payout,
        )?;
    }

    session.reset();

    msg!(
        "Request {} resolved: {}/{} games played, payout {}, net {}",
        request_id,
        settlement.games_played,
        session.num_games,
        settlement.payout,
        settlement.net
    );
    emit!(OutcomeResolvedEvent {
        player: session.player,
        request_id,
        wager: session.wager,
        asset: session.asset,
        payout: settlement.payout,
        net: settlement.net,
        outcomes: settlement.outcomes,
        round_payouts: settlement.round_payouts,
        games_played: settlement.games_played,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillRandomness<'info> {
    pub coordinator: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
        constraint = config.oracle_coordinator == coordinator.key() @ GameError::UnauthorizedCaller,
    )]
    pub config: Account<'info, GameConfig>,

    /// CHECK: payout recipient, tied to the session through its seeds
    #[account(mut)]
    pub player: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SESSION_SEED.as_bytes(), player.key().as_ref()],
        bump = session.bump,
    )]
    pub session: Account<'info, WagerSession>,

    /// CHECK: request record, loaded in the handler so a resolved or unknown
    /// id fails with UnknownRequest
    #[account(
        mut,
        seeds = [REQUEST_SEED.as_bytes(), request_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub request: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [HOUSE_VAULT_SEED.as_bytes()],
        bump = house_vault.bump,
    )]
    pub house_vault: Account<'info, HouseVault>,

    #[account(
        mut,
        seeds = [ASSET_SEED.as_bytes(), session.asset.as_ref()],
        bump = asset_config.bump,
    )]
    pub asset_config: Account<'info, AssetConfig>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED.as_bytes(), session.asset.as_ref()],
        bump,
    )]
    pub vault_token: Option<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub player_token: Option<Account<'info, TokenAccount>>,
    /// Wrapped SOL account used when the player rejects a direct lamport credit
    #[account(mut)]
    pub player_wrapped: Option<Account<'info, TokenAccount>>,
    pub token_program: Option<Program<'info, Token>>,
}
