use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameError;
use crate::events::PlayAcceptedEvent;
use crate::states::*;
use crate::{ledger, limits, oracle};

/// Opens a batch of `num_games` coin flips and asks the oracle for one random
/// word per round.
///
/// Escrows `wager * num_games` of the asset plus the oracle fee in lamports,
/// reserves the worst-case payout against the asset bankroll and leaves the
/// session waiting for `fulfill_randomness` (or `refund`).
#[allow(clippy::too_many_arguments)]
pub fn play(
    ctx: Context<Play>,
    wager: u64,
    asset: Pubkey,
    prediction: bool,
    num_games: u16,
    stop_gain: u64,
    stop_loss: u64,
    escrow_amount: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let house_vault = &mut ctx.accounts.house_vault;
    let asset_config = &mut ctx.accounts.asset_config;
    let session = &mut ctx.accounts.session;
    let player = &ctx.accounts.player;
    let clock = Clock::get()?;

    limits::check_play(wager, num_games, session, house_vault, asset_config)?;
    let escrow = limits::escrow_required(config, wager, num_games)?;
    let native = asset_config.is_native();
    let limits::Escrow {
        stake,
        oracle_fee,
        reserved_payout,
    } = escrow;
    let vault_info = house_vault.to_account_info();

    let available = if native {
        let rent = Rent::get()?;
        let available = ledger::available_native(
            vault_info.lamports(),
            rent.minimum_balance(vault_info.data_len()),
            house_vault.fees_reserved,
            asset_config.total_reserved,
        );
        let feed = ctx
            .accounts
            .price_feed
            .as_deref()
            .ok_or(GameError::InvalidPrice)?;
        limits::check_wager(config, wager, available, Some(feed))?;

        require!(
            escrow_amount >= escrow.declared_minimum(native)?,
            GameError::InsufficientPayment
        );
        ledger::collect_native(
            player,
            vault_info.clone(),
            &ctx.accounts.system_program,
            escrow.lamports(native)?,
        )?;
        available
    } else {
        let tokens = ledger::token_accounts(
            &asset,
            &player.key(),
            &house_vault.key(),
            &ctx.accounts.vault_token,
            &ctx.accounts.player_token,
            &ctx.accounts.token_program,
        )?;
        let available =
            ledger::available_token(tokens.vault_token.amount, asset_config.total_reserved);
        limits::check_wager(config, wager, available, None)?;

        require!(
            escrow_amount >= escrow.declared_minimum(native)?,
            GameError::InsufficientPayment
        );
        let fee_lamports = escrow.lamports(native)?;
        require!(
            player.lamports() >= fee_lamports,
            GameError::FeeUnaffordable
        );
        ledger::collect_token(player, &tokens, stake)?;
        ledger::collect_native(
            player,
            vault_info.clone(),
            &ctx.accounts.system_program,
            fee_lamports,
        )
        .map_err(|_| error!(GameError::FeeUnaffordable))?;
        available
    };

    // The escrowed stake joins the bankroll backing this session's payout
    let backing = available.checked_add(stake).ok_or(GameError::Overflow)?;
    require!(
        backing >= reserved_payout,
        GameError::InsufficientVaultBalance
    );
    asset_config.reserve(reserved_payout)?;
    house_vault.accrue_fee(oracle_fee)?;

    let request_id = config.next_request_id()?;
    session.player = player.key();
    session.bump = ctx.bumps.session;
    session.begin(
        SessionTerms {
            asset,
            wager,
            prediction,
            num_games,
            stop_gain,
            stop_loss,
            oracle_fee,
            reserved_payout,
        },
        request_id,
        clock.slot,
    )?;

    oracle::request_randomness(
        config,
        &mut ctx.accounts.request,
        request_id,
        player.key(),
        num_games,
        clock.slot,
        ctx.bumps.request,
    );

    msg!(
        "Play accepted: request {} wager {} x {} games, fee {}",
        request_id,
        wager,
        num_games,
        oracle_fee
    );
    emit!(PlayAcceptedEvent {
        player: player.key(),
        wager,
        asset,
        prediction,
        num_games,
        stop_gain,
        stop_loss,
        oracle_fee,
        request_id,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wager: u64, asset: Pubkey)]
pub struct Play<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [HOUSE_VAULT_SEED.as_bytes()],
        bump = house_vault.bump,
    )]
    pub house_vault: Account<'info, HouseVault>,

    #[account(
        mut,
        seeds = [ASSET_SEED.as_bytes(), asset.as_ref()],
        bump = asset_config.bump,
    )]
    pub asset_config: Account<'info, AssetConfig>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + WagerSession::INIT_SPACE,
        seeds = [SESSION_SEED.as_bytes(), player.key().as_ref()],
        bump
    )]
    pub session: Account<'info, WagerSession>,

    #[account(
        init,
        payer = player,
        space = 8 + RandomnessRequest::INIT_SPACE,
        seeds = [REQUEST_SEED.as_bytes(), config.request_nonce.to_le_bytes().as_ref()],
        bump
    )]
    pub request: Account<'info, RandomnessRequest>,

    /// Required for native wagers only
    #[account(
        seeds = [PRICE_FEED_SEED.as_bytes()],
        bump = price_feed.bump,
    )]
    pub price_feed: Option<Account<'info, PriceFeed>>,

    /// Token accounts, required for SPL wagers only
    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED.as_bytes(), asset.as_ref()],
        bump,
    )]
    pub vault_token: Option<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub player_token: Option<Account<'info, TokenAccount>>,
    pub token_program: Option<Program<'info, Token>>,

    pub system_program: Program<'info, System>,
}
