use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameError;
use crate::events::RefundIssuedEvent;
use crate::states::*;
use crate::{ledger, oracle, safety_net};

/// Returns the escrowed stake of a batch the oracle never answered.
///
/// Callable by the player once `refund_delay_slots` have passed since the
/// request. The oracle fee stays with the operator.
pub fn refund(ctx: Context<Refund>) -> Result<()> {
    let config = &ctx.accounts.config;
    let asset_config = &mut ctx.accounts.asset_config;
    let clock = Clock::get()?;

    // the session may never have been created or may have been closed
    let session_info = ctx.accounts.session.to_account_info();
    let mut session = {
        let data = session_info.try_borrow_data()?;
        WagerSession::load_pending(session_info.owner, &data)?
    };
    require!(
        safety_net::refund_unlocked(
            session.request_slot,
            clock.slot,
            config.refund_delay_slots
        ),
        GameError::TimeoutNotReached
    );
    require_keys_eq!(asset_config.mint, session.asset, GameError::AssetMismatch);

    let request_info = ctx.accounts.request.to_account_info();
    let request = oracle::load_request(&request_info)?;
    require!(
        request.matches(session.request_id, &session.player),
        GameError::UnknownRequest
    );

    let amount = session.stake()?;
    asset_config.release(session.reserved_payout)?;

    let vault_info = ctx.accounts.house_vault.to_account_info();
    let player_info = ctx.accounts.player.to_account_info();
    oracle::close_request(&request_info, &player_info)?;

    if asset_config.is_native() {
        ledger::pay_native(
            &vault_info,
            &player_info,
            ctx.accounts.player_wrapped.as_ref(),
            ctx.accounts.token_program.as_ref(),
            amount,
        )?;
    } else {
        let tokens = ledger::token_accounts(
            &session.asset,
            &session.player,
            &vault_info.key(),
            &ctx.accounts.vault_token,
            &ctx.accounts.player_token,
            &ctx.accounts.token_program,
        )?;
        ledger::pay_token(&vault_info, ctx.accounts.house_vault.bump, &tokens, amount)?;
    }

    let slots_waited = safety_net::slots_elapsed(session.request_slot, clock.slot);
    session.reset();
    session.store(&session_info)?;

    msg!(
        "Refunded {} to {} after {} slots (request {})",
        amount,
        session.player,
        slots_waited,
        session.request_id
    );
    emit!(RefundIssuedEvent {
        player: session.player,
        amount,
        asset: session.asset,
        slots_waited,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Refund<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    /// CHECK: the player's session PDA, loaded in the handler so a missing
    /// session fails with NoActiveSession
    #[account(
        mut,
        seeds = [SESSION_SEED.as_bytes(), player.key().as_ref()],
        bump,
    )]
    pub session: UncheckedAccount<'info>,

    /// CHECK: request record of the pending batch, matched against the
    /// session in the handler
    #[account(mut)]
    pub request: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [HOUSE_VAULT_SEED.as_bytes()],
        bump = house_vault.bump,
    )]
    pub house_vault: Account<'info, HouseVault>,

    #[account(
        mut,
        seeds = [ASSET_SEED.as_bytes(), asset_config.mint.as_ref()],
        bump = asset_config.bump,
    )]
    pub asset_config: Account<'info, AssetConfig>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED.as_bytes(), asset_config.mint.as_ref()],
        bump,
    )]
    pub vault_token: Option<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub player_token: Option<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub player_wrapped: Option<Account<'info, TokenAccount>>,
    pub token_program: Option<Program<'info, Token>>,
}
