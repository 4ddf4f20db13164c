use crate::errors::GameError;
use crate::states::*;
use anchor_lang::prelude::*;

/// Evicts an idle session and returns its rent to the player.
pub fn close_session(ctx: Context<CloseSession>) -> Result<()> {
    msg!("Session closed for {}", ctx.accounts.player.key());
    Ok(())
}

#[derive(Accounts)]
pub struct CloseSession<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        close = player,
        seeds = [SESSION_SEED.as_bytes(), player.key().as_ref()],
        bump = session.bump,
        constraint = session.status == SessionStatus::Idle @ GameError::SessionBusy,
    )]
    pub session: Account<'info, WagerSession>,
}
