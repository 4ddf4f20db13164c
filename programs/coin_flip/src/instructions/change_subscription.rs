use crate::errors::GameError;
use crate::events::SubscriptionChangedEvent;
use crate::states::*;
use anchor_lang::prelude::*;

/// Points future randomness requests at another oracle subscription.
/// Requests already in flight keep their original correlation.
pub fn change_subscription(ctx: Context<ChangeSubscription>, subscription_id: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let old_subscription_id = config.subscription_id;
    config.subscription_id = subscription_id;

    emit!(SubscriptionChangedEvent {
        old_subscription_id,
        new_subscription_id: subscription_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ChangeSubscription<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ GameError::UnauthorizedCaller,
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,
}
