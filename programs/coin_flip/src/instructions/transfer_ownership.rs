use crate::errors::GameError;
use crate::events::OwnershipTransferredEvent;
use crate::states::*;
use anchor_lang::prelude::*;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_neq!(new_owner, Pubkey::default(), GameError::InvalidConfig);

    let previous_owner = config.owner;
    config.owner = new_owner;

    msg!("Ownership transferred: {} -> {}", previous_owner, new_owner);
    emit!(OwnershipTransferredEvent {
        previous_owner,
        new_owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ GameError::UnauthorizedCaller,
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,
}
