use anchor_lang::prelude::*;
use crate::errors::GameError;
use crate::events::ToggleHouseLockEvent;
use crate::states::*;
/// Locked vaults refuse new plays; pending sessions still settle or refund.
pub fn toggle_house_lock(ctx: Context<ToggleHouseLock>) -> Result<()> {
    let house_vault = &mut ctx.accounts.house_vault;
    let clock = Clock::get()?;
    house_vault.locked = !house_vault.locked;
    emit!(ToggleHouseLockEvent {
        house_vault: house_vault.key(),
        owner: ctx.accounts.owner.key(),
        locked: house_vault.locked,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}
#[derive(Accounts)]
pub struct ToggleHouseLock<'info> {
    pub owner: Signer<'info>,
    #[account(
        has_one = owner @ GameError::UnauthorizedCaller,
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
}
