use crate::errors::GameError;
use crate::events::InitializeHouseVaultEvent;
use crate::states::*;
use anchor_lang::prelude::*;
pub fn init_house_vault(ctx: Context<InitializeHouseVault>, locked: bool) -> Result<()> {
    let house_vault = &mut ctx.accounts.house_vault;
    let native_asset = &mut ctx.accounts.native_asset;
    let clock = Clock::get()?;
    house_vault.locked = locked;
    house_vault.fees_reserved = 0;
    house_vault.bump = ctx.bumps.house_vault;
    // lamport wagers are allow-listed from the start
    native_asset.mint = NATIVE_ASSET;
    native_asset.allowed = true;
    native_asset.total_reserved = 0;
    native_asset.bump = ctx.bumps.native_asset;
    emit!(InitializeHouseVaultEvent {
        house_vault: house_vault.key(),
        owner: ctx.accounts.owner.key(),
        locked: house_vault.locked,
        timestamp: clock.unix_timestamp,
    });
    Ok(())
}
#[derive(Accounts)]
pub struct InitializeHouseVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        has_one = owner @ GameError::UnauthorizedCaller,
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,
    #[account(
        init,
        payer = owner,
        space = 8 + HouseVault::INIT_SPACE,
        seeds = [HOUSE_VAULT_SEED.as_bytes()],
        bump
    )]
    pub house_vault: Account<'info, HouseVault>,
    #[account(
        init,
        payer = owner,
        space = 8 + AssetConfig::INIT_SPACE,
        seeds = [ASSET_SEED.as_bytes(), NATIVE_ASSET.as_ref()],
        bump
    )]
    pub native_asset: Account<'info, AssetConfig>,
    pub system_program: Program<'info, System>,
}
