use crate::errors::GameError;
use crate::events::AssetAllowListedEvent;
use crate::states::*;
use anchor_lang::prelude::*;

/// Adds an asset to the allow-list or toggles an existing entry.
/// Disallowing an asset does not affect sessions already pending in it.
pub fn set_asset(ctx: Context<SetAsset>, asset: Pubkey, allowed: bool) -> Result<()> {
    let asset_config = &mut ctx.accounts.asset_config;

    // reservations of a re-listed asset carry over
    asset_config.mint = asset;
    asset_config.allowed = allowed;
    asset_config.bump = ctx.bumps.asset_config;

    msg!("Asset {} allowed={}", asset, allowed);
    emit!(AssetAllowListedEvent { asset, allowed });

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset: Pubkey)]
pub struct SetAsset<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        has_one = owner @ GameError::UnauthorizedCaller,
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + AssetConfig::INIT_SPACE,
        seeds = [ASSET_SEED.as_bytes(), asset.as_ref()],
        bump
    )]
    pub asset_config: Account<'info, AssetConfig>,

    pub system_program: Program<'info, System>,
}
