use crate::errors::GameError;
use crate::states::*;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

/// Creates the house vault's token account for an SPL asset.
pub fn init_token_vault(ctx: Context<InitializeTokenVault>) -> Result<()> {
    msg!(
        "Token vault {} created for mint {}",
        ctx.accounts.vault_token.key(),
        ctx.accounts.mint.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeTokenVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        has_one = owner @ GameError::UnauthorizedCaller,
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        seeds = [HOUSE_VAULT_SEED.as_bytes()],
        bump = house_vault.bump,
    )]
    pub house_vault: Account<'info, HouseVault>,

    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = owner,
        seeds = [VAULT_TOKEN_SEED.as_bytes(), mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = house_vault,
    )]
    pub vault_token: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
