use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::GameError;
use crate::events::HouseEdgeWithdrawnEvent;
use crate::ledger;
use crate::states::*;

/// Lets the owner take profits out of the bankroll of one asset.
/// Escrow backing pending sessions and collected oracle fees stay untouched.
pub fn withdraw_house_edge(
    ctx: Context<WithdrawHouseEdge>,
    asset: Pubkey,
    amount: u64,
) -> Result<()> {
    let house_vault = &ctx.accounts.house_vault;
    let asset_config = &ctx.accounts.asset_config;
    let owner = &ctx.accounts.owner;
    let vault_info = house_vault.to_account_info();

    if asset_config.is_native() {
        let rent = Rent::get()?;
        let available = ledger::available_native(
            vault_info.lamports(),
            rent.minimum_balance(vault_info.data_len()),
            house_vault.fees_reserved,
            asset_config.total_reserved,
        );
        require!(amount <= available, GameError::InsufficientVaultBalance);
        ledger::pay_native(&vault_info, &owner.to_account_info(), None, None, amount)?;
    } else {
        let tokens = ledger::token_accounts(
            &asset,
            &owner.key(),
            &vault_info.key(),
            &ctx.accounts.vault_token,
            &ctx.accounts.owner_token,
            &ctx.accounts.token_program,
        )?;
        let available =
            ledger::available_token(tokens.vault_token.amount, asset_config.total_reserved);
        require!(amount <= available, GameError::InsufficientVaultBalance);
        ledger::pay_token(&vault_info, house_vault.bump, &tokens, amount)?;
    }

    msg!("House withdrawal: {} of asset {}", amount, asset);
    msg!("Reserved funds: {}", asset_config.total_reserved);
    emit!(HouseEdgeWithdrawnEvent {
        to: owner.key(),
        amount,
        asset,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset: Pubkey)]
pub struct WithdrawHouseEdge<'info> {
    #[account(mut)]
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

    #[account(
        seeds = [ASSET_SEED.as_bytes(), asset.as_ref()],
        bump = asset_config.bump,
    )]
    pub asset_config: Account<'info, AssetConfig>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED.as_bytes(), asset.as_ref()],
        bump,
    )]
    pub vault_token: Option<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub owner_token: Option<Account<'info, TokenAccount>>,
    pub token_program: Option<Program<'info, Token>>,
}
