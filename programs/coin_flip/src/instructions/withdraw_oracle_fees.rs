use crate::errors::GameError;
use crate::events::OracleFeesWithdrawnEvent;
use crate::ledger;
use crate::states::*;
use anchor_lang::prelude::*;

/// Reimburses the operator for oracle requests paid by players.
pub fn withdraw_oracle_fees(ctx: Context<WithdrawOracleFees>, amount: u64) -> Result<()> {
    let house_vault = &mut ctx.accounts.house_vault;
    house_vault.release_fees(amount)?;

    let vault_info = house_vault.to_account_info();
    ledger::pay_native(
        &vault_info,
        &ctx.accounts.owner.to_account_info(),
        None,
        None,
        amount,
    )?;

    msg!(
        "Oracle fees withdrawn: {} lamports, {} still reserved",
        amount,
        house_vault.fees_reserved
    );
    emit!(OracleFeesWithdrawnEvent {
        to: ctx.accounts.owner.key(),
        amount,
        remaining: house_vault.fees_reserved,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawOracleFees<'info> {
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
}
