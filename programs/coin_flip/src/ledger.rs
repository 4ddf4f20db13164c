use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, spl_token, SyncNative, Token, TokenAccount, Transfer};

use crate::errors::GameError;
use crate::states::{HOUSE_VAULT_SEED, VAULT_TOKEN_SEED};

/// How a native payout reached the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayoutRoute {
    Direct,
    Wrapped,
}

/// Token accounts that must accompany a wager in an SPL asset.
pub struct TokenAccounts<'a, 'info> {
    pub vault_token: &'a Account<'info, TokenAccount>,
    pub player_token: &'a Account<'info, TokenAccount>,
    pub token_program: &'a Program<'info, Token>,
}

/// Checks that the optional token accounts are present and belong to the
/// asset, the house vault and the player respectively.
pub fn token_accounts<'a, 'info>(
    asset: &Pubkey,
    player: &Pubkey,
    house_vault: &Pubkey,
    vault_token: &'a Option<Account<'info, TokenAccount>>,
    player_token: &'a Option<Account<'info, TokenAccount>>,
    token_program: &'a Option<Program<'info, Token>>,
) -> Result<TokenAccounts<'a, 'info>> {
    let (Some(vault_token), Some(player_token), Some(token_program)) =
        (vault_token, player_token, token_program)
    else {
        return err!(GameError::InvalidTokenAccounts);
    };
    require_keys_eq!(
        vault_token.key(),
        vault_token_address(asset),
        GameError::InvalidTokenAccounts
    );
    require_keys_eq!(vault_token.mint, *asset, GameError::InvalidTokenAccounts);
    require_keys_eq!(vault_token.owner, *house_vault, GameError::InvalidTokenAccounts);
    require_keys_eq!(player_token.mint, *asset, GameError::InvalidTokenAccounts);
    require_keys_eq!(player_token.owner, *player, GameError::InvalidTokenAccounts);
    Ok(TokenAccounts {
        vault_token,
        player_token,
        token_program,
    })
}

/// A direct lamport credit fails for executable accounts and for accounts
/// that would still sit below their rent-exempt minimum afterwards.
pub fn accepts_direct_credit(
    executable: bool,
    lamports: u64,
    amount: u64,
    rent_exempt_minimum: u64,
) -> bool {
    !executable && lamports.saturating_add(amount) >= rent_exempt_minimum
}

/// Picks the route for a native payout. Wrapped SOL is used only when the
/// recipient rejects a direct credit and a wrapped account was supplied;
/// otherwise the lamports are credited directly so settlement never stalls
/// on a missing account.
pub fn payout_route(
    executable: bool,
    lamports: u64,
    amount: u64,
    rent_exempt_minimum: u64,
    has_wrapped: bool,
) -> PayoutRoute {
    if has_wrapped && !accepts_direct_credit(executable, lamports, amount, rent_exempt_minimum) {
        PayoutRoute::Wrapped
    } else {
        PayoutRoute::Direct
    }
}

/// The house vault token account for `mint`.
pub fn vault_token_address(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VAULT_TOKEN_SEED.as_bytes(), mint.as_ref()], &crate::ID).0
}

/// Native bankroll not tied up by rent, oracle fees or pending sessions.
pub fn available_native(
    vault_lamports: u64,
    rent_exempt_minimum: u64,
    fees_reserved: u64,
    total_reserved: u64,
) -> u64 {
    vault_lamports
        .saturating_sub(rent_exempt_minimum)
        .saturating_sub(fees_reserved)
        .saturating_sub(total_reserved)
}

pub fn available_token(vault_amount: u64, total_reserved: u64) -> u64 {
    vault_amount.saturating_sub(total_reserved)
}

pub fn collect_native<'info>(
    player: &Signer<'info>,
    house_vault: AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    require!(player.lamports() >= amount, GameError::InsufficientPayment);
    let cpi_ctx = CpiContext::new(
        system_program.to_account_info(),
        system_program::Transfer {
            from: player.to_account_info(),
            to: house_vault,
        },
    );
    system_program::transfer(cpi_ctx, amount)
}

pub fn collect_token<'info>(
    player: &Signer<'info>,
    accounts: &TokenAccounts<'_, 'info>,
    amount: u64,
) -> Result<()> {
    require!(
        accounts.player_token.amount >= amount,
        GameError::InsufficientPayment
    );
    let cpi_ctx = CpiContext::new(
        accounts.token_program.to_account_info(),
        Transfer {
            from: accounts.player_token.to_account_info(),
            to: accounts.vault_token.to_account_info(),
            authority: player.to_account_info(),
        },
    );
    token::transfer(cpi_ctx, amount)
}

/// Pays lamports out of the house vault. If the recipient cannot take a
/// direct credit and a wrapped SOL account came along, the lamports go there.
/// Callers close the request record into the recipient first so its rent
/// already backs the credit.
pub fn pay_native<'info>(
    house_vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    wrapped: Option<&Account<'info, TokenAccount>>,
    token_program: Option<&Program<'info, Token>>,
    amount: u64,
) -> Result<PayoutRoute> {
    if amount == 0 {
        return Ok(PayoutRoute::Direct);
    }

    let rent = Rent::get()?;
    let vault_floor = rent.minimum_balance(house_vault.data_len());
    require!(
        house_vault.lamports().saturating_sub(vault_floor) >= amount,
        GameError::InsufficientVaultBalance
    );

    let route = payout_route(
        recipient.executable,
        recipient.lamports(),
        amount,
        rent.minimum_balance(recipient.data_len()),
        wrapped.is_some(),
    );
    let (PayoutRoute::Wrapped, Some(wrapped)) = (route, wrapped) else {
        **house_vault.try_borrow_mut_lamports()? -= amount;
        **recipient.try_borrow_mut_lamports()? += amount;
        return Ok(PayoutRoute::Direct);
    };

    let Some(token_program) = token_program else {
        return err!(GameError::WrappedAccountRequired);
    };
    require_keys_eq!(
        wrapped.mint,
        spl_token::native_mint::ID,
        GameError::WrappedAccountRequired
    );
    require_keys_eq!(wrapped.owner, recipient.key(), GameError::WrappedAccountRequired);

    let wrapped_info = wrapped.to_account_info();
    **house_vault.try_borrow_mut_lamports()? -= amount;
    **wrapped_info.try_borrow_mut_lamports()? += amount;
    token::sync_native(CpiContext::new(
        token_program.to_account_info(),
        SyncNative {
            account: wrapped_info,
        },
    ))?;
    msg!("Direct credit rejected, paid {} lamports as wrapped SOL", amount);
    Ok(PayoutRoute::Wrapped)
}

/// Pays tokens out of the vault token account, signed by the house vault PDA.
pub fn pay_token<'info>(
    house_vault: &AccountInfo<'info>,
    house_vault_bump: u8,
    accounts: &TokenAccounts<'_, 'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    require!(
        accounts.vault_token.amount >= amount,
        GameError::InsufficientVaultBalance
    );
    let seeds = &[HOUSE_VAULT_SEED.as_bytes(), &[house_vault_bump]];
    let signer_seeds = &[&seeds[..]];
    token::transfer(
        CpiContext::new_with_signer(
            accounts.token_program.to_account_info(),
            Transfer {
                from: accounts.vault_token.to_account_info(),
                to: accounts.player_token.to_account_info(),
                authority: house_vault.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
