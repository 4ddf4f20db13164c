use crate::errors::GameError;
use crate::states::*;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct UpdateConfigParams {
    pub oracle_coordinator: Option<Pubkey>,
    pub key_hash: Option<[u8; 32]>,
    pub request_confirmations: Option<u16>,
    pub callback_compute_units: Option<u32>,
    pub oracle_base_fee: Option<u64>,
    pub oracle_fee_per_word: Option<u64>,
    pub max_wager_ppm: Option<u32>,
    pub max_wager_usd_cents: Option<u64>,
    pub refund_delay_slots: Option<u64>,
}

/// Update existing game configuration
/// Only the owner can call this
pub fn update_config(ctx: Context<UpdateConfig>, params: UpdateConfigParams) -> Result<()> {
    let config = &mut ctx.accounts.config;

    // Update only the fields that are provided
    if let Some(val) = params.oracle_coordinator {
        config.oracle_coordinator = val;
    }
    if let Some(val) = params.key_hash {
        config.key_hash = val;
    }
    if let Some(val) = params.request_confirmations {
        config.request_confirmations = val;
    }
    if let Some(val) = params.callback_compute_units {
        config.callback_compute_units = val;
    }
    if let Some(val) = params.oracle_base_fee {
        config.oracle_base_fee = val;
    }
    if let Some(val) = params.oracle_fee_per_word {
        config.oracle_fee_per_word = val;
    }
    if let Some(val) = params.max_wager_ppm {
        config.max_wager_ppm = val;
    }
    if let Some(val) = params.max_wager_usd_cents {
        config.max_wager_usd_cents = val;
    }
    if let Some(val) = params.refund_delay_slots {
        config.refund_delay_slots = val;
    }

    // Validate the updated config
    config.validate()?;

    msg!("Game config updated successfully");
    msg!("  Oracle coordinator: {}", config.oracle_coordinator);
    msg!("  Refund delay: {} slots", config.refund_delay_slots);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ GameError::UnauthorizedCaller,
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,
}
