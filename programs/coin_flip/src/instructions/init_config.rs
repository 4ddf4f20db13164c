use anchor_lang::prelude::*;

use crate::states::*;

/// Configuration parameters for program initialization
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct InitConfigParams {
    pub oracle_coordinator: Pubkey,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub request_confirmations: Option<u16>,
    pub callback_compute_units: Option<u32>,
    pub oracle_base_fee: Option<u64>,
    pub oracle_fee_per_word: Option<u64>,
    pub max_wager_ppm: Option<u32>,
    pub max_wager_usd_cents: Option<u64>,
    pub refund_delay_slots: Option<u64>,
}

impl InitConfigParams {
    /// Fills unset fields with their defaults.
    pub fn into_config(self, owner: Pubkey, bump: u8) -> GameConfig {
        GameConfig {
            owner,
            oracle_coordinator: self.oracle_coordinator,
            subscription_id: self.subscription_id,
            key_hash: self.key_hash,
            request_confirmations: self
                .request_confirmations
                .unwrap_or(DEFAULT_REQUEST_CONFIRMATIONS),
            callback_compute_units: self
                .callback_compute_units
                .unwrap_or(DEFAULT_CALLBACK_COMPUTE_UNITS),
            oracle_base_fee: self.oracle_base_fee.unwrap_or(DEFAULT_ORACLE_BASE_FEE),
            oracle_fee_per_word: self
                .oracle_fee_per_word
                .unwrap_or(DEFAULT_ORACLE_FEE_PER_WORD),
            max_wager_ppm: self.max_wager_ppm.unwrap_or(DEFAULT_MAX_WAGER_PPM),
            max_wager_usd_cents: self
                .max_wager_usd_cents
                .unwrap_or(DEFAULT_MAX_WAGER_USD_CENTS),
            refund_delay_slots: self
                .refund_delay_slots
                .unwrap_or(DEFAULT_REFUND_DELAY_SLOTS),
            // request ids start at 1 so a zeroed session never matches one
            request_nonce: 1,
            bump,
        }
    }
}

/// Initialize the game configuration with default or custom parameters
///
/// The signer becomes the owner of the program's administrative surface.
pub fn init_config(ctx: Context<InitializeConfig>, params: InitConfigParams) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.set_inner(params.into_config(ctx.accounts.owner.key(), ctx.bumps.config));

    config.validate()?;

    msg!("Game config initialized:");
    msg!("  Oracle coordinator: {}", config.oracle_coordinator);
    msg!("  Subscription: {}", config.subscription_id);
    msg!(
        "  Max wager: {}ppm of bankroll, {} USD cents",
        config.max_wager_ppm,
        config.max_wager_usd_cents
    );
    msg!(
        "  Oracle fee: {} + {}/word lamports",
        config.oracle_base_fee,
        config.oracle_fee_per_word
    );
    msg!("  Refund delay: {} slots", config.refund_delay_slots);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + GameConfig::INIT_SPACE,
        seeds = [GAME_CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, GameConfig>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(params: &InitConfigParams) -> GameConfig {
        params.clone().into_config(Pubkey::new_unique(), 254)
    }

    fn default_params() -> InitConfigParams {
        InitConfigParams {
            oracle_coordinator: Pubkey::new_unique(),
            subscription_id: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_unset_fields_take_defaults() {
        let owner = Pubkey::new_unique();
        let params = default_params();
        let config = params.clone().into_config(owner, 254);
        assert_eq!(config.owner, owner);
        assert_eq!(config.oracle_coordinator, params.oracle_coordinator);
        assert_eq!(config.request_confirmations, DEFAULT_REQUEST_CONFIRMATIONS);
        assert_eq!(config.callback_compute_units, DEFAULT_CALLBACK_COMPUTE_UNITS);
        assert_eq!(config.oracle_base_fee, DEFAULT_ORACLE_BASE_FEE);
        assert_eq!(config.oracle_fee_per_word, DEFAULT_ORACLE_FEE_PER_WORD);
        assert_eq!(config.max_wager_ppm, DEFAULT_MAX_WAGER_PPM);
        assert_eq!(config.max_wager_usd_cents, DEFAULT_MAX_WAGER_USD_CENTS);
        assert_eq!(config.refund_delay_slots, DEFAULT_REFUND_DELAY_SLOTS);
        assert_eq!(config.request_nonce, 1);
        assert_eq!(config.bump, 254);
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let mut params = default_params();
        params.max_wager_ppm = Some(20_000);
        params.refund_delay_slots = Some(300);
        let config = config_from(&params);
        assert_eq!(config.max_wager_ppm, 20_000);
        assert_eq!(config.refund_delay_slots, 300);
        assert_eq!(config.oracle_base_fee, DEFAULT_ORACLE_BASE_FEE);
    }

    #[test]
    fn test_defaults_pass_validation() {
        assert!(config_from(&default_params()).validate().is_ok());
    }

    #[test]
    fn test_missing_coordinator_fails_validation() {
        let params = InitConfigParams {
            subscription_id: 1,
            ..Default::default()
        };
        assert!(config_from(&params).validate().is_err());
    }

    #[test]
    fn test_refund_delay_within_confirmations_fails_validation() {
        let mut params = default_params();
        params.request_confirmations = Some(32);
        params.refund_delay_slots = Some(32);
        assert!(config_from(&params).validate().is_err());
    }

    #[test]
    fn test_zero_compute_budget_fails_validation() {
        let mut params = default_params();
        params.callback_compute_units = Some(0);
        assert!(config_from(&params).validate().is_err());
    }
}
