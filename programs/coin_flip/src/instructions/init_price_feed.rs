use crate::errors::GameError;
use crate::states::*;
use anchor_lang::prelude::*;

/// Creates the native/USD price account and names who may publish to it.
pub fn init_price_feed(ctx: Context<InitializePriceFeed>, authority: Pubkey) -> Result<()> {
    let feed = &mut ctx.accounts.price_feed;
    feed.authority = authority;
    feed.price = 0;
    feed.decimals = 0;
    feed.updated_at = 0;
    feed.bump = ctx.bumps.price_feed;
    msg!("Price feed initialized, authority {}", authority);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializePriceFeed<'info> {
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
        space = 8 + PriceFeed::INIT_SPACE,
        seeds = [PRICE_FEED_SEED.as_bytes()],
        bump
    )]
    pub price_feed: Account<'info, PriceFeed>,

    pub system_program: Program<'info, System>,
}
