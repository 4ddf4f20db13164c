use crate::errors::GameError;
use crate::states::*;
use anchor_lang::prelude::*;

pub fn update_price_feed(ctx: Context<UpdatePriceFeed>, price: i64, decimals: u8) -> Result<()> {
    require!(price > 0, GameError::InvalidPrice);
    let feed = &mut ctx.accounts.price_feed;
    feed.price = price;
    feed.decimals = decimals;
    feed.updated_at = Clock::get()?.unix_timestamp;
    Ok(())
}

#[derive(Accounts)]
pub struct UpdatePriceFeed<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ GameError::UnauthorizedCaller,
        seeds = [PRICE_FEED_SEED.as_bytes()],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,
}
