use anchor_lang::prelude::*;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod limits;
pub mod oracle;
pub mod payout;
pub mod safety_net;
pub mod states;
use instructions::init_config::InitConfigParams;
use instructions::update_config::UpdateConfigParams;
use instructions::*;
declare_id!("B21aCrJSGzLG1agSXVYDTNXV65pFygGB7Vudj9fGvxpH");
#[program]
pub mod coin_flip {
    use super::*;
    pub fn init_config(ctx: Context<InitializeConfig>, params: InitConfigParams) -> Result<()> {
        instructions::init_config(ctx, params)
    }
    pub fn update_config(ctx: Context<UpdateConfig>, params: UpdateConfigParams) -> Result<()> {
        instructions::update_config(ctx, params)
    }
    pub fn init_house_vault(ctx: Context<InitializeHouseVault>, locked: bool) -> Result<()> {
        instructions::init_house_vault(ctx, locked)
    }
    pub fn toggle_house_lock(ctx: Context<ToggleHouseLock>) -> Result<()> {
        instructions::toggle_house_lock::toggle_house_lock(ctx)
    }
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }
    pub fn change_subscription(ctx: Context<ChangeSubscription>, subscription_id: u64) -> Result<()> {
        instructions::change_subscription(ctx, subscription_id)
    }
    pub fn set_asset(ctx: Context<SetAsset>, asset: Pubkey, allowed: bool) -> Result<()> {
        instructions::set_asset(ctx, asset, allowed)
    }
    pub fn init_token_vault(ctx: Context<InitializeTokenVault>) -> Result<()> {
        instructions::init_token_vault(ctx)
    }
    pub fn init_price_feed(ctx: Context<InitializePriceFeed>, authority: Pubkey) -> Result<()> {
        instructions::init_price_feed(ctx, authority)
    }
    pub fn update_price_feed(ctx: Context<UpdatePriceFeed>, price: i64, decimals: u8) -> Result<()> {
        instructions::update_price_feed(ctx, price, decimals)
    }
    #[allow(clippy::too_many_arguments)]
    pub fn play(
        ctx: Context<Play>,
        wager: u64,
        asset: Pubkey,
        prediction: bool,
        num_games: u16,
        stop_gain: u64,
        stop_loss: u64,
        escrow_amount: u64,
    ) -> Result<()> {
        instructions::play(
            ctx,
            wager,
            asset,
            prediction,
            num_games,
            stop_gain,
            stop_loss,
            escrow_amount,
        )
    }
    pub fn fulfill_randomness(
        ctx: Context<FulfillRandomness>,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<()> {
        instructions::fulfill_randomness(ctx, request_id, random_words)
    }
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund(ctx)
    }
    pub fn close_session(ctx: Context<CloseSession>) -> Result<()> {
        instructions::close_session(ctx)
    }
    pub fn withdraw_house_edge(
        ctx: Context<WithdrawHouseEdge>,
        asset: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::withdraw_house_edge(ctx, asset, amount)
    }
    pub fn withdraw_oracle_fees(ctx: Context<WithdrawOracleFees>, amount: u64) -> Result<()> {
        instructions::withdraw_oracle_fees(ctx, amount)
    }
}
