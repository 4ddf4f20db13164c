pub mod change_subscription;
pub mod close_session;
pub mod fulfill_randomness;
pub mod init_config;
pub mod init_house_vault;
pub mod init_price_feed;
pub mod init_token_vault;
pub mod play;
pub mod refund;
pub mod set_asset;
pub mod toggle_house_lock;
pub mod transfer_ownership;
pub mod update_config;
pub mod update_price_feed;
pub mod withdraw_house_edge;
pub mod withdraw_oracle_fees;

pub use change_subscription::*;
pub use close_session::*;
pub use fulfill_randomness::*;
pub use init_config::*;
pub use init_house_vault::*;
pub use init_price_feed::*;
pub use init_token_vault::*;
pub use play::*;
pub use refund::*;
pub use set_asset::*;
pub use toggle_house_lock::*;
pub use transfer_ownership::*;
pub use update_config::*;
pub use update_price_feed::*;
pub use withdraw_house_edge::*;
pub use withdraw_oracle_fees::*;
