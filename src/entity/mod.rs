pub mod affiliate;
pub mod commission_settings;
pub mod referred_customer;
pub mod withdrawal_request;

pub use affiliate::AffiliatePlan;
pub use referred_customer::OrderType;
pub use withdrawal_request::WithdrawalStatus;
