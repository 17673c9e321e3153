pub mod affiliate;
pub mod dashboard;
pub mod order;
pub mod referral;
pub mod settings;
#[cfg(test)]
pub mod test_utils;
pub mod withdrawal;

pub use affiliate::Affiliate;
pub use dashboard::Dashboard;
pub use order::Order;
pub use referral::Referral;
pub use settings::Settings;
pub use withdrawal::Withdrawal;
