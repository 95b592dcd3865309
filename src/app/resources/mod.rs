pub mod callbacks;
pub mod customers;
pub mod payment_links;
pub mod payouts;
pub mod transactions;
pub mod wallets;

pub use callbacks::Callbacks;
pub use customers::Customers;
pub use payment_links::PaymentLinks;
pub use payouts::Payouts;
pub use transactions::Transactions;
pub use wallets::Wallets;
