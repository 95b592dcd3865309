//! Client for the ZuriPay payments API.
//!
//! [`ZuriPay`] groups the API by resource: transactions, customers, payouts,
//! callbacks, payment links and wallets. Each call validates its input
//! locally, sends one HTTP request and returns the decoded JSON body.

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpTransport;
pub use app::resources::{Callbacks, Customers, PaymentLinks, Payouts, Transactions, Wallets};
pub use config::{ClientOptions, ZuriPayConfig, DEFAULT_BASE_URL};
pub use crate::core::ZuriPay;
pub use domain::model::{ApiRequest, ApiResponse, Email, HttpMethod, Identification, Phone};
pub use domain::options::{
    CreateCallbackOptions, CreateCustomerOptions, CreatePaymentLinkOptions, CreateWalletOptions,
    DateRangeParams, GetTransactionParams, InitiatePaymentOptions, InitiatePayoutOptions,
    ListPayoutsParams, PageParams, UpdateCallbackOptions, UpdateCustomerOptions,
    UpdatePaymentLinkOptions, UpdatePayoutOptions, VerifyPaymentParams,
};
pub use domain::ports::Transport;
pub use utils::error::{Result, ZuriPayError};
pub use utils::validation::{RequestOptions, Validate};
