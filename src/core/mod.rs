pub mod client;

pub use client::ZuriPay;
