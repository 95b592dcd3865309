use crate::config::ZuriPayConfig;
use crate::core::ZuriPay;
use crate::domain::model::ApiResponse;
use crate::domain::options::{
    CreateCallbackOptions, CreateCustomerOptions, CreatePaymentLinkOptions, CreateWalletOptions,
    DateRangeParams, GetTransactionParams, InitiatePaymentOptions, InitiatePayoutOptions,
    ListPayoutsParams, PageParams, UpdateCallbackOptions, UpdateCustomerOptions,
    UpdatePaymentLinkOptions, VerifyPaymentParams,
};
use crate::utils::error::{Result, ZuriPayError};
use crate::utils::validation::RequestOptions;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

/// Configuration comes from `--config`, then the environment, then the flags below,
/// with flags winning.
#[derive(Debug, Clone, Parser)]
#[command(name = "zuripay")]
#[command(about = "Command-line client for the ZuriPay payments API")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides ZURIPAY_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Overrides ZURIPAY_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Extra header sent with every request, as KEY=VALUE. Repeatable.
    #[arg(long = "header", global = true, value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    /// One JSON object per line, for log collectors
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Transactions(TransactionCommand),
    #[command(subcommand)]
    Customers(CustomerCommand),
    #[command(subcommand)]
    Payouts(PayoutCommand),
    #[command(subcommand)]
    Callbacks(CallbackCommand),
    #[command(subcommand, name = "links", alias = "payment-links")]
    PaymentLinks(PaymentLinkCommand),
    #[command(subcommand)]
    Wallets(WalletCommand),
}

/// Request fields as a JSON object.
#[derive(Debug, Clone, Default, Args)]
pub struct DataArg {
    #[arg(long)]
    pub data: Option<String>,
}

impl DataArg {
    /// Missing `--data` is an empty object, so required fields are reported by name.
    pub fn parse<T: RequestOptions>(&self) -> Result<T> {
        let value = match self.data.as_deref() {
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| ZuriPayError::validation(format!("--data is not valid JSON: {}", e)))?,
            None => Value::Object(Default::default()),
        };
        T::from_value(value)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum TransactionCommand {
    Initiate(DataArg),
    Verify(DataArg),
    List(DataArg),
    Get(DataArg),
}

#[derive(Debug, Clone, Subcommand)]
pub enum CustomerCommand {
    Create(DataArg),
    List(DataArg),
    Get {
        customer_id_or_reference: String,
    },
    Update {
        customer_id_or_reference: String,
        #[command(flatten)]
        data: DataArg,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PayoutCommand {
    Initiate(DataArg),
    List(DataArg),
    Get {
        payout_request_id: String,
    },
    Update {
        payout_request_id: String,
        #[arg(long)]
        status: String,
    },
    Delete {
        payout_request_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CallbackCommand {
    Create(DataArg),
    List(DataArg),
    Get {
        callback_id: String,
    },
    Update {
        callback_id: String,
        #[command(flatten)]
        data: DataArg,
    },
    Delete {
        callback_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PaymentLinkCommand {
    Create(DataArg),
    List(DataArg),
    Get { payment_link_id: String },
    Update(DataArg),
    Delete { payment_link_id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum WalletCommand {
    Create(DataArg),
    List(DataArg),
    Get {
        wallet_id: String,
    },
    Balance {
        #[arg(long)]
        currency: Option<String>,
    },
    Delete {
        wallet_id: String,
    },
}

fn parse_header(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<ZuriPayConfig> {
        self.load_config_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Cli::load_config`] with an injectable environment.
    pub fn load_config_with<F>(&self, lookup: F) -> Result<ZuriPayConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match (&self.config, &self.api_key) {
            (Some(path), _) => ZuriPayConfig::from_file(path)?,
            (None, Some(api_key)) => ZuriPayConfig::from_lookup(|name| match name {
                "ZURIPAY_API_KEY" => Some(api_key.clone()),
                _ => lookup(name),
            })?,
            (None, None) => ZuriPayConfig::from_lookup(&lookup)?,
        };

        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.client.base_url = Some(base_url.clone());
        }
        for (name, value) in &self.headers {
            config.client.headers.insert(name.clone(), value.clone());
        }

        Ok(config)
    }
}

impl Command {
    pub async fn dispatch(&self, zuripay: &ZuriPay) -> Result<ApiResponse> {
        match self {
            Command::Transactions(command) => {
                let transactions = zuripay.transactions();
                match command {
                    TransactionCommand::Initiate(data) => {
                        transactions.initiate_payment(&data.parse::<InitiatePaymentOptions>()?).await
                    }
                    TransactionCommand::Verify(data) => {
                        transactions.verify_payment(&data.parse::<VerifyPaymentParams>()?).await
                    }
                    TransactionCommand::List(data) => {
                        transactions.list_transactions(&data.parse::<DateRangeParams>()?).await
                    }
                    TransactionCommand::Get(data) => {
                        transactions.get_transaction(&data.parse::<GetTransactionParams>()?).await
                    }
                }
            }
            Command::Customers(command) => {
                let customers = zuripay.customers();
                match command {
                    CustomerCommand::Create(data) => {
                        customers.create_customer(&data.parse::<CreateCustomerOptions>()?).await
                    }
                    CustomerCommand::List(data) => customers.list_customers(&data.parse::<PageParams>()?).await,
                    CustomerCommand::Get {
                        customer_id_or_reference,
                    } => customers.get_customer(customer_id_or_reference).await,
                    CustomerCommand::Update {
                        customer_id_or_reference,
                        data,
                    } => {
                        customers
                            .update_customer(customer_id_or_reference, &data.parse::<UpdateCustomerOptions>()?)
                            .await
                    }
                }
            }
            Command::Payouts(command) => {
                let payouts = zuripay.payouts();
                match command {
                    PayoutCommand::Initiate(data) => {
                        payouts.initiate_payout(&data.parse::<InitiatePayoutOptions>()?).await
                    }
                    PayoutCommand::List(data) => payouts.list_payouts(&data.parse::<ListPayoutsParams>()?).await,
                    PayoutCommand::Get { payout_request_id } => payouts.get_payout(payout_request_id).await,
                    PayoutCommand::Update {
                        payout_request_id,
                        status,
                    } => payouts.update_payout(payout_request_id, status).await,
                    PayoutCommand::Delete { payout_request_id } => payouts.delete_payout(payout_request_id).await,
                }
            }
            Command::Callbacks(command) => {
                let callbacks = zuripay.callbacks();
                match command {
                    CallbackCommand::Create(data) => {
                        callbacks.create_callback(&data.parse::<CreateCallbackOptions>()?).await
                    }
                    CallbackCommand::List(data) => callbacks.list_callbacks(&data.parse::<PageParams>()?).await,
                    CallbackCommand::Get { callback_id } => callbacks.get_callback(callback_id).await,
                    CallbackCommand::Update { callback_id, data } => {
                        callbacks
                            .update_callback(callback_id, &data.parse::<UpdateCallbackOptions>()?)
                            .await
                    }
                    CallbackCommand::Delete { callback_id } => callbacks.delete_callback(callback_id).await,
                }
            }
            Command::PaymentLinks(command) => {
                let links = zuripay.payment_links();
                match command {
                    PaymentLinkCommand::Create(data) => {
                        links.create_payment_link(&data.parse::<CreatePaymentLinkOptions>()?).await
                    }
                    PaymentLinkCommand::List(data) => {
                        links.list_payment_links(&data.parse::<DateRangeParams>()?).await
                    }
                    PaymentLinkCommand::Get { payment_link_id } => links.get_payment_link(payment_link_id).await,
                    PaymentLinkCommand::Update(data) => {
                        links.update_payment_link(&data.parse::<UpdatePaymentLinkOptions>()?).await
                    }
                    PaymentLinkCommand::Delete { payment_link_id } => {
                        links.delete_payment_link(payment_link_id).await
                    }
                }
            }
            Command::Wallets(command) => {
                let wallets = zuripay.wallets();
                match command {
                    WalletCommand::Create(data) => wallets.create_wallet(&data.parse::<CreateWalletOptions>()?).await,
                    WalletCommand::List(data) => wallets.list_wallets(&data.parse::<DateRangeParams>()?).await,
                    WalletCommand::Get { wallet_id } => wallets.get_wallet(wallet_id).await,
                    WalletCommand::Balance { currency } => wallets.get_wallet_balance(currency.as_deref()).await,
                    WalletCommand::Delete { wallet_id } => wallets.delete_wallet(wallet_id).await,
                }
            }
        }
    }
}

/// Process exit code for a failed command.
pub fn exit_code(err: &ZuriPayError) -> i32 {
    match err {
        ZuriPayError::ValidationError { .. } => 2,
        ZuriPayError::ProviderError { .. } => 3,
        ZuriPayError::HttpError(_) => 4,
        _ => 1,
    }
}
