use crate::adapters::http::HttpTransport;
use crate::app::resources::{Callbacks, Customers, PaymentLinks, Payouts, Transactions, Wallets};
use crate::config::{ClientOptions, ZuriPayConfig};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Entry point to the ZuriPay API.
///
/// Every resource module shares one transport, so the API key, base URL and
/// custom headers given at construction apply to all requests.
///
/// ```no_run
/// # async fn run() -> zuripay::Result<()> {
/// use zuripay::{InitiatePaymentOptions, ZuriPay};
///
/// let zuripay = ZuriPay::new("sk_live_...")?;
/// let options = InitiatePaymentOptions::new(100.0, "customer@example.com", "KES");
/// let response = zuripay.transactions().initiate_payment(&options).await?;
/// println!("{:?}", response.get("checkout_url"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ZuriPay {
    transactions: Transactions,
    customers: Customers,
    payouts: Payouts,
    callbacks: Callbacks,
    payment_links: PaymentLinks,
    wallets: Wallets,
}

impl ZuriPay {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_options(api_key, ClientOptions::default())
    }

    pub fn with_options(api_key: &str, options: ClientOptions) -> Result<Self> {
        let transport = HttpTransport::new(api_key, &options)?;
        tracing::debug!("ZuriPay client configured for {}", transport.base_url());
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn from_config(config: &ZuriPayConfig) -> Result<Self> {
        config.validate()?;
        Self::with_options(&config.api_key, config.client.clone())
    }

    /// Binds every resource module to `transport`.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transactions: Transactions::new(Arc::clone(&transport)),
            customers: Customers::new(Arc::clone(&transport)),
            payouts: Payouts::new(Arc::clone(&transport)),
            callbacks: Callbacks::new(Arc::clone(&transport)),
            payment_links: PaymentLinks::new(Arc::clone(&transport)),
            wallets: Wallets::new(transport),
        }
    }

    pub fn transactions(&self) -> &Transactions {
        &self.transactions
    }

    pub fn customers(&self) -> &Customers {
        &self.customers
    }

    pub fn payouts(&self) -> &Payouts {
        &self.payouts
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    pub fn payment_links(&self) -> &PaymentLinks {
        &self.payment_links
    }

    pub fn wallets(&self) -> &Wallets {
        &self.wallets
    }
}
