//! Request payloads and query parameters, one type per operation.
//!
//! Each type declares its field contract through [`RequestOptions::FIELDS`]; cross-field
//! rules live in [`RequestOptions::check_invariants`].

use crate::domain::model::{Email, Identification, Phone};
use crate::utils::error::{Result, ZuriPayError};
use crate::utils::validation::{FieldRule, RequestOptions, ValueKind};
use serde::{Deserialize, Serialize};

const EMAIL_FIELDS: &[FieldRule] = &[
    FieldRule::required("email_address", ValueKind::String),
    FieldRule::optional("is_primary", ValueKind::Boolean),
    FieldRule::optional("is_verified", ValueKind::Boolean),
];

const PHONE_FIELDS: &[FieldRule] = &[
    FieldRule::required("phone_number", ValueKind::String),
    FieldRule::optional("is_primary", ValueKind::Boolean),
    FieldRule::optional("is_verified", ValueKind::Boolean),
];

const IDENTIFICATION_FIELDS: &[FieldRule] = &[
    FieldRule::required("id_type", ValueKind::String),
    FieldRule::required("id_number", ValueKind::String),
    FieldRule::optional("issuing_country", ValueKind::String),
    FieldRule::optional("expiry_date", ValueKind::String),
    FieldRule::optional("document_link", ValueKind::String),
];

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

// ---- transactions ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiatePaymentOptions {
    pub amount: f64,
    pub email: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_money_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_response: Option<String>,
}

impl InitiatePaymentOptions {
    pub fn new(amount: f64, email: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount,
            email: email.into(),
            currency: currency.into(),
            ..Default::default()
        }
    }
}

impl RequestOptions for InitiatePaymentOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("amount", ValueKind::Number),
        FieldRule::required("email", ValueKind::String),
        FieldRule::required("currency", ValueKind::String),
        FieldRule::optional("mobile_money_number", ValueKind::String),
        FieldRule::optional("transaction_reference", ValueKind::String),
        FieldRule::optional("success_url", ValueKind::String),
        FieldRule::optional("failure_url", ValueKind::String),
        FieldRule::optional("payment_method_type", ValueKind::String),
        FieldRule::optional("payment_method_code", ValueKind::String),
        FieldRule::optional("requested_response", ValueKind::String),
    ];
}

/// Lookup keys for `GET /transactions/verify`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyPaymentParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_response: Option<String>,
}

impl VerifyPaymentParams {
    pub fn by_transaction_id(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: Some(transaction_id.into()),
            ..Default::default()
        }
    }

    pub fn by_reference(transaction_reference: impl Into<String>) -> Self {
        Self {
            transaction_reference: Some(transaction_reference.into()),
            ..Default::default()
        }
    }

    pub fn by_checkout_id(checkout_id: impl Into<String>) -> Self {
        Self {
            checkout_id: Some(checkout_id.into()),
            ..Default::default()
        }
    }
}

impl RequestOptions for VerifyPaymentParams {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("transaction_reference", ValueKind::String),
        FieldRule::optional("transaction_id", ValueKind::String),
        FieldRule::optional("checkout_id", ValueKind::String),
        FieldRule::optional("code", ValueKind::String),
        FieldRule::optional("requested_response", ValueKind::String),
    ];

    fn check_invariants(&self) -> Result<()> {
        if !is_set(&self.transaction_reference) && !is_set(&self.transaction_id) && !is_set(&self.checkout_id) {
            return Err(ZuriPayError::validation(
                "One of transaction_reference, transaction_id, or checkout_id is required.",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl RequestOptions for GetTransactionParams {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("transaction_reference", ValueKind::String),
        FieldRule::optional("transaction_id", ValueKind::String),
    ];

    fn check_invariants(&self) -> Result<()> {
        if !is_set(&self.transaction_reference) && !is_set(&self.transaction_id) {
            return Err(ZuriPayError::validation(
                "One of transaction_reference or transaction_id is required.",
            ));
        }
        Ok(())
    }
}

/// `start_date` / `end_date` / `limit` filters, used by the transaction,
/// payment link and wallet listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRangeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RequestOptions for DateRangeParams {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("start_date", ValueKind::String),
        FieldRule::optional("end_date", ValueKind::String),
        FieldRule::optional("limit", ValueKind::Count),
    ];
}

/// `limit` / `skip` paging, used by the customer and callback listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl RequestOptions for PageParams {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("limit", ValueKind::Count),
        FieldRule::optional("skip", ValueKind::Count),
    ];
}

// ---- customers ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerOptions {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<Email>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identification: Vec<Identification>,
}

impl RequestOptions for CreateCustomerOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("first_name", ValueKind::String),
        FieldRule::required("last_name", ValueKind::String),
        FieldRule::required("street", ValueKind::String),
        FieldRule::required("city", ValueKind::String),
        FieldRule::required("state", ValueKind::String),
        FieldRule::required("country", ValueKind::String),
        FieldRule::required("postal_code", ValueKind::String),
        FieldRule::list("emails", EMAIL_FIELDS),
        FieldRule::list("phones", PHONE_FIELDS),
        FieldRule::optional("customer_reference", ValueKind::String),
        FieldRule::list("identification", IDENTIFICATION_FIELDS),
    ];

    fn check_invariants(&self) -> Result<()> {
        if self.emails.is_empty() && self.phones.is_empty() {
            return Err(ZuriPayError::validation(
                "At least one contact method (email or phone) is required.",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<Email>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identification: Vec<Identification>,
}

impl RequestOptions for UpdateCustomerOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("first_name", ValueKind::String),
        FieldRule::optional("last_name", ValueKind::String),
        FieldRule::optional("street", ValueKind::String),
        FieldRule::optional("city", ValueKind::String),
        FieldRule::optional("state", ValueKind::String),
        FieldRule::optional("country", ValueKind::String),
        FieldRule::optional("postal_code", ValueKind::String),
        FieldRule::list("emails", EMAIL_FIELDS),
        FieldRule::list("phones", PHONE_FIELDS),
        FieldRule::optional("customer_reference", ValueKind::String),
        FieldRule::list("identification", IDENTIFICATION_FIELDS),
    ];
}

// ---- payouts ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiatePayoutOptions {
    pub customer_id: String,
    pub withdrawal_method_code: String,
    pub amount: f64,
    pub currency: String,
}

impl InitiatePayoutOptions {
    pub fn new(
        customer_id: impl Into<String>,
        withdrawal_method_code: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            withdrawal_method_code: withdrawal_method_code.into(),
            amount,
            currency: currency.into(),
        }
    }
}

impl RequestOptions for InitiatePayoutOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("customer_id", ValueKind::String),
        FieldRule::required("withdrawal_method_code", ValueKind::String),
        FieldRule::required("amount", ValueKind::Number),
        FieldRule::required("currency", ValueKind::String),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPayoutsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl RequestOptions for ListPayoutsParams {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("start_date", ValueKind::String),
        FieldRule::optional("end_date", ValueKind::String),
        FieldRule::optional("limit", ValueKind::Count),
        FieldRule::optional("skip", ValueKind::Count),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePayoutOptions {
    pub status: String,
}

impl RequestOptions for UpdatePayoutOptions {
    const FIELDS: &'static [FieldRule] = &[FieldRule::required("status", ValueKind::String)];
}

// ---- callbacks ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCallbackOptions {
    pub url: String,
    /// Comma separated event names.
    pub events: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RequestOptions for CreateCallbackOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("url", ValueKind::String),
        FieldRule::required("events", ValueKind::String),
        FieldRule::optional("description", ValueKind::String),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCallbackOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl RequestOptions for UpdateCallbackOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("url", ValueKind::String),
        FieldRule::optional("description", ValueKind::String),
        FieldRule::optional("events", ValueKind::String),
        FieldRule::optional("is_active", ValueKind::Boolean),
    ];
}

// ---- payment links ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentLinkOptions {
    pub amount: f64,
    pub currency: String,
}

impl RequestOptions for CreatePaymentLinkOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("amount", ValueKind::Number),
        FieldRule::required("currency", ValueKind::String),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePaymentLinkOptions {
    pub payment_link_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RequestOptions for UpdatePaymentLinkOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("payment_link_id", ValueKind::String),
        FieldRule::optional("amount", ValueKind::Number),
        FieldRule::optional("currency", ValueKind::String),
        FieldRule::optional("status", ValueKind::String),
    ];
}

// ---- wallets ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateWalletOptions {
    pub currency: String,
    pub country: String,
}

impl RequestOptions for CreateWalletOptions {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("currency", ValueKind::String),
        FieldRule::required("country", ValueKind::String),
    ];
}
