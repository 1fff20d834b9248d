//! The `Job` aggregate and its wire view.
//!
//! # Design
//! `Job` owns its addresses and items outright. Required fields are plain
//! `Option`s so a half-built job is representable; `to_wire` checks them,
//! then the address rule, then every nested record, and only then borrows
//! the record into `WireJob`. Amounts must be finite: JSON has no number for
//! `NaN` or infinity and `serde_json` would emit `null` instead.

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

use super::{missing_fields, Address, JobItem, PaymentMethod, WireAddress, WireJobItem};
use crate::error::{Error, Result, ValidationError};

/// ISO-8601 with a numeric UTC offset, e.g. `2019-02-15T15:16:17-0500`.
pub const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Largest magnitude at which every whole `f64` is exactly an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One delivery request.
///
/// Required for submission: `is_live`, `api_token`, `order_contact_phone`,
/// the three timestamps, `order_total`, and at least one of
/// `pickup_address` / `delivery_address`. When only one address is given the
/// remote service fills the other end with the account's business location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Job {
    /// `false` submits a test job that is never dispatched.
    pub is_live: Option<bool>,
    pub api_token: Option<String>,
    /// Who the courier calls if something goes wrong.
    pub order_contact_name: Option<String>,
    pub order_contact_phone: Option<String>,
    pub pickup_address: Option<Address>,
    pub delivery_address: Option<Address>,
    pub ready_time: Option<DateTime<FixedOffset>>,
    pub deliver_from: Option<DateTime<FixedOffset>>,
    pub deliver_to: Option<DateTime<FixedOffset>>,
    pub webhook_url: Option<String>,
    /// Free-form billing reference.
    pub reference: Option<String>,
    /// Non-default service tier.
    pub service_id: Option<u32>,
    pub payment_method: Option<PaymentMethod>,
    pub order_total: Option<f64>,
    /// Kept on the model only; the job endpoint does not accept it.
    pub delivery_fee: Option<f64>,
    pub tip: f64,
    job_items: Vec<JobItem>,
    pub special_instructions: Option<String>,
    pub require_photo_on_delivery: Option<bool>,
    /// Shown to the courier.
    pub external_id: Option<String>,
}

/// Wire view of a [`Job`]. Field order is the order keys are emitted in.
#[derive(Debug, Serialize)]
pub struct WireJob<'a> {
    pub live: bool,
    pub api_token: &'a str,
    pub order_contact_name: Option<&'a str>,
    pub order_contact_phone: &'a str,
    pub pick_address: Option<WireAddress<'a>>,
    pub deliver_address: Option<WireAddress<'a>>,
    pub payment_method: Option<u8>,
    pub ready_time: String,
    pub deliver_from_time: String,
    pub deliver_to_time: String,
    pub service_id: Option<u32>,
    #[serde(serialize_with = "serialize_amount")]
    pub order_total: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub tip: f64,
    pub webhook_url: Option<&'a str>,
    pub job_items: Vec<WireJobItem<'a>>,
    pub reference: Option<&'a str>,
    pub external_id: Option<&'a str>,
    pub photo: Option<bool>,
    pub special_instructions: Option<&'a str>,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job_items(&self) -> &[JobItem] {
        &self.job_items
    }

    /// Append an item, returning the items in insertion order.
    pub fn add_job_item(&mut self, item: JobItem) -> &[JobItem] {
        self.job_items.push(item);
        &self.job_items
    }

    pub fn set_job_items(&mut self, items: Vec<JobItem>) {
        self.job_items = items;
    }

    /// Set the payment method from its raw integer code.
    pub fn set_payment_method_code(&mut self, code: i64) -> std::result::Result<(), ValidationError> {
        self.payment_method = Some(PaymentMethod::try_from(code)?);
        Ok(())
    }

    pub fn to_wire(&self) -> std::result::Result<WireJob<'_>, ValidationError> {
        let (
            Some(live),
            Some(api_token),
            Some(order_contact_phone),
            Some(ready_time),
            Some(deliver_from),
            Some(deliver_to),
            Some(order_total),
        ) = (
            self.is_live,
            self.api_token.as_deref(),
            self.order_contact_phone.as_deref(),
            self.ready_time.as_ref(),
            self.deliver_from.as_ref(),
            self.deliver_to.as_ref(),
            self.order_total,
        )
        else {
            return Err(missing_fields(
                "job",
                &[
                    ("live", self.is_live.is_none()),
                    ("api_token", self.api_token.is_none()),
                    ("order_contact_phone", self.order_contact_phone.is_none()),
                    ("ready_time", self.ready_time.is_none()),
                    ("deliver_from_time", self.deliver_from.is_none()),
                    ("deliver_to_time", self.deliver_to.is_none()),
                    ("order_total", self.order_total.is_none()),
                ],
            ));
        };

        if self.pickup_address.is_none() && self.delivery_address.is_none() {
            return Err(ValidationError::NoAddress);
        }

        finite("order_total", order_total)?;
        finite("tip", self.tip)?;
        if let Some(fee) = self.delivery_fee {
            finite("delivery_fee", fee)?;
        }

        Ok(WireJob {
            live,
            api_token,
            order_contact_name: self.order_contact_name.as_deref(),
            order_contact_phone,
            pick_address: self.pickup_address.as_ref().map(Address::to_wire).transpose()?,
            deliver_address: self.delivery_address.as_ref().map(Address::to_wire).transpose()?,
            payment_method: self.payment_method.map(PaymentMethod::code),
            ready_time: ready_time.format(WIRE_TIME_FORMAT).to_string(),
            deliver_from_time: deliver_from.format(WIRE_TIME_FORMAT).to_string(),
            deliver_to_time: deliver_to.format(WIRE_TIME_FORMAT).to_string(),
            service_id: self.service_id,
            order_total,
            tip: self.tip,
            webhook_url: self.webhook_url.as_deref(),
            job_items: self
                .job_items
                .iter()
                .map(JobItem::to_wire)
                .collect::<std::result::Result<_, _>>()?,
            reference: self.reference.as_deref(),
            external_id: self.external_id.as_deref(),
            photo: self.require_photo_on_delivery,
            special_instructions: self.special_instructions.as_deref(),
        })
    }

    /// Compact JSON for the wire.
    pub fn to_json(&self) -> Result<String> {
        let wire = self.to_wire()?;
        serde_json::to_string(&wire).map_err(Error::serialization)
    }
}

fn finite(field: &'static str, amount: f64) -> std::result::Result<(), ValidationError> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteAmount { field })
    }
}

/// Whole amounts go out as JSON integers (`100`, not `100.0`).
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && amount.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}
