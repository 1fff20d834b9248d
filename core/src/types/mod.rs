//! Delivery job model and its wire (JSON) shape.
//!
//! # Design
//! Records are plain structs. Fields with no behaviour are public; the few
//! that normalize or validate on write (`Address::state`,
//! `Address::zip_code`, `Job::job_items`) sit behind setters.
//!
//! Required-for-submission rules are not checked while a record is being
//! filled in. `to_wire` is the single gate: it either returns a borrowing
//! `Wire*` view ready for `serde_json`, or a `ValidationError` naming every
//! missing field. It never mutates the record, so repeated calls produce
//! identical output.

mod address;
mod job;
mod job_item;
mod payment_method;

pub use address::{Address, WireAddress, MAX_STATE_LEN, MAX_ZIP_CODE_LEN};
pub use job::{Job, WireJob, WIRE_TIME_FORMAT};
pub use job_item::{JobItem, WireJobItem};
pub use payment_method::PaymentMethod;

use crate::error::ValidationError;

/// Error listing every field in `fields` flagged as absent.
pub(crate) fn missing_fields(record: &'static str, fields: &[(&'static str, bool)]) -> ValidationError {
    ValidationError::MissingFields {
        record,
        fields: fields
            .iter()
            .filter(|(_, absent)| *absent)
            .map(|(name, _)| *name)
            .collect(),
    }
}
