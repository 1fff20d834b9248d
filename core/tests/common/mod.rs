//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};
use dispatch_core::{Address, Job, JobItem, PaymentMethod};

pub const API_TOKEN: &str = "APITOKEN1234567";

/// 2019-02-15 at the given wall-clock time in Toronto (UTC-05:00 in February).
pub fn toronto(hour: u32, min: u32, sec: u32) -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2019, 2, 15, hour, min, sec)
        .unwrap()
}

pub fn address(
    name: &str,
    street: &str,
    city: &str,
    zip: &str,
    contact: &str,
    phone: &str,
    instructions: &str,
) -> Address {
    let mut address = Address::new();
    address.address_name = Some(name.to_string());
    address.street_address = Some(street.to_string());
    address.floor = Some("1".to_string());
    address.city = Some(city.to_string());
    address.set_state("CA").unwrap();
    address.set_zip_code(zip).unwrap();
    address.contact = Some(contact.to_string());
    address.phone_number = Some(phone.to_string());
    address.special_instructions = Some(instructions.to_string());
    address
}

/// The reference job with every field populated.
pub fn full_job() -> Job {
    let mut job = Job::new();
    job.is_live = Some(true);
    job.api_token = Some(API_TOKEN.to_string());
    job.order_contact_name = Some("Contact name".to_string());
    job.order_contact_phone = Some("5141234567".to_string());
    job.ready_time = Some(toronto(15, 16, 17));
    job.deliver_from = Some(toronto(18, 16, 17));
    job.deliver_to = Some(toronto(18, 36, 17));
    job.webhook_url = Some("http://foo.com/callback".to_string());
    job.reference = Some("ReferenceCode".to_string());
    job.service_id = Some(2);
    job.payment_method = Some(PaymentMethod::CustomerCash);
    job.order_total = Some(100.0);
    job.delivery_fee = Some(10.0);
    job.tip = 1.5;
    job.add_job_item(JobItem::new(1).with_sku("SKU1").with_description("SKU one"));
    job.add_job_item(JobItem::new(2).with_sku("SKU2").with_description("SKU two"));
    job.special_instructions = Some("Job-level special instructions".to_string());
    job.require_photo_on_delivery = Some(true);
    job.external_id = Some("External ID".to_string());
    job.pickup_address = Some(address(
        "P. Sherman",
        "32 Wallaby Way",
        "Sydney",
        "123456",
        "P. Sherman",
        "5141234567",
        "Large delivery",
    ));
    job.delivery_address = Some(address(
        "Mr J. Recipient",
        "101 Foo Street",
        "Melbourne",
        "876543",
        "Mr Recipient",
        "4381234567",
        "Ring doorbell",
    ));
    job
}
