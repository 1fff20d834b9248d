//! Payment method codes.
//!
//! A closed set; membership of a raw code is checked by `TryFrom<i64>`.

use crate::error::ValidationError;

/// How the delivery is paid for. Serialized as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PaymentMethod {
    Account = 1,
    CreditCard = 2,
    Invoice = 3,
    CustomerCreditCard = 4,
    CustomerDebit = 5,
    CustomerCash = 6,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Account,
        PaymentMethod::CreditCard,
        PaymentMethod::Invoice,
        PaymentMethod::CustomerCreditCard,
        PaymentMethod::CustomerDebit,
        PaymentMethod::CustomerCash,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for PaymentMethod {
    type Error = ValidationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| i64::from(method.code()) == code)
            .ok_or(ValidationError::InvalidPaymentMethod(code))
    }
}
