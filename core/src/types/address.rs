//! Pickup and delivery addresses.
//!
//! State and zip code are normalized on write: every whitespace character is
//! removed, then the length is checked in characters (not bytes).

use serde::Serialize;

use super::missing_fields;
use crate::error::ValidationError;

pub const MAX_STATE_LEN: usize = 2;
pub const MAX_ZIP_CODE_LEN: usize = 6;

/// A pickup or delivery location plus the people to reach there.
///
/// `street_address`, `city`, `state` and `zip_code` must be set before the
/// address can be serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Company or recipient label.
    pub address_name: Option<String>,
    pub street_address: Option<String>,
    /// Floor or suite.
    pub floor: Option<String>,
    pub city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    pub contact: Option<String>,
    pub phone_number: Option<String>,
    pub special_instructions: Option<String>,
}

/// Wire view of an [`Address`]. Unset optional fields serialize as `null`.
#[derive(Debug, Serialize)]
pub struct WireAddress<'a> {
    pub address_name: Option<&'a str>,
    pub street_address: &'a str,
    pub floor: Option<&'a str>,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub contact: Option<&'a str>,
    pub special_instructions: Option<&'a str>,
    pub phone_number: Option<&'a str>,
}

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Set the state code. All whitespace is removed first; the result may
    /// be at most [`MAX_STATE_LEN`] characters.
    pub fn set_state(&mut self, state: &str) -> Result<(), ValidationError> {
        let state = strip_whitespace(state);
        if state.chars().count() > MAX_STATE_LEN {
            return Err(ValidationError::StateTooLong {
                value: state,
                max: MAX_STATE_LEN,
            });
        }
        self.state = Some(state);
        Ok(())
    }

    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    /// Set the zip/postal code. All whitespace is removed first; the result
    /// may be at most [`MAX_ZIP_CODE_LEN`] characters.
    pub fn set_zip_code(&mut self, zip_code: &str) -> Result<(), ValidationError> {
        let zip_code = strip_whitespace(zip_code);
        if zip_code.chars().count() > MAX_ZIP_CODE_LEN {
            return Err(ValidationError::ZipCodeTooLong {
                value: zip_code,
                max: MAX_ZIP_CODE_LEN,
            });
        }
        self.zip_code = Some(zip_code);
        Ok(())
    }

    pub fn to_wire(&self) -> Result<WireAddress<'_>, ValidationError> {
        match (&self.street_address, &self.city, &self.state, &self.zip_code) {
            (Some(street_address), Some(city), Some(state), Some(zip_code)) => Ok(WireAddress {
                address_name: self.address_name.as_deref(),
                street_address,
                floor: self.floor.as_deref(),
                city,
                state,
                zip_code,
                contact: self.contact.as_deref(),
                special_instructions: self.special_instructions.as_deref(),
                phone_number: self.phone_number.as_deref(),
            }),
            _ => Err(missing_fields(
                "address",
                &[
                    ("street_address", self.street_address.is_none()),
                    ("city", self.city.is_none()),
                    ("state", self.state.is_none()),
                    ("zip_code", self.zip_code.is_none()),
                ],
            )),
        }
    }
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
