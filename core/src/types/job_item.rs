//! Job line items.

use serde::Serialize;

use super::missing_fields;
use crate::error::ValidationError;

/// One line item of goods to be picked up. Only `quantity` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobItem {
    pub quantity: Option<u32>,
    pub description: Option<String>,
    pub sku: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WireJobItem<'a> {
    pub quantity: u32,
    pub description: Option<&'a str>,
    pub sku: Option<&'a str>,
}

impl JobItem {
    pub fn new(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn to_wire(&self) -> Result<WireJobItem<'_>, ValidationError> {
        let quantity = self
            .quantity
            .ok_or_else(|| missing_fields("job_item", &[("quantity", true)]))?;
        Ok(WireJobItem {
            quantity,
            description: self.description.as_deref(),
            sku: self.sku.as_deref(),
        })
    }
}
