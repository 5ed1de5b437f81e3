//! Form posted by the listing controls when the shopper changes a filter.

use serde::Deserialize;
use validator::Validate;

use crate::codec::is_truthy;
use crate::domain::price::CustomPriceRange;
use crate::domain::types::PageNumber;
use crate::forms::FormError;
use crate::services::listing::FilterChange;

/// `changed` value sent by the custom price inputs.
pub const CUSTOM_PRICE_CONTROL: &str = "customPrice";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct FilterChangeForm {
    /// Query string of the listing the change was made on.
    #[serde(default)]
    #[validate(length(max = 4096))]
    pub current: String,
    /// Option key of the toggled control, `customPrice`, or empty when only
    /// the page changed.
    #[serde(default)]
    #[validate(length(max = 128))]
    pub changed: String,
    /// Checkbox value; absent when the box was unchecked.
    pub selected: Option<String>,
    pub page: Option<u32>,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl TryFrom<&FilterChangeForm> for FilterChange {
    type Error = FormError;

    fn try_from(form: &FilterChangeForm) -> Result<Self, Self::Error> {
        form.validate()?;

        match form.changed.trim() {
            "" => Ok(FilterChange::Page(PageNumber::new(form.page.unwrap_or(1))?)),
            CUSTOM_PRICE_CONTROL => match (form.min, form.max) {
                (Some(min), Some(max)) => Ok(FilterChange::CustomPrice(CustomPriceRange::new(
                    min, max,
                ))),
                (None, None) => Ok(FilterChange::ClearCustomPrice),
                _ => Err(FormError::IncompletePriceRange),
            },
            key => Ok(FilterChange::toggle(
                key,
                form.selected.as_deref().is_some_and(is_truthy),
            )),
        }
    }
}
