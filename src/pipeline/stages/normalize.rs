//! Normalization stage.
//!
//! Maps the raw record onto the nine canonical product fields.

use crate::pipeline::{PipelineError, Stage};
use crate::product::{NormalizedProduct, RawProductRecord, UNKNOWN_PRODUCT};

/// Stage that turns a [`RawProductRecord`] into a [`NormalizedProduct`].
///
/// Missing fields get fixed defaults: `"Unknown Product"` for the name,
/// empty text for text fields and empty collections otherwise. Values
/// that are present are copied as-is.
pub struct NormalizeStage;

impl Stage for NormalizeStage {
    type Input<'a> = &'a RawProductRecord;
    type Output = NormalizedProduct;

    fn name(&self) -> &'static str {
        "normalize"
    }

    fn process(&self, raw: Self::Input<'_>) -> Result<Self::Output, PipelineError> {
        Ok(normalize(raw))
    }

    fn output_size(&self, _product: &Self::Output) -> usize {
        1
    }
}

/// Build the canonical product from a raw record.
pub fn normalize(raw: &RawProductRecord) -> NormalizedProduct {
    NormalizedProduct {
        product_name: raw
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
        concentration: raw.concentration.clone().unwrap_or_default(),
        skin_type: raw.skin_type.clone().unwrap_or_default(),
        ingredients: raw.ingredients.clone().unwrap_or_default(),
        benefits: raw.benefits.clone().unwrap_or_default(),
        usage_instructions: raw.usage.clone().unwrap_or_default(),
        side_effects: raw.side_effects.clone().unwrap_or_default(),
        price: raw.price.clone().unwrap_or_default(),
        competitor_products: raw.competitor_products.clone().unwrap_or_default(),
    }
}
