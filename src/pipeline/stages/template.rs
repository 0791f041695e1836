//! Page template mapping stage.
//!
//! Places content blocks into the three page layouts and adds each
//! layout's static copy. Nothing is derived from the product here.

use crate::pipeline::model::{
    ComparisonTemplate, ContentBlocks, FaqTemplate, ProductTemplate, TemplateKind, TemplatedPages,
};
use crate::pipeline::{PipelineError, Stage};

pub const FAQ_TITLE: &str = "Frequently Asked Questions";
pub const FAQ_DESCRIPTION: &str = "Find answers to common questions about our product";
pub const PRODUCT_TITLE: &str = "Product Overview";
pub const COMPARISON_TITLE: &str = "Why Choose Us?";

const HIGHLIGHTS: [&str; 4] = [
    "Premium Formula",
    "Dermatologist Tested",
    "Cruelty-Free",
    "Fast-Acting Results",
];

const TESTIMONIALS: [&str; 3] = [
    "Trusted by skincare professionals",
    "Used by thousands of satisfied customers",
    "Award-winning formula",
];

/// Stage that maps [`ContentBlocks`] onto [`TemplatedPages`].
pub struct TemplateStage;

impl Stage for TemplateStage {
    type Input<'a> = &'a ContentBlocks;
    type Output = TemplatedPages;

    fn name(&self) -> &'static str {
        "template"
    }

    fn process(&self, blocks: Self::Input<'_>) -> Result<Self::Output, PipelineError> {
        Ok(map(blocks))
    }

    fn output_size(&self, _pages: &Self::Output) -> usize {
        TemplatedPages::COUNT
    }
}

/// Map blocks onto the FAQ, product and comparison layouts.
pub fn map(blocks: &ContentBlocks) -> TemplatedPages {
    TemplatedPages {
        faq: FaqTemplate {
            page_type: TemplateKind::Faq,
            title: Some(FAQ_TITLE.into()),
            description: Some(FAQ_DESCRIPTION.into()),
            sections: blocks.faqs.categories.clone(),
        },
        product: ProductTemplate {
            page_type: TemplateKind::Product,
            title: Some(PRODUCT_TITLE.into()),
            benefits_section: blocks.benefits.clone(),
            ingredients_section: blocks.ingredients.clone(),
            usage_section: blocks.usage.clone(),
            highlights: to_strings(&HIGHLIGHTS),
        },
        comparison: ComparisonTemplate {
            page_type: TemplateKind::Comparison,
            title: Some(COMPARISON_TITLE.into()),
            comparison_data: blocks.comparison.clone(),
            testimonials: to_strings(&TESTIMONIALS),
        },
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
