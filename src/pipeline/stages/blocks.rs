//! Content block stage.
//!
//! Turns the product and its FAQ questions into five template-agnostic
//! blocks. Blocks never reference each other, so any page can embed any
//! subset of them.

use crate::pipeline::model::{
    BenefitItem, BenefitsBlock, BlockKind, ComparisonBlock, ContentBlocks, FaqBlock, FaqEntry,
    FaqQuestion, FaqSections, IngredientItem, IngredientsBlock, UsageBlock, UsageStep,
};
use crate::pipeline::{PipelineError, Stage};
use crate::product::NormalizedProduct;

const INGREDIENT_LABEL: &str = "Natural Extract";
const DEFAULT_APPLY_STEP: &str = "Massage gently until absorbed";

const ADVANTAGES: [&str; 4] = [
    "Natural ingredients",
    "Clinically tested",
    "Cruelty-free",
    "Fast-absorbing formula",
];

/// Stage that builds [`ContentBlocks`] from the product and questions.
pub struct BlockStage;

impl Stage for BlockStage {
    type Input<'a> = (&'a NormalizedProduct, &'a [FaqQuestion]);
    type Output = ContentBlocks;

    fn name(&self) -> &'static str {
        "blocks"
    }

    fn process(&self, (product, questions): Self::Input<'_>) -> Result<Self::Output, PipelineError> {
        Ok(build(product, questions))
    }

    fn output_size(&self, _blocks: &Self::Output) -> usize {
        ContentBlocks::COUNT
    }
}

/// Build all five content blocks.
pub fn build(product: &NormalizedProduct, questions: &[FaqQuestion]) -> ContentBlocks {
    ContentBlocks {
        benefits: benefits_block(product),
        ingredients: ingredients_block(product),
        usage: usage_block(product),
        comparison: comparison_block(product),
        faqs: faq_block(questions),
    }
}

fn benefits_block(product: &NormalizedProduct) -> BenefitsBlock {
    BenefitsBlock {
        kind: BlockKind::Benefits,
        title: format!("Why Choose {}?", product.product_name),
        items: product
            .benefits
            .iter()
            .map(|benefit| BenefitItem {
                benefit: benefit.clone(),
                description: format!("{benefit} tailored for your skin"),
            })
            .collect(),
    }
}

fn ingredients_block(product: &NormalizedProduct) -> IngredientsBlock {
    IngredientsBlock {
        kind: BlockKind::Ingredients,
        title: "Key Ingredients".into(),
        items: product
            .ingredients
            .iter()
            .map(|name| IngredientItem {
                name: name.clone(),
                label: INGREDIENT_LABEL.into(),
            })
            .collect(),
    }
}

/// Always four steps; only step 3 depends on the product.
fn usage_block(product: &NormalizedProduct) -> UsageBlock {
    let apply = if product.usage_instructions.is_empty() {
        DEFAULT_APPLY_STEP
    } else {
        product.usage_instructions.as_str()
    };

    let steps = [
        "Cleanse your skin thoroughly",
        "Apply a small amount of serum",
        apply,
        "Follow with your regular moisturizer",
    ];

    UsageBlock {
        kind: BlockKind::Usage,
        title: "How to Use".into(),
        steps: steps
            .into_iter()
            .zip(1..)
            .map(|(instruction, step)| UsageStep {
                step,
                instruction: instruction.to_string(),
            })
            .collect(),
    }
}

fn comparison_block(product: &NormalizedProduct) -> ComparisonBlock {
    ComparisonBlock {
        kind: BlockKind::Comparison,
        title: "How We Compare".into(),
        our_product: product.product_name.clone(),
        competitors: product.competitor_products.keys().cloned().collect(),
        advantages: ADVANTAGES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Group questions by category, keeping first-seen category order and the
/// original question order within each category.
fn faq_block(questions: &[FaqQuestion]) -> FaqBlock {
    let mut categories = FaqSections::new();
    for question in questions {
        categories
            .entry(question.category.label().to_string())
            .or_default()
            .push(FaqEntry {
                question: question.question.clone(),
                id: question.id,
            });
    }

    FaqBlock {
        kind: BlockKind::Faqs,
        title: "Frequently Asked Questions".into(),
        categories,
    }
}
