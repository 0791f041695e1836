//! FAQ question derivation stage.

use crate::pipeline::model::{Category, FaqQuestion};
use crate::pipeline::{PipelineError, Stage};
use crate::product::NormalizedProduct;

/// Number of questions produced per run (four per category).
pub const QUESTION_COUNT: usize = 16;

const BENEFIT_SUMMARY_LEN: usize = 3;
const INGREDIENT_SUMMARY_LEN: usize = 4;

/// Stage that derives the fixed FAQ question set from the product.
///
/// Every run yields the same sixteen questions in the same order; only
/// the interpolated product data changes.
pub struct QuestionStage;

impl Stage for QuestionStage {
    type Input<'a> = &'a NormalizedProduct;
    type Output = Vec<FaqQuestion>;

    fn name(&self) -> &'static str {
        "questions"
    }

    fn process(&self, product: Self::Input<'_>) -> Result<Self::Output, PipelineError> {
        Ok(derive(product))
    }

    fn output_size(&self, questions: &Self::Output) -> usize {
        questions.len()
    }
}

/// Derive the sixteen FAQ questions, ids 1..=16, grouped by category.
pub fn derive(product: &NormalizedProduct) -> Vec<FaqQuestion> {
    use Category::*;

    let name = &product.product_name;

    let entries: [(Category, String, String); QUESTION_COUNT] = [
        (
            ProductOverview,
            format!("What is {name}?"),
            format!("{name} is a specialized skincare product."),
        ),
        (
            ProductOverview,
            format!("What are the main benefits of {name}?"),
            format!(
                "Benefits include: {}.",
                join_or(&product.benefits, Some(BENEFIT_SUMMARY_LEN), "improved skin health")
            ),
        ),
        (
            ProductOverview,
            format!("Who should use {name}?"),
            "This product is suitable for various skin types.".into(),
        ),
        (
            ProductOverview,
            format!("Is {name} suitable for sensitive skin?"),
            "Formulated with gentle, natural ingredients.".into(),
        ),
        (
            UsageInstructions,
            format!("How do I use {name}?"),
            format!(
                "Usage: {}",
                text_or(&product.usage_instructions, "Apply as directed on packaging.")
            ),
        ),
        (
            UsageInstructions,
            format!("How often should I use {name}?"),
            "Recommended frequency depends on your skin type.".into(),
        ),
        (
            UsageInstructions,
            format!("Can I use {name} with other products?"),
            "Generally compatible with most skincare routines.".into(),
        ),
        (
            UsageInstructions,
            format!("When will I see results from {name}?"),
            "Results typically appear within 2-4 weeks of consistent use.".into(),
        ),
        (
            BenefitsResults,
            format!("What specific skin concerns does {name} address?"),
            format!(
                "Targets: {}.",
                join_or(&product.benefits, None, "multiple skin concerns")
            ),
        ),
        (
            BenefitsResults,
            format!("Are the benefits of {name} permanent?"),
            "Continued use maintains the benefits for your skin.".into(),
        ),
        (
            BenefitsResults,
            format!("Can I combine {name} with other treatments?"),
            "Yes, with proper guidance. Consult dermatologist if needed.".into(),
        ),
        (
            BenefitsResults,
            format!("What do users say about {name}?"),
            "Customers report positive results and high satisfaction.".into(),
        ),
        (
            IngredientsSafety,
            format!("What are the key ingredients in {name}?"),
            format!(
                "Main ingredients: {}.",
                join_or(
                    &product.ingredients,
                    Some(INGREDIENT_SUMMARY_LEN),
                    "Natural plant extracts and vitamins"
                )
            ),
        ),
        (
            IngredientsSafety,
            format!("Is {name} safe for all skin types?"),
            "Dermatologist-tested and hypoallergenic formula.".into(),
        ),
        (
            IngredientsSafety,
            format!("Are there any side effects of {name}?"),
            format!(
                "Side effects: {}",
                text_or(
                    &product.side_effects,
                    "Minimal. Some users may experience mild tingling."
                )
            ),
        ),
        (
            IngredientsSafety,
            format!("Is {name} cruelty-free and vegan?"),
            "Committed to ethical, sustainable production.".into(),
        ),
    ];

    entries
        .into_iter()
        .zip(1..)
        .map(|((category, question, context), id)| FaqQuestion {
            id,
            category,
            question,
            context,
        })
        .collect()
}

/// Join up to `limit` items with ", ", or use `fallback` for an empty list.
fn join_or(items: &[String], limit: Option<usize>, fallback: &str) -> String {
    if items.is_empty() {
        return fallback.to_string();
    }
    let take = limit.unwrap_or(items.len());
    items
        .iter()
        .take(take)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn text_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() { fallback } else { text }
}
