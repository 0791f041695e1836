//! Data passed between pipeline stages.
//!
//! Each type here is produced by exactly one stage and only read by the
//! stages after it:
//!
//! 1. questions: [`FaqQuestion`]
//! 2. blocks: [`ContentBlocks`]
//! 3. template: [`TemplatedPages`]
//! 4. assemble: [`FinalPages`]

use indexmap::IndexMap;
use serde::Serialize;

use super::PipelineError;

// =============================================================================
// FAQ questions
// =============================================================================

/// FAQ category. Declaration order is the order questions are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Product Overview")]
    ProductOverview,
    #[serde(rename = "Usage Instructions")]
    UsageInstructions,
    #[serde(rename = "Benefits & Results")]
    BenefitsResults,
    #[serde(rename = "Ingredients & Safety")]
    IngredientsSafety,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::ProductOverview,
        Category::UsageInstructions,
        Category::BenefitsResults,
        Category::IngredientsSafety,
    ];

    /// Display label, also used as the section key on the FAQ page.
    pub fn label(self) -> &'static str {
        match self {
            Category::ProductOverview => "Product Overview",
            Category::UsageInstructions => "Usage Instructions",
            Category::BenefitsResults => "Benefits & Results",
            Category::IngredientsSafety => "Ingredients & Safety",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqQuestion {
    pub id: u32,
    pub category: Category,
    pub question: String,
    pub context: String,
}

// =============================================================================
// Content blocks
// =============================================================================

/// The `type` tag carried by every content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Benefits,
    Ingredients,
    Usage,
    Comparison,
    Faqs,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitItem {
    pub benefit: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitsBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    pub items: Vec<BenefitItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientItem {
    pub name: String,
    #[serde(rename = "type")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientsBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    pub items: Vec<IngredientItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageStep {
    pub step: u32,
    pub instruction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    pub steps: Vec<UsageStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    pub our_product: String,
    pub competitors: Vec<String>,
    pub advantages: Vec<String>,
}

/// A question reference inside an FAQ section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub id: u32,
}

/// Questions grouped by category label, in first-seen order.
pub type FaqSections = IndexMap<String, Vec<FaqEntry>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    pub categories: FaqSections,
}

/// The five reusable content blocks. None refers to another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBlocks {
    pub benefits: BenefitsBlock,
    pub ingredients: IngredientsBlock,
    pub usage: UsageBlock,
    pub comparison: ComparisonBlock,
    pub faqs: FaqBlock,
}

impl ContentBlocks {
    pub const COUNT: usize = 5;
}

// =============================================================================
// Templated pages
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Faq,
    Product,
    Comparison,
}

/// FAQ layout. Title and description are optional so hand-built templates
/// can leave them to the assembler's defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqTemplate {
    pub page_type: TemplateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: FaqSections,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductTemplate {
    pub page_type: TemplateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub benefits_section: BenefitsBlock,
    pub ingredients_section: IngredientsBlock,
    pub usage_section: UsageBlock,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTemplate {
    pub page_type: TemplateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub comparison_data: ComparisonBlock,
    pub testimonials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatedPages {
    pub faq: FaqTemplate,
    pub product: ProductTemplate,
    pub comparison: ComparisonTemplate,
}

impl TemplatedPages {
    pub const COUNT: usize = 3;
}

// =============================================================================
// Final pages
// =============================================================================

/// Version stamped into every page envelope.
pub const PAGE_VERSION: &str = "1.0";

pub const FAQ_FILE: &str = "faq.json";
pub const PRODUCT_FILE: &str = "product_page.json";
pub const COMPARISON_FILE: &str = "comparison_page.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    FaqPage,
    ProductPage,
    ComparisonPage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
}

/// Versioned `{type, meta, content}` envelope around one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalPage<C> {
    #[serde(rename = "type")]
    pub kind: PageType,
    pub meta: PageMeta,
    pub content: C,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqContent {
    pub sections: FaqSections,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductContent {
    pub benefits: BenefitsBlock,
    pub ingredients: IngredientsBlock,
    pub usage: UsageBlock,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonContent {
    pub comparison: ComparisonBlock,
    pub testimonials: Vec<String>,
}

/// The pipeline's result: one envelope per output file.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalPages {
    pub faq: FinalPage<FaqContent>,
    pub product: FinalPage<ProductContent>,
    pub comparison: FinalPage<ComparisonContent>,
}

impl FinalPages {
    /// Canonical filenames, in output order.
    pub const FILENAMES: [&'static str; 3] = [FAQ_FILE, PRODUCT_FILE, COMPARISON_FILE];

    /// Each page as a JSON value, keyed by its canonical filename.
    pub fn entries(&self) -> Result<Vec<(&'static str, serde_json::Value)>, PipelineError> {
        Ok(vec![
            (FAQ_FILE, serde_json::to_value(&self.faq)?),
            (PRODUCT_FILE, serde_json::to_value(&self.product)?),
            (COMPARISON_FILE, serde_json::to_value(&self.comparison)?),
        ])
    }

    /// The whole output as a single `{filename: page}` JSON object.
    pub fn to_value(&self) -> Result<serde_json::Value, PipelineError> {
        let map = self
            .entries()?
            .into_iter()
            .map(|(name, page)| (name.to_string(), page))
            .collect::<serde_json::Map<_, _>>();
        Ok(serde_json::Value::Object(map))
    }
}
