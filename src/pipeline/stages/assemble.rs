//! Page assembly stage.
//!
//! Wraps each templated page in its versioned `{type, meta, content}`
//! envelope. Pages are assembled independently of one another.

use crate::pipeline::model::{
    ComparisonContent, FaqContent, FaqQuestion, FinalPage, FinalPages, PAGE_VERSION, PageMeta,
    PageType, ProductContent, TemplatedPages,
};
use crate::pipeline::{PipelineError, Stage};

const DEFAULT_FAQ_TITLE: &str = "FAQ";
const DEFAULT_PRODUCT_TITLE: &str = "Product";
const DEFAULT_COMPARISON_TITLE: &str = "Comparison";

/// Stage that turns [`TemplatedPages`] into [`FinalPages`].
///
/// The FAQ envelope also records how many questions the run produced.
pub struct AssembleStage;

impl Stage for AssembleStage {
    type Input<'a> = (&'a TemplatedPages, &'a [FaqQuestion]);
    type Output = FinalPages;

    fn name(&self) -> &'static str {
        "assemble"
    }

    fn process(&self, (templated, questions): Self::Input<'_>) -> Result<Self::Output, PipelineError> {
        Ok(assemble(templated, questions))
    }

    fn output_size(&self, _pages: &Self::Output) -> usize {
        FinalPages::FILENAMES.len()
    }
}

/// Assemble the three final pages.
pub fn assemble(templated: &TemplatedPages, questions: &[FaqQuestion]) -> FinalPages {
    let faq = &templated.faq;
    let product = &templated.product;
    let comparison = &templated.comparison;

    FinalPages {
        faq: FinalPage {
            kind: PageType::FaqPage,
            meta: meta(
                faq.title.as_deref().unwrap_or(DEFAULT_FAQ_TITLE),
                Some(faq.description.clone().unwrap_or_default()),
            ),
            content: FaqContent {
                sections: faq.sections.clone(),
                total_questions: questions.len(),
            },
        },
        product: FinalPage {
            kind: PageType::ProductPage,
            meta: meta(product.title.as_deref().unwrap_or(DEFAULT_PRODUCT_TITLE), None),
            content: ProductContent {
                benefits: product.benefits_section.clone(),
                ingredients: product.ingredients_section.clone(),
                usage: product.usage_section.clone(),
                highlights: product.highlights.clone(),
            },
        },
        comparison: FinalPage {
            kind: PageType::ComparisonPage,
            meta: meta(
                comparison.title.as_deref().unwrap_or(DEFAULT_COMPARISON_TITLE),
                None,
            ),
            content: ComparisonContent {
                comparison: comparison.comparison_data.clone(),
                testimonials: comparison.testimonials.clone(),
            },
        },
    }
}

fn meta(title: &str, description: Option<String>) -> PageMeta {
    PageMeta {
        title: title.to_string(),
        description,
        version: PAGE_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::stages::{build, derive, map, normalize};
    use crate::product::RawProductRecord;

    fn inputs() -> (TemplatedPages, Vec<FaqQuestion>) {
        let product = normalize(&RawProductRecord::default());
        let questions = derive(&product);
        (map(&build(&product, &questions)), questions)
    }

    #[test]
    fn test_envelopes() {
        let (templated, questions) = inputs();
        let pages = assemble(&templated, &questions);

        assert_eq!(pages.faq.kind, PageType::FaqPage);
        assert_eq!(pages.faq.meta.title, "Frequently Asked Questions");
        assert_eq!(
            pages.faq.meta.description.as_deref(),
            Some("Find answers to common questions about our product")
        );
        assert_eq!(pages.faq.content.total_questions, 16);

        assert_eq!(pages.product.meta.title, "Product Overview");
        assert!(pages.product.meta.description.is_none());
        assert_eq!(pages.comparison.meta.title, "Why Choose Us?");

        for version in [
            &pages.faq.meta.version,
            &pages.product.meta.version,
            &pages.comparison.meta.version,
        ] {
            assert_eq!(version, "1.0");
        }
    }

    #[test]
    fn test_meta_defaults_when_template_lacks_them() {
        let (mut templated, questions) = inputs();
        templated.faq.title = None;
        templated.faq.description = None;
        templated.product.title = None;
        templated.comparison.title = None;

        let pages = assemble(&templated, &questions);
        assert_eq!(pages.faq.meta.title, "FAQ");
        assert_eq!(pages.faq.meta.description.as_deref(), Some(""));
        assert_eq!(pages.product.meta.title, "Product");
        assert_eq!(pages.comparison.meta.title, "Comparison");
    }

    #[test]
    fn test_total_questions_follows_input() {
        let (templated, questions) = inputs();
        let pages = assemble(&templated, &questions[..5]);
        assert_eq!(pages.faq.content.total_questions, 5);
    }

    #[test]
    fn test_product_meta_has_no_description_key() {
        let (templated, questions) = inputs();
        let pages = assemble(&templated, &questions);
        let json = serde_json::to_value(&pages.product).unwrap();

        let meta = json["meta"].as_object().unwrap();
        assert_eq!(meta.keys().collect::<Vec<_>>(), vec!["title", "version"]);
        assert_eq!(json["type"], "product_page");
    }
}
