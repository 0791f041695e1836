//! Pipeline context holding the results of each stage.

use crate::product::{NormalizedProduct, RawProductRecord};

use super::PipelineError;
use super::model::{ContentBlocks, FaqQuestion, FinalPages, TemplatedPages};

/// Per-run store of stage results.
///
/// Each slot is written once, by the stage that owns it, and afterwards only
/// handed out by shared reference. Reading a slot before its stage has run,
/// or writing it twice, is an error rather than a silent overwrite.
///
/// A context belongs to exactly one pipeline run; nothing in it outlives
/// [`PipelineContext::into_pages`].
#[derive(Debug)]
pub struct PipelineContext {
    raw: RawProductRecord,
    product: Option<NormalizedProduct>,
    questions: Option<Vec<FaqQuestion>>,
    blocks: Option<ContentBlocks>,
    templated: Option<TemplatedPages>,
    pages: Option<FinalPages>,
}

impl PipelineContext {
    /// Seed a context with the raw input record.
    pub fn new(raw: RawProductRecord) -> Self {
        Self {
            raw,
            product: None,
            questions: None,
            blocks: None,
            templated: None,
            pages: None,
        }
    }

    pub fn raw(&self) -> &RawProductRecord {
        &self.raw
    }

    pub fn product(&self) -> Result<&NormalizedProduct, PipelineError> {
        read(&self.product, "normalize", "parsed_product")
    }

    pub fn questions(&self) -> Result<&[FaqQuestion], PipelineError> {
        read(&self.questions, "questions", "questions").map(Vec::as_slice)
    }

    pub fn blocks(&self) -> Result<&ContentBlocks, PipelineError> {
        read(&self.blocks, "blocks", "content_blocks")
    }

    pub fn templated(&self) -> Result<&TemplatedPages, PipelineError> {
        read(&self.templated, "template", "templated_pages")
    }

    pub fn set_product(&mut self, product: NormalizedProduct) -> Result<(), PipelineError> {
        write(&mut self.product, product, "normalize", "parsed_product")
    }

    pub fn set_questions(&mut self, questions: Vec<FaqQuestion>) -> Result<(), PipelineError> {
        write(&mut self.questions, questions, "questions", "questions")
    }

    pub fn set_blocks(&mut self, blocks: ContentBlocks) -> Result<(), PipelineError> {
        write(&mut self.blocks, blocks, "blocks", "content_blocks")
    }

    pub fn set_templated(&mut self, templated: TemplatedPages) -> Result<(), PipelineError> {
        write(&mut self.templated, templated, "template", "templated_pages")
    }

    pub fn set_pages(&mut self, pages: FinalPages) -> Result<(), PipelineError> {
        write(&mut self.pages, pages, "assemble", "final_pages")
    }

    /// Names of the slots filled so far, in stage order.
    pub fn filled_keys(&self) -> Vec<&'static str> {
        let mut keys = vec!["raw_product"];
        if self.product.is_some() {
            keys.push("parsed_product");
        }
        if self.questions.is_some() {
            keys.push("questions");
        }
        if self.blocks.is_some() {
            keys.push("content_blocks");
        }
        if self.templated.is_some() {
            keys.push("templated_pages");
        }
        if self.pages.is_some() {
            keys.push("final_pages");
        }
        keys
    }

    /// Consume the context, yielding the assembled pages.
    pub fn into_pages(self) -> Result<FinalPages, PipelineError> {
        self.pages.ok_or_else(|| {
            PipelineError::stage("assemble", "no final pages in context (was assemble stage run?)")
        })
    }
}

fn read<'a, T>(
    slot: &'a Option<T>,
    stage: &str,
    key: &str,
) -> Result<&'a T, PipelineError> {
    slot.as_ref().ok_or_else(|| {
        PipelineError::stage(
            stage,
            format!("'{key}' is not in the context (was {stage} stage run?)"),
        )
    })
}

fn write<T>(slot: &mut Option<T>, value: T, stage: &str, key: &str) -> Result<(), PipelineError> {
    if slot.is_some() {
        return Err(PipelineError::stage(
            stage,
            format!("'{key}' is already in the context"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::stages::normalize;

    #[test]
    fn test_read_before_write_fails() {
        let ctx = PipelineContext::new(RawProductRecord::default());
        let err = ctx.product().unwrap_err();
        assert!(err.to_string().contains("'parsed_product' is not in the context"));
        assert!(ctx.questions().is_err());
        assert!(ctx.blocks().is_err());
        assert!(ctx.templated().is_err());
    }

    #[test]
    fn test_slots_are_write_once() {
        let mut ctx = PipelineContext::new(RawProductRecord::default());
        let product = normalize(ctx.raw());

        ctx.set_product(product.clone()).unwrap();
        let err = ctx.set_product(product).unwrap_err();
        assert!(matches!(err, PipelineError::Stage { ref stage, .. } if stage == "normalize"));
    }

    #[test]
    fn test_filled_keys_track_progress() {
        let mut ctx = PipelineContext::new(RawProductRecord::default());
        assert_eq!(ctx.filled_keys(), vec!["raw_product"]);

        let product = normalize(ctx.raw());
        ctx.set_product(product).unwrap();
        assert_eq!(ctx.filled_keys(), vec!["raw_product", "parsed_product"]);
    }

    #[test]
    fn test_into_pages_requires_assemble() {
        let ctx = PipelineContext::new(RawProductRecord::default());
        assert!(ctx.into_pages().is_err());
    }
}
