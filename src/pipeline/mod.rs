//! Content generation pipeline.
//!
//! The pipeline turns one product record into three page documents
//! through a fixed series of stages:
//! 1. Normalize (raw record to canonical product)
//! 2. Questions (sixteen FAQ entries)
//! 3. Blocks (five reusable content blocks)
//! 4. Template (blocks placed into page layouts)
//! 5. Assemble (versioned page envelopes)
//!
//! Each stage's output is stored in a [`PipelineContext`], and each stage
//! is handed only the earlier results it declares as its input.

mod context;
mod error;
pub mod model;
pub mod stages;

pub use context::PipelineContext;
pub use error::PipelineError;
pub use model::FinalPages;

use tracing::{debug, info, info_span};

use crate::product::RawProductRecord;

use stages::{AssembleStage, BlockStage, NormalizeStage, QuestionStage, TemplateStage};

/// A stage in the content pipeline.
///
/// A stage is a pure transformation from its declared input (borrowed from
/// the context) to a new, owned output. Stages keep no state between calls.
pub trait Stage {
    /// The earlier results this stage reads.
    type Input<'a>;

    /// The result this stage adds to the context.
    type Output;

    /// Unique name for this stage (used in logs and errors).
    fn name(&self) -> &'static str;

    /// Run this stage.
    fn process(&self, input: Self::Input<'_>) -> Result<Self::Output, PipelineError>;

    /// Number of items in an output (questions, blocks or pages), for logging.
    fn output_size(&self, output: &Self::Output) -> usize;
}

/// The content pipeline.
///
/// Runs normalize → questions → blocks → template → assemble, in that
/// order, for every call to [`Pipeline::run`]. A pipeline holds no per-run
/// state, so one instance can serve any number of runs, including from
/// several threads at once.
pub struct Pipeline {
    normalize: NormalizeStage,
    questions: QuestionStage,
    blocks: BlockStage,
    template: TemplateStage,
    assemble: AssembleStage,
}

impl Pipeline {
    /// Create the standard five-stage pipeline.
    pub fn new() -> Self {
        Self {
            normalize: NormalizeStage,
            questions: QuestionStage,
            blocks: BlockStage,
            template: TemplateStage,
            assemble: AssembleStage,
        }
    }

    /// Run the pipeline on one raw record.
    ///
    /// The first failing stage aborts the run; no partial output is
    /// returned.
    pub fn run(&self, raw: RawProductRecord) -> Result<FinalPages, PipelineError> {
        let _span = info_span!("pipeline").entered();
        let mut ctx = PipelineContext::new(raw);

        let product = run_stage(&self.normalize, ctx.raw())?;
        ctx.set_product(product)?;

        let questions = run_stage(&self.questions, ctx.product()?)?;
        ctx.set_questions(questions)?;

        let blocks = run_stage(&self.blocks, (ctx.product()?, ctx.questions()?))?;
        ctx.set_blocks(blocks)?;

        let templated = run_stage(&self.template, ctx.blocks()?)?;
        ctx.set_templated(templated)?;

        let pages = run_stage(&self.assemble, (ctx.templated()?, ctx.questions()?))?;
        ctx.set_pages(pages)?;

        debug!(keys = ?ctx.filled_keys(), "context filled");
        info!(
            product = %ctx.product()?.product_name,
            questions = ctx.questions()?.len(),
            "pipeline complete"
        );

        ctx.into_pages()
    }

    /// Get the names of all stages in order.
    pub fn stage_names(&self) -> [&'static str; 5] {
        [
            self.normalize.name(),
            self.questions.name(),
            self.blocks.name(),
            self.template.name(),
            self.assemble.name(),
        ]
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn run_stage<'a, S: Stage>(stage: &S, input: S::Input<'a>) -> Result<S::Output, PipelineError> {
    let output = stage.process(input)?;
    debug!(
        stage = stage.name(),
        size = stage.output_size(&output),
        "stage complete"
    );
    Ok(output)
}
