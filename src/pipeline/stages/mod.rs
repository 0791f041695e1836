//! Default pipeline stages.
//!
//! The standard pipeline consists of:
//!
//! 1. **NormalizeStage** - Map the raw record onto the canonical product fields
//! 2. **QuestionStage** - Derive the sixteen FAQ questions
//! 3. **BlockStage** - Build the five reusable content blocks
//! 4. **TemplateStage** - Place blocks into the three page layouts
//! 5. **AssembleStage** - Wrap each layout in its versioned envelope

mod assemble;
mod blocks;
mod normalize;
mod questions;
mod template;

pub use assemble::{AssembleStage, assemble};
pub use blocks::{BlockStage, build};
pub use normalize::{NormalizeStage, normalize};
pub use questions::{QUESTION_COUNT, QuestionStage, derive};
pub use template::{TemplateStage, map};
