//! Built-in stage kinds
//!
//! Workflows are assembled from these; none of them knows which agent it
//! belongs to.

mod builtin;
mod compile;
mod fan_out;
mod prompt;
mod router;

pub use builtin::{ContextAnalysisStage, FinalizeStage, InitializeStage, FINALIZE_STAGE};
pub use compile::{Flag, ResultCompiler, NO_CONTENT};
pub use fan_out::{fan_out, FanOutAxis, FanOutStage, Merged};
pub use prompt::PromptStage;
pub use router::{recommend, RouterStage};
