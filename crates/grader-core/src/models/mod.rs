pub mod bias;
pub mod block;
pub mod correction;
pub mod evaluation;
pub mod feedback;
pub mod parse;
pub mod verdict;

pub use bias::{
    BiasIndicator, BiasMetrics, BiasReport, BiasStats, ContextAnalysisEntry, EntityReference,
    Gender, GenderCounts, NamedEntityCounts,
};
pub use block::{Block, BlockKind, Cell, ImageBlock, MetricBlock, TableBlock};
pub use correction::{Correction, Intervention};
pub use evaluation::{EvaluationMetrics, EvaluationResult};
pub use feedback::{Feedback, PriorityLevel};
pub use parse::{DepRole, EntitySpan, ParsedText, Span, Token};
pub use verdict::{BlockAccuracy, Verdict};
