mod classifier;
mod line;

pub use classifier::{CFamilyLines, CounterKind, LineClassifier, MarkupLines, PlainLines};
pub use line::{LineCounter, LineStats};
