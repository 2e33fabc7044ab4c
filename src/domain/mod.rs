mod analysis;
mod classification;
mod language;

pub use analysis::VoiceAnalysis;
pub use classification::Classification;
pub use language::Language;
