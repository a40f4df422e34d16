//! Rule contract, result value, rule variants and the rule set.

pub mod ids;
pub mod result;
pub mod set;
pub mod traits;
pub mod variants;

pub use result::AnalysisResult;
pub use set::RuleSet;
pub use traits::Rule;
