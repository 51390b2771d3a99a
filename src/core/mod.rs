pub mod evaluator;
pub mod prompt;
pub mod response;
pub mod volume;

pub use crate::domain::model::{EvaluationResult, LayoutRequest, TankSpec};
pub use crate::domain::ports::{AdviceProvider, Repository};
pub use crate::utils::error::Result;
