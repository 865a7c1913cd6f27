//! 数据模型模块

mod api;
mod diagnosis;

pub use api::{DiagnoseRequest, DiagnoseResponse, ExamplesResponse};
pub use diagnosis::{Diagnosis, PossibleCause, RecommendedSolution};
