//! Planning phases, run in order by [`ConsolidationPlanner`](crate::ConsolidationPlanner).

pub mod apply;
pub mod linking;
pub mod selection;
pub mod survivor;
