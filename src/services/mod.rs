//! Operation layer over the in-memory book aggregate.

pub mod allocation_service;
pub mod period_service;

pub use allocation_service::AllocationService;
pub use period_service::PeriodService;
