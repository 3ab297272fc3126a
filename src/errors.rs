use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Error type that captures the engine's failure modes.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unsupported period length code: {0}")]
    UnsupportedPeriodKind(i32),
    #[error("Invalid first-day-of-week index: {0} (expected 0-6)")]
    InvalidFirstWeekday(u8),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },
    #[error("{kind} {id} does not belong to {parent_kind} {parent_id}")]
    OwnershipViolation {
        kind: &'static str,
        id: Uuid,
        parent_kind: &'static str,
        parent_id: Uuid,
    },
    #[error(
        "real transaction {real_txn} is not fully allocated: \
         allocated {allocated}, expected {expected}"
    )]
    ReconciliationMismatch {
        real_txn: Uuid,
        allocated: Decimal,
        expected: Decimal,
    },
}
