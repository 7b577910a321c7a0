use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod calculation {
    use super::*;

    /// Request body for creating a calculation.
    ///
    /// `operation` stays a raw string on the wire so an unknown tag is
    /// rejected by the server with a message naming it, instead of dying in
    /// deserialization.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CalculationNew {
        pub operation: String,
        pub operand1: f64,
        pub operand2: f64,
    }

    /// Request body for updating a calculation.
    ///
    /// Every field is optional; unset fields keep their stored values. The
    /// server recomputes `result` whatever the combination.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CalculationUpdate {
        pub operation: Option<String>,
        pub operand1: Option<f64>,
        pub operand2: Option<f64>,
    }

    /// A calculation as returned by the server.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CalculationView {
        /// Calculation id (UUID).
        ///
        /// This is serialized as a string in JSON.
        pub id: Uuid,
        pub user_id: String,
        /// Canonical operation tag: `add`, `subtract`, `multiply`, `divide`.
        pub operation: String,
        pub operand1: f64,
        pub operand2: f64,
        pub result: f64,
        /// RFC3339 timestamp in UTC, set once at creation.
        pub created_at: DateTime<Utc>,
    }
}
