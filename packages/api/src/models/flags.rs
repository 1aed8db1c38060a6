//! Feature flags.
//!
//! `GET /feature-flags` returns an object keyed by flag name whose values are
//! whatever JSON the supervisor last `PUT`. Two flags are understood by the
//! client:
//!
//! | Key | Value | Effect (server side) |
//! |-----|-------|----------------------|
//! | `absence_only_unexcused` | `{"enabled": bool}` | only unexcused absences count toward percentages |
//! | `attendance_grace_period` | `{"minutes": int}` | extra minutes after a session ends before it locks |
//!
//! Unknown keys are kept so a round-trip never loses data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const ABSENCE_ONLY_UNEXCUSED: &str = "absence_only_unexcused";
pub const ATTENDANCE_GRACE_PERIOD: &str = "attendance_grace_period";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(pub BTreeMap<String, Value>);

impl FeatureFlags {
    pub fn absence_only_unexcused(&self) -> bool {
        self.0
            .get(ABSENCE_ONLY_UNEXCUSED)
            .and_then(|v| v.get("enabled"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn grace_period_minutes(&self) -> i64 {
        self.0
            .get(ATTENDANCE_GRACE_PERIOD)
            .and_then(|v| v.get("minutes"))
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }

    /// Request bodies for saving both known flags, in save order.
    pub fn update_bodies(absence_only_unexcused: bool, grace_minutes: i64) -> [(&'static str, Value); 2] {
        [
            (ABSENCE_ONLY_UNEXCUSED, json!({ "enabled": absence_only_unexcused })),
            (ATTENDANCE_GRACE_PERIOD, json!({ "minutes": grace_minutes })),
        ]
    }
}
