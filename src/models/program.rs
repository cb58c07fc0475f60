// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training program model, as listed by the hosted backend.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Raw `programs` row as the backend returns it.
///
/// The id column may be numeric or text depending on the table definition,
/// and `name` may be null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramRow {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
}

/// Program as exposed by the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Program {
    pub id: String,
    pub name: String,
}

impl From<ProgramRow> for Program {
    fn from(row: ProgramRow) -> Self {
        let id = match row.id {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Self {
            id,
            name: row.name.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_from_row_coerces_id() {
        let rows: Vec<ProgramRow> = serde_json::from_str(
            r#"[{"id": 7, "name": "Strength"}, {"id": "abc", "name": null}, {"name": "Open"}]"#,
        )
        .unwrap();
        let programs: Vec<Program> = rows.into_iter().map(Program::from).collect();

        assert_eq!(programs[0].id, "7");
        assert_eq!(programs[0].name, "Strength");
        assert_eq!(programs[1].id, "abc");
        assert_eq!(programs[1].name, "");
        assert_eq!(programs[2].id, "");
    }
}
