use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Outcome of processing one input line
///
/// Serializes as `{"ok":true,"regionAreas":[...]}` or `{"ok":false,"reason":"..."}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_areas: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Report {
    pub fn success(region_areas: Vec<u64>) -> Self {
        Report {
            ok: true,
            region_areas: Some(region_areas),
            reason: None,
        }
    }

    pub fn failure(error: &ParseError) -> Self {
        Report {
            ok: false,
            region_areas: None,
            reason: Some(error.to_string()),
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Result<Vec<u64>, ParseError>> for Report {
    fn from(result: Result<Vec<u64>, ParseError>) -> Self {
        match result {
            Ok(region_areas) => Report::success(region_areas),
            Err(e) => Report::failure(&e),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.region_areas, &self.reason) {
            (Some(areas), _) if self.ok => {
                f.write_str("The areas of fertile land are:")?;
                for area in areas {
                    write!(f, " {}", area)?;
                }
                Ok(())
            }
            (_, reason) => write!(
                f,
                "Unable to parse the input rectangles: {}",
                reason.as_deref().unwrap_or("unknown reason")
            ),
        }
    }
}
