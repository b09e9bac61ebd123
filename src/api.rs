use super::*;

pub const ANALYZE: &str = "analyze";

pub fn job(id: i64) -> String {
  format!("jobs/{id}")
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Analyze {
  pub address: Address,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analyzed {
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub job_id: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl Analyzed {
  /// The indexer reports storage failures with a success status and
  /// `"status": "error"` in the body.
  pub fn is_error(&self) -> bool {
    self.status.as_deref() == Some("error")
  }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
  #[serde(default)]
  pub message: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
  pub status: String,
  pub updated_at: NaiveDateTime,
}
