use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub hide_after: String,
  pub server_url: String,
}

pub(crate) fn run(settings: Settings) -> SubcommandResult {
  Ok(Some(Box::new(Output {
    hide_after: humantime::format_duration(settings.hide_after()).to_string(),
    server_url: settings.server_url().to_string(),
  })))
}
