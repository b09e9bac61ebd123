use super::*;

#[derive(Deserialize, Default, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) hide_after: Option<String>,
  pub(crate) server_url: Option<String>,
}
