use super::*;

#[derive(Clone, Default, Debug, Parser)]
pub struct Options {
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, help = "Load configuration from `intake.yaml` in <CONFIG_DIR>.")]
  pub(crate) config_dir: Option<PathBuf>,
  #[arg(long, short, help = "Specify output format. [default: json]")]
  pub(crate) format: Option<OutputFormat>,
  #[arg(
    long,
    value_parser = humantime::parse_duration,
    help = "Hide success messages after <HIDE_AFTER>. [default: 5s]"
  )]
  pub(crate) hide_after: Option<Duration>,
  #[arg(
    long,
    help = "Submit addresses to the indexer at <SERVER_URL>. [default: http://127.0.0.1:8080/]"
  )]
  pub(crate) server_url: Option<Url>,
}
