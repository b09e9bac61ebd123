use super::*;

pub mod job;
pub mod prompt;
pub mod settings;
pub mod submit;
pub mod validate;

#[derive(Debug, Parser)]
pub enum Subcommand {
  #[command(about = "Show status of an indexing job")]
  Job(job::Job),
  #[command(about = "Submit addresses read line by line from stdin")]
  Prompt,
  #[command(about = "Display settings")]
  Settings,
  #[command(about = "Submit an address for indexing")]
  Submit(submit::Submit),
  #[command(about = "Check an address without submitting it")]
  Validate(validate::Validate),
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Job(job) => job.run(settings),
      Self::Prompt => prompt::run(settings),
      Self::Settings => settings::run(settings),
      Self::Submit(submit) => submit.run(settings),
      Self::Validate(validate) => validate.run(),
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
  #[default]
  Json,
  Minify,
  Yaml,
}

pub trait Output: Send {
  fn print(&self, format: OutputFormat);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print(&self, format: OutputFormat) {
    match format {
      OutputFormat::Json => {
        serde_json::to_writer_pretty(io::stdout(), self).ok();
        println!();
      }
      OutputFormat::Minify => {
        serde_json::to_writer(io::stdout(), self).ok();
        println!();
      }
      OutputFormat::Yaml => {
        serde_yaml::to_writer(io::stdout(), self).ok();
      }
    }
  }
}

pub(crate) type SubcommandResult = Result<Option<Box<dyn Output>>>;
