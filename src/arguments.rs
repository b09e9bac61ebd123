use super::*;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Arguments {
  #[command(flatten)]
  pub options: Options,
  #[command(subcommand)]
  pub subcommand: Subcommand,
}

impl Arguments {
  pub fn run(self) -> SnafuResult<Option<Box<dyn subcommand::Output>>> {
    let settings = Settings::load(self.options)?;
    Ok(self.subcommand.run(settings)?)
  }
}
