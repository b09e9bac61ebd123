use super::*;

#[derive(Debug, Parser)]
pub struct Job {
  #[arg(help = "Show status of job <ID>.")]
  id: i64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub id: i64,
  pub status: String,
  pub updated_at: NaiveDateTime,
}

impl Job {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let job = settings.submitter()?.job(self.id)?;

    Ok(Some(Box::new(Output {
      id: self.id,
      status: job.status,
      updated_at: job.updated_at,
    })))
  }
}
