use super::*;

#[derive(Debug, Parser)]
pub struct Submit {
  #[arg(help = "Submit <ADDRESS> for indexing.")]
  address: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub address: Address,
  pub job_id: Option<i64>,
  pub message: Option<String>,
}

impl Submit {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let submitter = settings.submitter()?;

    match submitter.submit(&TextField::new(self.address)) {
      Outcome::Accepted { address, response } => Ok(Some(Box::new(Output {
        address,
        job_id: response.job_id,
        message: response.message,
      }))),
      Outcome::Busy => bail!("a submission is already in flight"),
      // the cause is in the log, only the status text reaches the user
      Outcome::Failed(err) => Err(anyhow!("{err}").context("submission failed")),
      Outcome::Rejected(err) => Err(Error::new(err).context("address rejected")),
    }
  }
}
