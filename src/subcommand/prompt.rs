use {super::*, std::io::IsTerminal};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub accepted: u64,
  pub failed: u64,
  pub rejected: u64,
}

pub(crate) fn run(settings: Settings) -> SubcommandResult {
  let submitter = settings.submitter()?;

  Ok(Some(Box::new(read_lines(
    &submitter,
    io::stdin().lock(),
    io::stdin().is_terminal(),
  )?)))
}

fn read_lines<T: Transport, S: Sink>(
  submitter: &Submitter<T, S>,
  reader: impl BufRead,
  interactive: bool,
) -> Result<Output> {
  let field = TextField::default();

  let mut output = Output::default();

  if interactive {
    eprint!("address> ");
  }

  for line in reader.lines() {
    field.set(line.context("failed to read address from stdin")?);

    match submitter.submit(&field) {
      Outcome::Accepted { .. } => output.accepted += 1,
      Outcome::Busy => {}
      Outcome::Failed(_) => output.failed += 1,
      Outcome::Rejected(_) => output.rejected += 1,
    }

    if interactive {
      eprint!("address> ");
    }
  }

  Ok(output)
}
