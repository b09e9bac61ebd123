use super::*;

const DEFAULT_REJECTION: &str = "Failed to start indexing";

/// The field an address is read from.
pub trait Input {
  fn value(&self) -> String;

  fn clear(&self);
}

#[derive(Debug, Default)]
pub struct TextField(Mutex<String>);

impl TextField {
  pub fn new(value: impl Into<String>) -> Self {
    Self(Mutex::new(value.into()))
  }

  pub fn set(&self, value: impl Into<String>) {
    *self.0.lock().unwrap() = value.into();
  }
}

impl Input for TextField {
  fn value(&self) -> String {
    self.0.lock().unwrap().clone()
  }

  fn clear(&self) {
    self.0.lock().unwrap().clear();
  }
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum SubmitError {
  #[snafu(display("An error occurred. Please try again."))]
  Malformed { source: serde_json::Error },
  #[snafu(display("{message}"))]
  Rejected { message: String, status: StatusCode },
  #[snafu(display("An error occurred. Please try again."))]
  Network {
    #[snafu(source(from(anyhow::Error, Into::into)))]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
}

#[derive(Debug)]
pub enum Outcome {
  Accepted {
    address: Address,
    response: api::Analyzed,
  },
  Busy,
  Failed(SubmitError),
  Rejected(AddressError),
}

/// Releases the in-flight flag, and the loading state if it was switched on,
/// however the submission ends.
struct InFlight<'a, S: Sink> {
  flag: &'a AtomicBool,
  loading: bool,
  presenter: &'a Presenter<S>,
}

impl<S: Sink> Drop for InFlight<'_, S> {
  fn drop(&mut self) {
    if self.loading {
      self.presenter.loading(false);
    }

    self.flag.store(false, atomic::Ordering::Release);
  }
}

pub struct Submitter<T, S> {
  in_flight: AtomicBool,
  presenter: Presenter<S>,
  transport: T,
}

impl<T: Transport, S: Sink> Submitter<T, S> {
  pub fn new(transport: T, presenter: Presenter<S>) -> Self {
    Self {
      in_flight: AtomicBool::new(false),
      presenter,
      transport,
    }
  }

  pub fn presenter(&self) -> &Presenter<S> {
    &self.presenter
  }

  pub fn submit(&self, input: &dyn Input) -> Outcome {
    if self
      .in_flight
      .compare_exchange(
        false,
        true,
        atomic::Ordering::AcqRel,
        atomic::Ordering::Acquire,
      )
      .is_err()
    {
      log::debug!("Submission already in flight, ignoring");
      return Outcome::Busy;
    }

    let mut guard = InFlight {
      flag: &self.in_flight,
      loading: false,
      presenter: &self.presenter,
    };

    let address = match input.value().parse::<Address>() {
      Ok(address) => address,
      Err(err) => {
        log::info!("Rejected input: {err}");
        self.presenter.show(err.to_string(), StatusKind::Error);
        return Outcome::Rejected(err);
      }
    };

    guard.loading = true;
    self.presenter.loading(true);

    match self.analyze(&address) {
      Ok(response) => {
        log::info!(
          "Indexing started for {}: {}",
          mask(address.as_str(), 5),
          serde_json::to_string(&response).unwrap_or_default(),
        );

        input.clear();

        self.presenter.show(
          format!(
            "Successfully started indexing for: {}",
            address.redacted()
          ),
          StatusKind::Success,
        );

        Outcome::Accepted { address, response }
      }
      Err(err) => {
        self.presenter.show(err.to_string(), StatusKind::Error);
        Outcome::Failed(err)
      }
    }
  }

  fn analyze(&self, address: &Address) -> Result<api::Analyzed, SubmitError> {
    let body = serde_json::to_value(api::Analyze {
      address: address.clone(),
    })
    .snafu_context(Malformed)?;

    let reply = self
      .transport
      .post_json(api::ANALYZE, &body)
      .inspect_err(|err| {
        log::warn!(
          "Submitting {} failed: {err:#}",
          mask(address.as_str(), 5)
        )
      })
      .snafu_context(Network)?;

    if !reply.status.is_success() {
      log::warn!(
        "Indexer rejected {} with {}: {}",
        mask(address.as_str(), 5),
        reply.status,
        reply.body,
      );

      let message = serde_json::from_str::<api::ErrorBody>(&reply.body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| DEFAULT_REJECTION.into());

      return Rejected {
        message,
        status: reply.status,
      }
      .fail();
    }

    let response = serde_json::from_str::<api::Analyzed>(&reply.body)
      .inspect_err(|err| log::warn!("Malformed indexer response `{}`: {err}", reply.body))
      .snafu_context(Malformed)?;

    if response.is_error() {
      log::warn!(
        "Indexer failed to queue {}: {}",
        mask(address.as_str(), 5),
        reply.body,
      );

      return Rejected {
        message: response
          .message
          .unwrap_or_else(|| DEFAULT_REJECTION.into()),
        status: reply.status,
      }
      .fail();
    }

    if let Some(message) = &response.message {
      log::info!("Indexer says: {message}");
    }

    Ok(response)
  }

  pub fn job(&self, id: i64) -> Result<api::JobStatus> {
    let reply = self.transport.get(&api::job(id))?;

    if reply.status == StatusCode::NOT_FOUND {
      bail!("job `{id}` not found");
    }

    ensure!(
      reply.status.is_success(),
      "failed to fetch job `{id}`: {} {}",
      reply.status,
      reply.body,
    );

    serde_json::from_str(&reply.body).with_context(|| format!("failed to parse status of job `{id}`"))
  }
}
