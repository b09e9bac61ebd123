use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
  #[display("error")]
  Error,
  #[display("success")]
  Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
  pub kind: StatusKind,
  pub message: String,
}

impl Status {
  pub fn class(&self) -> String {
    format!("status-message {}", self.kind)
  }
}

/// Where status messages and the loading state end up.
pub trait Sink: Send + Sync + 'static {
  fn show(&self, status: &Status);

  fn hide(&self);

  fn loading(&self, loading: bool);
}

/// Shows one status message at a time. Success messages hide themselves after
/// `hide_after`; any later message cancels a pending hide.
pub struct Presenter<S> {
  generation: Arc<Mutex<u64>>,
  hide_after: Duration,
  sink: Arc<S>,
}

impl<S: Sink> Presenter<S> {
  pub fn new(sink: Arc<S>, hide_after: Duration) -> Self {
    Self {
      generation: Arc::new(Mutex::new(0)),
      hide_after,
      sink,
    }
  }

  pub fn show(&self, message: impl Into<String>, kind: StatusKind) {
    let status = Status {
      kind,
      message: message.into(),
    };

    let generation = {
      let mut generation = self.generation.lock().unwrap();
      *generation += 1;
      self.sink.show(&status);
      *generation
    };

    if kind == StatusKind::Success {
      let current = self.generation.clone();
      let hide_after = self.hide_after;
      let sink = self.sink.clone();

      thread::spawn(move || {
        thread::sleep(hide_after);

        let current = current.lock().unwrap();

        if *current == generation {
          sink.hide();
        }
      });
    }
  }

  pub fn loading(&self, loading: bool) {
    self.sink.loading(loading);
  }

  pub fn sink(&self) -> &S {
    &self.sink
  }
}
