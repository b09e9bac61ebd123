pub(crate) use {super::*, std::collections::VecDeque};

macro_rules! assert_matches {
  ($expression:expr, $( $pattern:pat_param )|+ $( if $guard:expr )? $(,)?) => {
    match $expression {
      $( $pattern )|+ $( if $guard )? => {}
      left => panic!(
        "assertion failed: (left ~= right)\n  left: `{:?}`\n right: `{}`",
        left,
        stringify!($($pattern)|+ $(if $guard)?)
      ),
    }
  }
}

pub(crate) const INDEXED: &str = "CKALuhodLSb7F7YtTKNYcBUtFReHL2biMMihSJhMKZm6";
pub(crate) const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";
pub(crate) const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
pub(crate) const WRAPPED_SOL: &str = "So11111111111111111111111111111111111111112";

pub(crate) fn success(message: &str) -> Status {
  Status {
    kind: StatusKind::Success,
    message: message.into(),
  }
}

pub(crate) fn error(message: &str) -> Status {
  Status {
    kind: StatusKind::Error,
    message: message.into(),
  }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
  Hide,
  Loading(bool),
  Show(Status),
}

#[derive(Default)]
pub(crate) struct Recorder(Mutex<Vec<Event>>);

impl Recorder {
  pub(crate) fn events(&self) -> Vec<Event> {
    self.0.lock().unwrap().clone()
  }
}

impl Sink for Recorder {
  fn show(&self, status: &Status) {
    self.0.lock().unwrap().push(Event::Show(status.clone()));
  }

  fn hide(&self) {
    self.0.lock().unwrap().push(Event::Hide);
  }

  fn loading(&self, loading: bool) {
    self.0.lock().unwrap().push(Event::Loading(loading));
  }
}

/// Replays scripted replies in order and records every request. Once the
/// script runs out, requests fail as if the connection was refused.
#[derive(Default)]
pub(crate) struct MockTransport {
  replies: Mutex<VecDeque<Result<Reply>>>,
  requests: Mutex<Vec<(String, Option<serde_json::Value>)>>,
}

impl MockTransport {
  pub(crate) fn reply(self, status: StatusCode, body: &str) -> Self {
    self.replies.lock().unwrap().push_back(Ok(Reply {
      status,
      body: body.into(),
    }));
    self
  }

  pub(crate) fn fail(self, message: &'static str) -> Self {
    self.replies.lock().unwrap().push_back(Err(anyhow!(message)));
    self
  }

  pub(crate) fn requests(&self) -> Vec<(String, Option<serde_json::Value>)> {
    self.requests.lock().unwrap().clone()
  }

  fn next(&self, path: &str, body: Option<&serde_json::Value>) -> Result<Reply> {
    self
      .requests
      .lock()
      .unwrap()
      .push((path.into(), body.cloned()));

    self
      .replies
      .lock()
      .unwrap()
      .pop_front()
      .unwrap_or_else(|| Err(anyhow!("connection refused")))
  }
}

impl Transport for MockTransport {
  fn get(&self, path: &str) -> Result<Reply> {
    self.next(path, None)
  }

  fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Reply> {
    self.next(path, Some(body))
  }
}
