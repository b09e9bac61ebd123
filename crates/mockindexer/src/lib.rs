use {
  axum::{
    extract::{Path, State as Extract},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
  },
  chrono::{NaiveDateTime, Utc},
  serde::{Deserialize, Serialize},
  serde_json::{json, Value},
  server::Server,
  state::State,
  std::{
    collections::{BTreeMap, VecDeque},
    net::TcpListener,
    sync::{Arc, Mutex, MutexGuard},
    thread,
  },
  tokio::sync::oneshot,
};

mod server;
mod state;

pub fn builder() -> Builder {
  Builder {
    replies: VecDeque::new(),
  }
}

pub fn spawn() -> Handle {
  builder().build()
}

pub struct Builder {
  replies: VecDeque<(StatusCode, String)>,
}

impl Builder {
  /// Answer the next `/analyze` request with `status` and `body` instead of
  /// queuing a job. Replies are used in the order they were added.
  pub fn reply(mut self, status: u16, body: impl Into<String>) -> Self {
    self.replies.push_back((
      StatusCode::from_u16(status).unwrap(),
      body.into(),
    ));
    self
  }

  pub fn build(self) -> Handle {
    let state = Arc::new(Mutex::new(State::new(self.replies)));

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let port = listener.local_addr().unwrap().port();

    let (shutdown, signal) = oneshot::channel::<()>();

    {
      let state = state.clone();
      thread::spawn(move || {
        tokio::runtime::Builder::new_multi_thread()
          .worker_threads(1)
          .enable_all()
          .build()
          .unwrap()
          .block_on(Server::new(state).serve(listener, signal))
      });
    }

    Handle {
      port,
      shutdown: Some(shutdown),
      state,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
  pub body: Value,
  pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
  pub address: String,
  pub status: String,
  pub updated_at: NaiveDateTime,
}

pub struct Handle {
  port: u16,
  shutdown: Option<oneshot::Sender<()>>,
  state: Arc<Mutex<State>>,
}

impl Handle {
  pub fn url(&self) -> String {
    format!("http://127.0.0.1:{}/", self.port)
  }

  fn state(&self) -> MutexGuard<State> {
    self.state.lock().unwrap()
  }

  /// Bodies of every `/analyze` request received so far.
  pub fn requests(&self) -> Vec<Request> {
    self.state().requests.clone()
  }

  pub fn jobs(&self) -> BTreeMap<i64, Job> {
    self.state().jobs.clone()
  }

  pub fn set_job_status(&self, id: i64, status: &str) {
    let mut state = self.state();
    let job = state.jobs.get_mut(&id).unwrap();
    job.status = status.into();
    job.updated_at = Utc::now().naive_utc();
  }
}

impl Drop for Handle {
  fn drop(&mut self) {
    if let Some(shutdown) = self.shutdown.take() {
      shutdown.send(()).ok();
    }
  }
}
