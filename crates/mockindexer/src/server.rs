use super::*;

#[derive(Deserialize)]
struct Analyze {
  address: String,
}

#[derive(Serialize)]
struct JobStatus {
  status: String,
  updated_at: NaiveDateTime,
}

#[derive(Clone)]
pub(crate) struct Server {
  state: Arc<Mutex<State>>,
}

impl Server {
  pub(crate) fn new(state: Arc<Mutex<State>>) -> Self {
    Self { state }
  }

  fn state(&self) -> MutexGuard<State> {
    self.state.lock().unwrap()
  }

  pub(crate) async fn serve(self, listener: TcpListener, signal: oneshot::Receiver<()>) {
    let router = Router::new()
      .route("/analyze", post(Self::analyze))
      .route("/jobs/{id}", get(Self::job))
      .with_state(self);

    axum::serve(tokio::net::TcpListener::from_std(listener).unwrap(), router)
      .with_graceful_shutdown(async {
        signal.await.ok();
      })
      .await
      .unwrap();
  }

  async fn analyze(Extract(server): Extract<Self>, headers: HeaderMap, body: String) -> Response {
    let mut state = server.state();

    state.requests.push(Request {
      body: serde_json::from_str(&body).unwrap_or(Value::String(body.clone())),
      content_type: headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string),
    });

    if let Some((status, body)) = state.replies.pop_front() {
      return (status, [(header::CONTENT_TYPE, "application/json")], body).into_response();
    }

    let Ok(Analyze { address }) = serde_json::from_str::<Analyze>(&body) else {
      return (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "message": "missing address" })),
      )
        .into_response();
    };

    match state.queue(&address) {
      Some(id) => Json(json!({ "status": "ok", "job_id": id })).into_response(),
      None => Json(json!({ "status": "ok", "message": "address already exists" })).into_response(),
    }
  }

  async fn job(Extract(server): Extract<Self>, Path(id): Path<i64>) -> Response {
    match server.state().jobs.get(&id) {
      Some(job) => Json(JobStatus {
        status: job.status.clone(),
        updated_at: job.updated_at,
      })
      .into_response(),
      None => (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Job not found" })),
      )
        .into_response(),
    }
  }
}
