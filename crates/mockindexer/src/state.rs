use super::*;

#[derive(Debug)]
pub struct State {
  pub addresses: BTreeMap<String, i64>,
  pub jobs: BTreeMap<i64, Job>,
  pub next_id: i64,
  pub replies: VecDeque<(StatusCode, String)>,
  pub requests: Vec<Request>,
}

impl State {
  pub(crate) fn new(replies: VecDeque<(StatusCode, String)>) -> Self {
    Self {
      addresses: BTreeMap::new(),
      jobs: BTreeMap::new(),
      next_id: 1,
      replies,
      requests: Vec::new(),
    }
  }

  /// Queues a job for `address` unless one already exists, like the indexer
  /// does with its `WHERE NOT EXISTS` insert.
  pub(crate) fn queue(&mut self, address: &str) -> Option<i64> {
    if self.addresses.contains_key(address) {
      return None;
    }

    let id = self.next_id;
    self.next_id += 1;

    self.addresses.insert(address.into(), id);
    self.jobs.insert(
      id,
      Job {
        address: address.into(),
        status: "pending".into(),
        updated_at: Utc::now().naive_utc(),
      },
    );

    Some(id)
  }
}
