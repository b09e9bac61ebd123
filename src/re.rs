use super::*;

fn re(s: &'static str) -> Regex {
  Regex::new(&format!("^{s}$")).unwrap()
}

lazy_static! {
  pub(crate) static ref BASE58_ADDRESS: Regex = re(r"[1-9A-HJ-NP-Za-km-z]{32,44}");
  pub(crate) static ref EVM_ADDRESS: Regex = re(r"0x[[:xdigit:]]{40}");
}
