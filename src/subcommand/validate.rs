use super::*;

#[derive(Debug, Parser)]
pub struct Validate {
  #[arg(help = "Check <ADDRESS>.")]
  address: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub address: Address,
  pub redacted: String,
  pub shape: Shape,
}

impl Validate {
  pub(crate) fn run(self) -> SubcommandResult {
    Ok(Some(Box::new(self.check()?)))
  }

  fn check(&self) -> Result<Output> {
    let address = self
      .address
      .parse::<Address>()
      .context("address rejected")?;

    Ok(Output {
      redacted: address.redacted(),
      shape: Shape::of(address.as_str()),
      address,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valid() {
    assert_eq!(
      serde_json::to_value(
        Validate {
          address: format!("{INDEXED}\n"),
        }
        .check()
        .unwrap()
      )
      .unwrap(),
      serde_json::json!({
        "address": INDEXED,
        "redacted": "CKAL...KZm6",
        "shape": "base58",
      }),
    );
  }

  #[test]
  fn invalid() {
    let err = Validate {
      address: "0x52908400098527886E0F7030069857D2E4169EE7".into(),
    }
    .check()
    .unwrap_err();

    assert_eq!(err.to_string(), "address rejected");
    assert_eq!(
      err.root_cause().to_string(),
      "This looks like an EVM address, please enter a Solana address"
    );
  }
}
