use super::*;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const EXCLUDED: [char; 4] = ['0', 'O', 'I', 'l'];
const MIN_LENGTH: usize = 32;
const MAX_LENGTH: usize = 44;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum AddressError {
  #[snafu(display("Please enter a valid address"))]
  Empty,
  #[snafu(display("Input does not look like an address"))]
  NotAnAddress,
  #[snafu(display("This looks like an EVM address, please enter a Solana address"))]
  WrongChain,
  #[snafu(display(
    "Invalid Solana address length: expected 32 to 44 characters, got {length}"
  ))]
  Length { length: usize },
  #[snafu(display("Invalid Solana address: `{character}` is not used in base58 addresses"))]
  ForbiddenCharacter { character: char },
  #[snafu(display("Invalid Solana address format: unexpected character `{character}`"))]
  InvalidCharacter { character: char },
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
  #[display("base58")]
  Base58,
  #[display("evm")]
  Evm,
  #[display("unknown")]
  Unknown,
}

impl Shape {
  pub fn of(s: &str) -> Self {
    if re::EVM_ADDRESS.is_match(s) {
      Self::Evm
    } else if re::BASE58_ADDRESS.is_match(s) {
      Self::Base58
    } else {
      Self::Unknown
    }
  }
}

/// A Solana account address that passed local format checks. Nothing here
/// proves the address decodes to a valid public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct Address(String);

impl Address {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn redacted(&self) -> String {
    mask(&self.0, 4)
  }

  fn check(s: &str) -> Result<(), AddressError> {
    if s.starts_with("0x") || s.starts_with("0X") {
      return WrongChain.fail();
    }

    let length = s.chars().count();

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
      return Length { length }.fail();
    }

    if let Some(character) = s.chars().find(|c| EXCLUDED.contains(c)) {
      return ForbiddenCharacter { character }.fail();
    }

    if let Some(character) = s.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
      return InvalidCharacter { character }.fail();
    }

    Ok(())
  }
}

impl FromStr for Address {
  type Err = AddressError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();

    if s.is_empty() {
      return Empty.fail();
    }

    let shape = Shape::of(s);

    // inputs that fail the shape check are reported by the first rule they break
    Self::check(s)?;

    match shape {
      Shape::Base58 => Ok(Self(s.into())),
      Shape::Evm | Shape::Unknown => NotAnAddress.fail(),
    }
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Shortens `s` to its first and last `keep` characters. Strings that would
/// not get shorter are returned unchanged.
pub fn mask(s: &str, keep: usize) -> String {
  let chars = s.chars().collect::<Vec<char>>();

  if chars.len() <= keep * 2 + 3 {
    return s.into();
  }

  format!(
    "{}...{}",
    chars[..keep].iter().collect::<String>(),
    chars[chars.len() - keep..].iter().collect::<String>(),
  )
}
