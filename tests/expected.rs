use super::*;

#[derive(Debug)]
pub(crate) enum Expected {
  Exact(String),
  Pattern(Regex),
  Suffix(String),
}

impl Expected {
  /// Whole-output match. `.` also matches newlines, so `.*` can stand in for
  /// any number of lines, such as log output.
  pub(crate) fn pattern(pattern: &str) -> Self {
    Self::Pattern(
      RegexBuilder::new(&format!("^{pattern}$"))
        .dot_matches_new_line(true)
        .build()
        .unwrap(),
    )
  }

  #[track_caller]
  pub(crate) fn assert_match(&self, output: &str) {
    match self {
      Self::Exact(expected) => pretty_assert_eq!(output, expected),
      Self::Pattern(regex) => assert!(
        regex.is_match(output),
        "output did not match `{regex}`:\n{output}",
      ),
      Self::Suffix(suffix) => assert!(
        output.ends_with(suffix.as_str()),
        "output did not end with {suffix:?}:\n{output}",
      ),
    }
  }
}
