use {super::*, colored::Colorize, std::io::IsTerminal};

const IDLE: &str = "Analyze";
const PROCESSING: &str = "Processing...";

/// Writes statuses to stderr. A printed line can't be taken back, so hiding
/// only forgets the current status.
pub struct Terminal {
  control: Mutex<&'static str>,
  visible: Mutex<Option<Status>>,
}

impl Terminal {
  pub fn new() -> Self {
    if !io::stderr().is_terminal() {
      colored::control::set_override(false);
    }

    Self {
      control: Mutex::new(IDLE),
      visible: Mutex::new(None),
    }
  }

  /// Label of the submit control, `Processing...` while a request is out.
  pub fn control(&self) -> &'static str {
    *self.control.lock().unwrap()
  }

  pub fn visible(&self) -> Option<Status> {
    self.visible.lock().unwrap().clone()
  }
}

impl Default for Terminal {
  fn default() -> Self {
    Self::new()
  }
}

impl Sink for Terminal {
  fn show(&self, status: &Status) {
    match status.kind {
      StatusKind::Error => eprintln!("{}", status.message.red()),
      StatusKind::Success => eprintln!("{}", status.message.green()),
    }

    log::debug!("Showing `{}` as `{}`", status.message, status.class());

    *self.visible.lock().unwrap() = Some(status.clone());
  }

  fn hide(&self) {
    if let Some(status) = self.visible.lock().unwrap().take() {
      log::debug!("Hid {} status `{}`", status.kind, status.message);
    }
  }

  fn loading(&self, loading: bool) {
    let label = if loading { PROCESSING } else { IDLE };

    if loading {
      eprintln!("{}", label.dimmed());
    } else {
      log::debug!("Control back to `{label}`");
    }

    *self.control.lock().unwrap() = label;
  }
}
