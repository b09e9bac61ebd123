#![allow(clippy::result_large_err, clippy::type_complexity)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    config::Config,
    error::{ResultExt, SnafuError},
    options::Options,
    subcommand::{OutputFormat, Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, bail, ensure, Context, Error},
  chrono::NaiveDateTime,
  clap::Parser,
  lazy_static::lazy_static,
  regex::Regex,
  reqwest::{header::HeaderMap, StatusCode, Url},
  serde::{Deserialize, Serialize},
  serde_with::{DeserializeFromStr, SerializeDisplay},
  snafu::{Backtrace, ErrorCompat, Snafu},
  std::{
    backtrace::BacktraceStatus,
    env,
    ffi::OsString,
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, BufRead},
    path::PathBuf,
    process,
    str::FromStr,
    sync::{
      atomic::{self, AtomicBool},
      Arc, Mutex,
    },
    thread,
    time::Duration,
  },
};

pub use self::{
  address::{mask, Address, AddressError, Shape},
  settings::Settings,
  status::{Presenter, Sink, Status, StatusKind},
  submitter::{Input, Outcome, SubmitError, Submitter, TextField},
  terminal::Terminal,
  transport::{HttpTransport, Reply, Transport},
};

#[cfg(test)]
#[macro_use]
mod test;

#[cfg(test)]
use self::test::*;

mod address;
pub mod api;
pub mod arguments;
mod config;
mod error;
pub mod options;
mod re;
pub mod settings;
mod status;
pub mod subcommand;
mod submitter;
mod terminal;
mod transport;

type Result<T = (), E = Error> = std::result::Result<T, E>;
type SnafuResult<T = (), E = SnafuError> = std::result::Result<T, E>;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080/";
const DEFAULT_HIDE_AFTER: Duration = Duration::from_secs(5);

fn default<T: Default>() -> T {
  Default::default()
}

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let format = args.options.format;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");

      if let SnafuError::Anyhow { err } = err {
        for (i, err) in err.chain().skip(1).enumerate() {
          if i == 0 {
            eprintln!();
            eprintln!("because:");
          }

          eprintln!("- {err}");
        }

        if env::var_os("RUST_BACKTRACE")
          .map(|val| val == "1")
          .unwrap_or_default()
        {
          eprintln!("{}", err.backtrace());
        }
      } else {
        for (i, err) in err.iter_chain().skip(1).enumerate() {
          if i == 0 {
            eprintln!();
            eprintln!("because:");
          }

          eprintln!("- {err}");
        }

        if let Some(backtrace) = err.backtrace() {
          if backtrace.status() == BacktraceStatus::Captured {
            eprintln!("backtrace:");
            eprintln!("{backtrace}");
          }
        }
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print(format.unwrap_or_default());
      }
    }
  }
}
