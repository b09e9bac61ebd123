use super::*;

#[derive(Debug, Clone)]
pub struct Settings {
  pub(crate) hide_after: Duration,
  pub(crate) server_url: Url,
}

impl Settings {
  pub fn load(options: Options) -> SnafuResult<Self> {
    let config = match (&options.config, &options.config_dir) {
      (Some(path), _) => Self::read_config(path.clone())?,
      (None, Some(dir)) if dir.join("intake.yaml").exists() => {
        Self::read_config(dir.join("intake.yaml"))?
      }
      _ => default(),
    };

    Self::new(options, config)
  }

  fn read_config(path: PathBuf) -> SnafuResult<Config> {
    let file = File::open(&path).snafu_context(error::ConfigOpen { path: path.clone() })?;
    serde_yaml::from_reader(file).snafu_context(error::ConfigParse { path })
  }

  fn new(options: Options, config: Config) -> SnafuResult<Self> {
    let server_url = Self::setting(
      options.server_url.as_ref().map(Url::as_str),
      Some("SERVER_URL"),
      config.server_url.as_deref(),
      Some(DEFAULT_SERVER_URL),
    )?
    .unwrap_or_else(|| DEFAULT_SERVER_URL.into());

    let mut server_url = Url::parse(&server_url)
      .with_context(|| format!("invalid server URL `{server_url}`"))?;

    if !matches!(server_url.scheme(), "http" | "https") {
      return Err(anyhow!("server URL `{server_url}` must use http or https").into());
    }

    // request paths are joined relative to the base
    if !server_url.path().ends_with('/') {
      let path = format!("{}/", server_url.path());
      server_url.set_path(&path);
    }

    let hide_after = match options.hide_after {
      Some(hide_after) => hide_after,
      None => match Self::setting(None, Some("HIDE_AFTER"), config.hide_after.as_deref(), None)? {
        Some(value) => humantime::parse_duration(&value)
          .with_context(|| format!("invalid hide delay `{value}`"))?,
        None => DEFAULT_HIDE_AFTER,
      },
    };

    Ok(Self {
      hide_after,
      server_url,
    })
  }

  pub fn submitter(&self) -> Result<Submitter<HttpTransport, Terminal>> {
    Ok(Submitter::new(
      HttpTransport::new(self.server_url.clone())?,
      Presenter::new(Arc::new(Terminal::new()), self.hide_after),
    ))
  }

  pub fn hide_after(&self) -> Duration {
    self.hide_after
  }

  pub fn server_url(&self) -> &Url {
    &self.server_url
  }

  fn setting(
    arg_value: Option<&str>,
    env_key: Option<&str>,
    config_value: Option<&str>,
    default_value: Option<&str>,
  ) -> SnafuResult<Option<String>> {
    if let Some(arg_value) = arg_value {
      return Ok(Some(arg_value.into()));
    }

    if let Some(env_key) = env_key {
      let variable = format!("INTAKE_{env_key}");
      match env::var(&variable) {
        Ok(env_value) => return Ok(Some(env_value)),
        Err(env::VarError::NotUnicode(value)) => {
          return error::EnvVarUnicode { value, variable }.fail()
        }
        Err(env::VarError::NotPresent) => {}
      }
    }

    Ok(config_value.or(default_value).map(str::to_string))
  }
}
