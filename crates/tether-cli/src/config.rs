use std::collections::HashMap;
use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow,
  bail
};
use tether_core::LinkSettings;
use tracing::{
  debug,
  info,
  trace,
  warn
};

const DEFAULTS: [(&str, &str); 5] = [
  ("data.location", "~/.tether"),
  ("color", "on"),
  ("links.validate", "on"),
  ("links.icons", "on"),
  ("links.max", "10")
];

/// Settings read from the rc file,
/// with `--rc` overrides on top.
#[derive(Debug, Clone)]
pub struct Config {
  values:      HashMap<String, String>,
  pub sources: Vec<PathBuf>
}

/// One meaningful line of an rc
/// file.
#[derive(Debug, PartialEq, Eq)]
enum RcLine<'a> {
  Include(&'a str),
  Setting {
    key:   &'a str,
    value: &'a str
  }
}

impl Config {
  pub fn defaults() -> Self {
    Config {
      values:  DEFAULTS
        .iter()
        .map(|(key, value)| {
          (
            (*key).to_string(),
            (*value).to_string()
          )
        })
        .collect(),
      sources: Vec::new()
    }
  }

  #[tracing::instrument]
  pub fn load(
    rc_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Self::defaults();

    match rc_path(rc_override)? {
      | Some(path) => {
        info!(tetherrc = %path.display(), "reading tetherrc");
        cfg.read_file(&path, &mut Vec::new())?;
      }
      | None => {
        debug!(
          "no tetherrc, built-in \
           settings only"
        );
      }
    }

    Ok(cfg)
  }

  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (key, value) in overrides {
      let key = match key
        .strip_prefix("rc.")
      {
        | Some(rest) => rest.to_string(),
        | None => key
      };
      debug!(%key, %value, "rc override");
      self.values.insert(key, value);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<&str> {
    self
      .values
      .get(key)
      .map(String::as_str)
  }

  /// Reads an on/off setting.
  /// Anything unrecognised is an
  /// error rather than `off`.
  pub fn switch(
    &self,
    key: &str
  ) -> anyhow::Result<Option<bool>> {
    self
      .get(key)
      .map(|raw| parse_switch(key, raw))
      .transpose()
  }

  pub fn link_settings(
    &self
  ) -> anyhow::Result<LinkSettings> {
    let defaults =
      LinkSettings::default();

    let max_links_per_task = self
      .get("links.max")
      .map(|raw| {
        raw.trim().parse::<usize>().with_context(
          || {
            format!(
              "links.max must be a \
               count, got `{raw}`"
            )
          }
        )
      })
      .transpose()?
      .unwrap_or(
        defaults.max_links_per_task
      );

    Ok(LinkSettings {
      validate_urls: self
        .switch("links.validate")?
        .unwrap_or(
          defaults.validate_urls
        ),
      show_link_icons: self
        .switch("links.icons")?
        .unwrap_or(
          defaults.show_link_icons
        ),
      max_links_per_task
    })
  }

  /// `chain` holds the canonical paths
  /// of the files currently being read,
  /// outermost first.
  fn read_file(
    &mut self,
    path: &Path,
    chain: &mut Vec<PathBuf>
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    let canonical =
      fs::canonicalize(&path)
        .with_context(|| {
          format!(
            "failed to resolve {}",
            path.display()
          )
        })?;
    if chain.contains(&canonical) {
      bail!(
        "include cycle: {} is already \
         being read",
        path.display()
      );
    }
    chain.push(canonical);
    self.sources.push(path.clone());

    let base_dir = path
      .parent()
      .unwrap_or(Path::new("."))
      .to_path_buf();

    for (idx, raw) in
      text.lines().enumerate()
    {
      let parsed = parse_line(raw)
        .with_context(|| {
          format!(
            "{}:{}",
            path.display(),
            idx + 1
          )
        })?;

      match parsed {
        | None => {}
        | Some(RcLine::Include(
          target
        )) => {
          let target = expand_tilde(
            Path::new(target)
          );
          let target = if target
            .is_absolute()
          {
            target
          } else {
            base_dir.join(target)
          };

          if target.is_file() {
            self
              .read_file(&target, chain)?;
          } else {
            warn!(include = %target.display(), "included rc file missing, skipped");
          }
        }
        | Some(RcLine::Setting {
          key,
          value
        }) => {
          trace!(key, value, "rc setting");
          self.values.insert(
            key.to_string(),
            value.to_string()
          );
        }
      }
    }

    chain.pop();
    Ok(())
  }
}

fn parse_line(
  raw: &str
) -> anyhow::Result<Option<RcLine<'_>>>
{
  let line = raw
    .split_once('#')
    .map_or(raw, |(before, _)| before)
    .trim();

  if line.is_empty() {
    return Ok(None);
  }

  if let Some(target) =
    line.strip_prefix("include ")
  {
    return Ok(Some(RcLine::Include(
      target.trim()
    )));
  }

  let (key, value) = line
    .split_once('=')
    .ok_or_else(|| {
      anyhow!(
        "expected `key = value`, \
         got `{line}`"
      )
    })?;

  Ok(Some(RcLine::Setting {
    key:   key.trim(),
    value: value.trim()
  }))
}

fn parse_switch(
  key: &str,
  raw: &str
) -> anyhow::Result<bool> {
  match raw
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "on" | "yes" | "true" | "1" => {
      Ok(true)
    }
    | "off" | "no" | "false" | "0" => {
      Ok(false)
    }
    | other => {
      bail!(
        "{key} must be on or off, got \
         `{other}`"
      )
    }
  }
}

/// `--data`, else `data.location`.
/// The directory is created when
/// missing.
#[tracing::instrument(skip(cfg))]
pub fn resolve_data_dir(
  cfg: &Config,
  override_dir: Option<&Path>
) -> anyhow::Result<PathBuf> {
  let dir = match (
    override_dir,
    cfg.get("data.location")
  ) {
    | (Some(path), _) => {
      path.to_path_buf()
    }
    | (None, Some(location)) => {
      expand_tilde(Path::new(location))
    }
    | (None, None) => {
      home_dir()?.join(".tether")
    }
  };

  if !dir.is_dir() {
    info!(dir = %dir.display(), "creating data directory");
    fs::create_dir_all(&dir)
      .with_context(|| {
        format!(
          "failed to create {}",
          dir.display()
        )
      })?;
  }

  Ok(dir)
}

fn rc_path(
  rc_override: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  if let Some(path) = rc_override {
    return Ok(Some(path.to_path_buf()));
  }

  match std::env::var("TETHERRC") {
    | Ok(value) if value == "/dev/null" => {
      Ok(None)
    }
    | Ok(value) => {
      Ok(Some(PathBuf::from(value)))
    }
    | Err(_) => {
      let candidate =
        home_dir()?.join(".tetherrc");
      Ok(candidate
        .is_file()
        .then_some(candidate))
    }
  }
}

fn home_dir() -> anyhow::Result<PathBuf>
{
  dirs::home_dir().ok_or_else(|| {
    anyhow!(
      "cannot determine home \
       directory"
    )
  })
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  match (
    path.to_str().and_then(|text| {
      text.strip_prefix("~/")
    }),
    dirs::home_dir()
  ) {
    | (Some(rest), Some(home)) => {
      home.join(rest)
    }
    | _ => path.to_path_buf()
  }
}
