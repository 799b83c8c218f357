//! Run settings resolved from CLI flags, environment variables and defaults.
//!
//! Precedence is flag, then environment, then default. `main` loads a `.env`
//! file first, so values from it show up as environment variables here.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use crate::cli::PlayArgs;
use crate::error::ConfigError;
use crate::generator::Roster;

/// Comma-separated roster override.
pub const ENV_PLAYERS: &str = "CHORUS_PLAYERS";
/// Positive line limit.
pub const ENV_LIMIT: &str = "CHORUS_LIMIT";
/// `text` or `json`.
pub const ENV_FORMAT: &str = "CHORUS_FORMAT";
/// Transcript output path.
pub const ENV_RECORD: &str = "CHORUS_RECORD";

/// How lines are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Abdul says fizz`
    #[default]
    Text,
    /// `{"seq":3,"player":"Claudia","says":"fizz"}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Fully resolved settings for `chorus play`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySettings {
    /// Players in turn order.
    pub roster: Roster,
    /// Stop after this many lines; `None` runs forever.
    pub limit: Option<u64>,
    /// Output rendering.
    pub format: OutputFormat,
    /// Where to write a transcript, if anywhere.
    pub record: Option<PathBuf>,
}

impl Default for PlaySettings {
    fn default() -> Self {
        Self { roster: Roster::default(), limit: None, format: OutputFormat::Text, record: None }
    }
}

impl PlaySettings {
    /// Resolve against the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for any invalid value.
    pub fn from_env(args: &PlayArgs) -> Result<Self, ConfigError> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for any invalid value.
    pub fn resolve<F>(args: &PlayArgs, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let roster = match args.players.clone().or_else(|| lookup(ENV_PLAYERS)) {
            Some(list) => Roster::parse(&list)?,
            None => Roster::default(),
        };

        let limit = match args.limit {
            Some(0) => return Err(ConfigError::InvalidLimit("0".to_string())),
            Some(limit) => Some(limit),
            None => lookup(ENV_LIMIT).map(|raw| parse_limit(&raw)).transpose()?,
        };

        let format = match args.format {
            Some(format) => format,
            None => lookup(ENV_FORMAT)
                .map(|raw| raw.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        let record = args
            .record
            .clone()
            .or_else(|| lookup(ENV_RECORD).filter(|p| !p.trim().is_empty()).map(PathBuf::from));

        // The transcript is held in memory until the run ends.
        if record.is_some() && limit.is_none() {
            return Err(ConfigError::RecordWithoutLimit);
        }

        Ok(Self { roster, limit, format, record })
    }
}

fn parse_limit(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidLimit(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let settings = PlaySettings::resolve(&PlayArgs::default(), env(&[])).unwrap();
        assert_eq!(settings, PlaySettings::default());
    }

    #[test]
    fn env_fills_unset_flags() {
        let settings = PlaySettings::resolve(
            &PlayArgs::default(),
            env(&[
                (ENV_PLAYERS, "Ann,Bo"),
                (ENV_LIMIT, "20"),
                (ENV_FORMAT, "JSON"),
                (ENV_RECORD, "out/run.yaml"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.roster.names(), ["Ann", "Bo"]);
        assert_eq!(settings.limit, Some(20));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.record, Some(PathBuf::from("out/run.yaml")));
    }

    #[test]
    fn flags_win_over_env() {
        let args = PlayArgs {
            players: Some("Cy".into()),
            limit: Some(3),
            format: Some(OutputFormat::Text),
            record: None,
        };
        let settings = PlaySettings::resolve(
            &args,
            env(&[(ENV_PLAYERS, "Ann,Bo"), (ENV_LIMIT, "20"), (ENV_FORMAT, "json")]),
        )
        .unwrap();
        assert_eq!(settings.roster.names(), ["Cy"]);
        assert_eq!(settings.limit, Some(3));
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn rejects_zero_and_garbage_limits() {
        let zero = PlayArgs { limit: Some(0), ..PlayArgs::default() };
        assert!(matches!(PlaySettings::resolve(&zero, env(&[])), Err(ConfigError::InvalidLimit(_))));
        assert!(matches!(
            PlaySettings::resolve(&PlayArgs::default(), env(&[(ENV_LIMIT, "lots")])),
            Err(ConfigError::InvalidLimit(_))
        ));
    }

    #[test]
    fn rejects_unknown_format_and_empty_roster() {
        assert!(matches!(
            PlaySettings::resolve(&PlayArgs::default(), env(&[(ENV_FORMAT, "xml")])),
            Err(ConfigError::InvalidFormat(_))
        ));
        assert!(matches!(
            PlaySettings::resolve(&PlayArgs::default(), env(&[(ENV_PLAYERS, " ")])),
            Err(ConfigError::EmptyRoster)
        ));
    }

    #[test]
    fn record_requires_a_limit() {
        let args = PlayArgs { record: Some(PathBuf::from("run.yaml")), ..PlayArgs::default() };
        assert!(matches!(
            PlaySettings::resolve(&args, env(&[])),
            Err(ConfigError::RecordWithoutLimit)
        ));
        assert!(matches!(
            PlaySettings::resolve(&PlayArgs::default(), env(&[(ENV_RECORD, "run.yaml")])),
            Err(ConfigError::RecordWithoutLimit)
        ));

        let settings = PlaySettings::resolve(&args, env(&[(ENV_LIMIT, "10")])).unwrap();
        assert_eq!(settings.limit, Some(10));
        assert_eq!(settings.record, Some(PathBuf::from("run.yaml")));
    }
}
