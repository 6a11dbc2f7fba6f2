// src/config.rs
use crate::args::Args;
use crate::options::{OutputFormat, delimiter_for};
use count_values_ports::records::RecordReadPlan;
use count_values_shared_kernel::{
    CountValuesError, InfraResult, InfrastructureError, PresentationError, PresentationResult,
};
use std::path::PathBuf;

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub delimiter: u8,
    pub format: OutputFormat,
}

impl Config {
    /// Builds the configuration from parsed arguments and an optional raw
    /// format value (normally the `COUNT_VALUES_FORMAT` variable).
    pub fn from_parts(args: Args, format: Option<&str>) -> PresentationResult<Self> {
        let format = match format {
            None => OutputFormat::default(),
            Some(raw) => raw.parse::<OutputFormat>().map_err(|reason| PresentationError::InvalidValue {
                name: OutputFormat::ENV.to_string(),
                value: raw.to_string(),
                reason,
            })?,
        };
        let delimiter = delimiter_for(&args.input);

        Ok(Self { input: args.input, delimiter, format })
    }

    /// Checks that the input path names a readable regular file.
    pub fn validate(&self) -> InfraResult<()> {
        let meta = std::fs::metadata(&self.input).map_err(|source| InfrastructureError::FileOpen {
            path: self.input.clone(),
            source,
        })?;
        if meta.is_dir() {
            return Err(InfrastructureError::FileOpen {
                path: self.input.clone(),
                source: std::io::Error::other("is a directory"),
            });
        }
        Ok(())
    }

    pub fn plan(&self) -> RecordReadPlan {
        RecordReadPlan::new(self.input.clone(), self.delimiter)
    }
}

impl TryFrom<Args> for Config {
    type Error = CountValuesError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let format = match std::env::var(OutputFormat::ENV) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(raw)) => {
                return Err(PresentationError::InvalidValue {
                    name: OutputFormat::ENV.to_string(),
                    value: raw.to_string_lossy().into_owned(),
                    reason: "not valid unicode".to_string(),
                }
                .into());
            }
        };
        Ok(Self::from_parts(args, format.as_deref())?)
    }
}
