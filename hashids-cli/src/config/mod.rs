//! Configuration management for the hashids command line tool
use std::path::Path;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use hashids::Hashids;
use serde::Deserialize;

/// Top-level configuration for the command line tool
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// Codec configuration
    pub hashids: HashidsConfig,
}

/// Everything needed to build a [`Hashids`] codec. Encoding and decoding
/// sides must agree on all of it.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HashidsConfig {
    /// The salt. An empty salt disables shuffling.
    pub salt: String,
    /// The alphabet. An empty string selects the default alphabet.
    pub alphabet: String,
    /// Separator candidates.
    pub separators: String,
    /// Minimum hash length, not counting the prefix.
    pub min_length: usize,
    /// Literal prefix prepended to every hash.
    pub prefix: String,
}

impl HashidsConfig {
    /// Builds the codec described by this configuration.
    pub fn codec(&self) -> Result<Hashids, ConfigError> {
        Hashids::builder()
            .salt(&self.salt)
            .alphabet(&self.alphabet)
            .separators(&self.separators)
            .min_length(self.min_length)
            .prefix(&self.prefix)
            .build()
            .map_err(|err| ConfigError::Message(format!("[hashids] {err}")))
    }
}

impl Settings {
    /// Initializing the config first with default values, then with the
    /// optional config file and finally with environment variables.
    ///
    /// The environment variables are prefixed with `HASHIDS_` and nested
    /// fields are separated with double underscores, so `hashids.min_length`
    /// is read from:
    ///
    /// ```text
    /// HASHIDS_HASHIDS__MIN_LENGTH
    /// ^^^^^^^ ^^^^^^^  ^^^^^^^^^^
    ///    │   ^   │   ^^    └ The `min_length` field of the `hashids` object
    ///    │   │   │   └ separator("__")
    ///    │   │   └ The `hashids` field of the root object (`Settings`)
    ///    │   └ prefix_separator("_")
    ///    └ with_prefix("HASHIDS")
    /// ```
    pub fn new(config_path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        Self::with_environment(config_path, environment())
    }

    fn with_environment(
        config_path: Option<impl AsRef<Path>>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut cfg_builder = Config::builder();

        cfg_builder = cfg_builder.set_default("hashids.salt", "")?;
        cfg_builder = cfg_builder.set_default("hashids.alphabet", hashids::DEFAULT_ALPHABET)?;
        cfg_builder = cfg_builder.set_default("hashids.separators", hashids::DEFAULT_SEPARATORS)?;
        cfg_builder =
            cfg_builder.set_default("hashids.min_length", hashids::DEFAULT_MIN_LENGTH as u64)?;
        cfg_builder = cfg_builder.set_default("hashids.prefix", "")?;

        if let Some(path) = config_path {
            cfg_builder = cfg_builder.add_source(File::from(path.as_ref()));
        }
        cfg_builder = cfg_builder.add_source(env);

        let cfg = cfg_builder.build()?;

        let settings: Settings = cfg.try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Perform validation on the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.hashids.codec()?;

        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("HASHIDS")
        .separator("__")
        .prefix_separator("_")
}
