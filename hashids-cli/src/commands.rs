//! The subcommands of the `hashids` binary. Each one renders its result as
//! a single line for stdout.

use clap::Subcommand;
use clap::ValueEnum;
use hashids::Hashids;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::Error;

/// How a decoded hash should be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DecodeAs {
    /// Comma separated numbers
    #[default]
    Numbers,
    /// The hex string given to `encode-hex`
    Hex,
    /// The RFC 3339 time given to `encode-time`
    Time,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Encode one or more non-negative numbers into a hash.
    Encode {
        /// The numbers, separated by spaces or commas.
        #[clap(required = true, value_delimiter = ',')]
        numbers: Vec<u64>,
    },
    /// Encode a hex string, one number per hex digit.
    EncodeHex {
        /// The hex string, without a `0x` prefix.
        hex: String,
    },
    /// Encode an RFC 3339 timestamp with nanosecond precision.
    EncodeTime {
        /// For example `2024-02-29T13:37:00.123456789Z`, or `now`.
        #[clap(default_value = "now")]
        time: String,
    },
    /// Decode a hash.
    Decode {
        /// The hash, with or without the configured prefix.
        hash: String,

        /// How to present the decoded numbers.
        #[clap(long = "as", value_enum, default_value_t = DecodeAs::Numbers)]
        decode_as: DecodeAs,

        /// Print the result as JSON.
        #[clap(long)]
        json: bool,
    },
}

impl Command {
    /// Runs the command against `hashids` and returns what should be
    /// printed.
    #[tracing::instrument(skip(hashids))]
    pub fn run(&self, hashids: &Hashids) -> Result<String, Error> {
        match self {
            Command::Encode { numbers } => Ok(hashids.encode(numbers)?),
            Command::EncodeHex { hex } => Ok(hashids.encode_hex(hex)?),
            Command::EncodeTime { time } => {
                let time = match time.as_str() {
                    "now" => OffsetDateTime::now_utc(),
                    text => OffsetDateTime::parse(text, &Rfc3339)
                        .map_err(|err| Error::ParseTime(err, text.to_string()))?,
                };
                Ok(hashids.encode_time(time)?)
            }
            Command::Decode { hash, decode_as, json } => {
                let decoded = hashids.decode(hash)?;
                tracing::debug!(count = decoded.len(), "decoded hash");

                match (decode_as, json) {
                    (DecodeAs::Numbers, false) => Ok(decoded.to_string()),
                    (DecodeAs::Numbers, true) => Ok(serde_json::to_string(&decoded)?),
                    (DecodeAs::Hex, false) => Ok(decoded.to_hex()?),
                    (DecodeAs::Hex, true) => Ok(serde_json::to_string(&decoded.to_hex()?)?),
                    (DecodeAs::Time, json) => {
                        let time = decoded.to_time()?.format(&Rfc3339)?;
                        match json {
                            true => Ok(serde_json::to_string(&time)?),
                            false => Ok(time),
                        }
                    }
                }
            }
        }
    }
}
