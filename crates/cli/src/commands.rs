//! Subcommands and their handlers.
//!
//! Handlers return the lines to print instead of printing them, which keeps them testable.

use crate::config::{namespace_from_str, CliConfig};
use crate::{CliError, CliResult};
use clap::{Subcommand, ValueEnum};
use rfc_uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate random (version 4) UUIDs
    V4 {
        /// How many UUIDs to print
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Generate a name-based (version 5) UUID
    V5 {
        /// Name to hash
        name: String,
        /// dns, url, oid, x500 or a canonical UUID (defaults to $RUUID_NAMESPACE, then dns)
        #[arg(long)]
        namespace: Option<String>,
    },
    /// Validate a canonical UUID string and show its fields
    Parse {
        /// Canonical hyphenated UUID
        text: String,
    },
    /// Re-encode a canonical UUID string
    Encode {
        /// Canonical hyphenated UUID
        text: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Canonical)]
        format: OutputFormat,
    },
    /// Import a UUID from 32 hex digits of raw bytes
    FromBytes {
        /// 16 bytes as hex
        hex: String,
        /// Treat the bytes as little-endian (COM/GUID) order
        #[arg(long)]
        le: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical lowercase hyphenated form
    #[value(name = "string")]
    Canonical,
    /// Standard base64, padded
    Base64,
    /// URL and filename safe base64, unpadded
    Base64url,
    /// Big-endian bytes as hex
    Bytes,
    /// Little-endian (COM/GUID) bytes as hex
    BytesLe,
}

pub fn run(command: &Command, config: &CliConfig) -> CliResult<Vec<String>> {
    match command {
        Command::V4 { count } => {
            tracing::debug!(count, "generating random UUIDs");
            Ok((0..*count).map(|_| Uuid::new_v4().to_string()).collect())
        }
        Command::V5 { name, namespace } => {
            let namespace = match namespace {
                Some(ns) => namespace_from_str(ns)?,
                None => config.default_namespace(),
            };
            tracing::debug!(%namespace, %name, "generating name-based UUID");
            Ok(vec![Uuid::new_v5(&namespace, name.as_bytes())?.to_string()])
        }
        Command::Parse { text } => {
            let uuid = Uuid::parse_str(text)?;
            Ok(vec![
                uuid.to_string(),
                format!("version: {}", uuid.version()),
                format!("variant: {:02b}", uuid.variant()),
            ])
        }
        Command::Encode { text, format } => {
            let uuid = Uuid::parse_str(text)?;
            Ok(vec![encode(&uuid, *format)])
        }
        Command::FromBytes { hex, le } => {
            let bytes = hex::decode(hex).map_err(CliError::InvalidHex)?;
            let uuid = if *le {
                Uuid::from_slice_le(&bytes)?
            } else {
                Uuid::from_slice(&bytes)?
            };
            Ok(vec![uuid.to_string()])
        }
    }
}

fn encode(uuid: &Uuid, format: OutputFormat) -> String {
    match format {
        OutputFormat::Canonical => uuid.to_string(),
        OutputFormat::Base64 => uuid.to_base64(),
        OutputFormat::Base64url => uuid.to_base64url(),
        OutputFormat::Bytes => hex::encode(uuid.to_bytes()),
        OutputFormat::BytesLe => hex::encode(uuid.to_bytes_le()),
    }
}
