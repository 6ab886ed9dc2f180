//! Digest command implementation.

use std::io::{self, Read};

use log::{debug, info};
use serde_json::Value as Json;
use structsum_core::{HashAlgorithm, StructuralHasher, Value};

use crate::errors::CliError;
use crate::output::{self, OutputFormat};

pub fn run(
    input: Option<String>,
    algorithm: HashAlgorithm,
    format: OutputFormat,
) -> Result<(), CliError> {
    // Read JSON from file or stdin
    let json_str = match &input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            source_name: path.clone(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Io {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            buffer
        }
    };
    debug!("read {} bytes of JSON", json_str.len());

    let json: Json = serde_json::from_str(&json_str)?;
    let value = Value::from(json);
    info!("digesting {} value with {}", value.shape(), algorithm);

    let digest = StructuralHasher::new(algorithm).digest(&value)?;
    println!("{}", output::format_digest(algorithm, &digest, format));
    Ok(())
}
