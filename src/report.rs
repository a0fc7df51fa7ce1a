//! Text and JSON rendering of lemma pairs and frequency tables.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{ConfigError, Error};

#[derive(Debug, Serialize, PartialEq)]
pub struct LemmaRecord<'a> {
    pub token: &'a str,
    pub lemma: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct FrequencyRecord<'a> {
    pub word: &'a str,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

pub fn lemmas(pairs: &[(String, String)], format: Format) -> Result<String, Error> {
    let mut out = String::new();

    for (token, lemma) in pairs {
        match format {
            Format::Text => out.push_str(&format!("{token} → {lemma}\n")),
            Format::Json => {
                push_json(&mut out, &LemmaRecord { token, lemma })?;
            }
        }
    }

    Ok(out)
}

pub fn frequencies(entries: &[(&str, usize)], format: Format) -> Result<String, Error> {
    let mut out = String::new();

    if format == Format::Text {
        out.push_str("Word → Frequency (excluding stop words)\n");
        out.push_str(&"-".repeat(40));
        out.push('\n');
    }

    for &(word, count) in entries {
        match format {
            Format::Text => out.push_str(&format!("{word} → {count}\n")),
            Format::Json => {
                push_json(&mut out, &FrequencyRecord { word, count })?;
            }
        }
    }

    Ok(out)
}

fn push_json<T: Serialize>(out: &mut String, record: &T) -> Result<(), Error> {
    let line = serde_json::to_string(record)
        .map_err(|error| ConfigError::Serialization(error.to_string()))?;
    out.push_str(&line);
    out.push('\n');
    Ok(())
}
