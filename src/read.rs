//! Asynchronous loading of the tables and token files the binary works on.
//!
//! Configuration files (irregular dictionary, rule table, stop-words) report
//! failures as [`ConfigError`]; the token input and report output as
//! [`IoError`].

use std::path::{Path, PathBuf};

use gdlemma::{IrregularTable, RuleTable};
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::{debug, info};

use crate::{
    error::{ConfigError, Error, IoError},
    normalizer::Stopwords,
};

#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(IoError::File {
                path: path_buf.display().to_string(),
                kind: error.kind(),
            }
            .into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_into(&mut self, buffer: &mut String) -> Result<usize, Error> {
        let path = self.path.display().to_string();

        match &mut self.inner {
            Some(reader) => reader.read_to_string(buffer).await.map_err(|error| {
                IoError::File {
                    path,
                    kind: error.kind(),
                }
                .into()
            }),

            None => Err(IoError::File {
                path,
                kind: std::io::ErrorKind::InvalidInput,
            }
            .into()),
        }
    }
}

/// Reads a whole token file.
pub async fn read_input<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let mut buffer = String::new();
    let mut reader = FileReader::new();

    reader.open(&path).await?;
    let bytes = reader.read_into(&mut buffer).await?;
    debug!(path = %reader.path().display(), bytes, "read input");

    Ok(buffer)
}

async fn read_config<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();

    tokio::fs::read_to_string(path).await.map_err(|error| {
        ConfigError::File {
            path: path.display().to_string(),
            kind: error.kind(),
        }
        .into()
    })
}

/// Loads the irregular dictionary, or an empty table when no path is given.
pub async fn load_irregulars(path: Option<&Path>) -> Result<IrregularTable, Error> {
    let Some(path) = path else {
        return Ok(IrregularTable::new());
    };

    let table = IrregularTable::from_json_str(&read_config(path).await?)?;
    info!(path = %path.display(), entries = table.len(), "loaded irregular forms");

    Ok(table)
}

/// Loads a rule table, or the built-in Gaelic rules when no path is given.
pub async fn load_rules(path: Option<&Path>) -> Result<RuleTable, Error> {
    let Some(path) = path else {
        return Ok(RuleTable::gaelic());
    };

    let table = RuleTable::from_json_str(&read_config(path).await?)?;
    info!(path = %path.display(), rules = table.len(), "loaded suffix rules");

    Ok(table)
}

/// Loads the stop-word list, or an empty one when no path is given.
pub async fn load_stopwords(path: Option<&Path>) -> Result<Stopwords, Error> {
    let Some(path) = path else {
        return Ok(Stopwords::default());
    };

    let stopwords = Stopwords::parse(&read_config(path).await?);
    info!(path = %path.display(), words = stopwords.len(), "loaded stop-words");

    Ok(stopwords)
}

pub async fn write_output<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), Error> {
    let write = async {
        let mut file = File::create(path.as_ref()).await?;
        file.write_all(contents.as_bytes()).await?;
        file.flush().await
    };

    write
        .await
        .map_err(|error| IoError::Writer(error.kind()).into())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{
        error::{ConfigError, Error, IoError},
        read::{load_irregulars, load_rules, load_stopwords, read_input, FileReader},
    };

    #[tokio::test]
    async fn test_reader_file_open() {
        let mut buffer = String::new();
        let mut reader = FileReader::new();

        reader.open("tests/data/tokens.txt").await.unwrap();
        reader.read_into(&mut buffer).await.unwrap();

        assert!(buffer.lines().any(|line| line == "taighean"));
    }

    #[tokio::test]
    async fn test_reader_unopened() {
        let mut buffer = String::new();
        let mut reader = FileReader::new();

        assert!(matches!(
            reader.read_into(&mut buffer).await,
            Err(Error::Io(IoError::File { .. }))
        ));
    }

    #[tokio::test]
    async fn test_read_input_missing() {
        let result = read_input("tests/data/missing.txt").await;

        assert!(matches!(
            result,
            Err(Error::Io(IoError::File { kind: std::io::ErrorKind::NotFound, .. }))
        ));
    }

    #[tokio::test]
    async fn test_load_irregulars() {
        let table = load_irregulars(Some(Path::new("tests/data/irregulars.json")))
            .await
            .unwrap();

        assert_eq!(table.get("bha"), Some("bi"));
        assert!(load_irregulars(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_irregulars_missing() {
        let result = load_irregulars(Some(Path::new("tests/data/missing.json"))).await;
        assert!(matches!(result, Err(Error::Config(ConfigError::File { .. }))));
    }

    #[tokio::test]
    async fn test_load_rules() {
        let table = load_rules(Some(Path::new("tests/data/rules.json"))).await.unwrap();
        assert_eq!(table.first().map(|rule| rule.suffix.as_str()), Some("aichean"));

        let table = load_rules(None).await.unwrap();
        assert_eq!(table, gdlemma::RuleTable::gaelic());
    }

    #[tokio::test]
    async fn test_load_stopwords() {
        let stopwords = load_stopwords(Some(Path::new("tests/data/stopwords.txt")))
            .await
            .unwrap();

        assert!(stopwords.contains("agus"));
        assert!(stopwords.contains("an"));
    }
}
