use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Where commands are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// The sources named on the command line, in order.
    ///
    /// No paths means standard input, and so does the path `-`.
    pub fn from_paths(paths: &[PathBuf]) -> Vec<InputSource> {
        if paths.is_empty() {
            return vec![InputSource::Stdin];
        }
        paths
            .iter()
            .map(|path| {
                if path.as_path() == Path::new("-") {
                    InputSource::Stdin
                } else {
                    InputSource::File(path.clone())
                }
            })
            .collect()
    }

    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => String::from("<stdin>"),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    pub fn open(&self) -> anyhow::Result<Box<dyn BufRead>> {
        let reader: Box<dyn BufRead> = match self {
            InputSource::Stdin => Box::new(std::io::stdin().lock()),
            InputSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Could not open '{}'", path.display()))?;
                Box::new(BufReader::new(file))
            }
        };
        Ok(reader)
    }
}
