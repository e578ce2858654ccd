use std::fs::{self, File};
use std::io::{Error as IoError, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use snafu::prelude::*;

pub const DEFAULT_CONTENT: &str = r#"
# This configuration file is generated automatically. Feel free to do some
# modification.

# The `duration` section specifies the duration of each phase in seconds.
[duration]
work = 1500
rest = 300

# The `timer` section specifies how often the display is refreshed while the
# timer is running. It doesn't affect how fast the countdown goes.
[timer]
tick_millis = 200

# The `notification` section toggles desktop notifications shown when a
# phase ends. The `notification.<phase>` sections specify the messages.
# `body` is optional.
[notification]
enabled = true

[notification.work]
summary = "Work Time Over"
body = "Well done! Time for a short rest."

[notification.rest]
summary = "Rest Time Over"
body = "Feel refreshed? Let's get back to work."
"#;

/// A reader which reads the configuration content and writes the default
/// template first if the file is missing.
pub struct ContentReader {
    path: PathBuf,
    create_new: bool,
}

impl ContentReader {
    /// Creates a new [`ContentReader`].
    pub fn new<P: AsRef<Path>>(path: P, create_new: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            create_new,
        }
    }

    /// Read content from the file.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file doesn't exist and may
    /// not be created, or any file system operation fails.
    pub fn read(self) -> Result<String, ReadContentError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                ensure!(self.create_new, NotFoundSnafu { path: self.path });
                Self::create_configuration(&self.path)?;
                Ok(DEFAULT_CONTENT.to_owned())
            }
            Err(err) => Err(err).context(FileSystemSnafu {
                when: "Reading configuration",
            }),
        }
    }

    /// Write the default template to `path`, creating leading directories.
    ///
    /// # Errors
    ///
    /// This function will return an error if the creation fails.
    fn create_configuration(path: &Path) -> Result<(), ReadContentError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(FileSystemSnafu {
                when: "Creating configuration directory",
            })?;
        }

        let mut file = File::options()
            .write(true)
            .create_new(true)
            .open(path)
            .context(FileSystemSnafu {
                when: "Creating configuration file",
            })?;

        file.write_all(DEFAULT_CONTENT.as_bytes())
            .context(FileSystemSnafu {
                when: "Writing default configuration content",
            })?;

        tracing::info!(path = %path.display(), "Created default configuration");
        Ok(())
    }
}

/// An error type for reading content from the configuration file.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum ReadContentError {
    #[snafu(display("Could not open inexistent file {}", path.display()))]
    NotFound { path: PathBuf },
    #[snafu(display("Could not access configuration: {when}"))]
    FileSystem {
        when: String,
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}
