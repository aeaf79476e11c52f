use std::fs;
use std::path::Path;
use std::path::PathBuf;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use tracing::debug;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

/// Somewhere the static benchmark files can be read from.
pub(crate) trait Source {
    /// Returns the content of `resource`, a path relative to the source root.
    fn get(&self, resource: &str) -> Result<String>;

    /// Where the source reads from, for messages.
    fn location(&self) -> String;
}

/// Reads the files from a web server.
pub(crate) struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        // Without the trailing slash `Url::join` replaces the last segment.
        let base_url = if base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url)
            .map_err(|error| FetchError::Source(format!("`{base_url}`: {error}")))?;
        let client = Client::new();

        Ok(Self { client, base_url })
    }

    fn url(&self, resource: &str) -> Result<Url> {
        self.base_url
            .join(resource)
            .map_err(|error| FetchError::Source(format!("`{resource}`: {error}")))
    }
}

impl Source for HttpSource {
    fn get(&self, resource: &str) -> Result<String> {
        let url = self.url(resource)?;
        debug!(%url, "sending request");

        let response = self.client.get(url.clone()).send()?;

        match response.status() {
            StatusCode::OK => Ok(response.text()?),
            status_code => {
                let message = response.text()?;
                let error = FetchError::Response {
                    url: url.to_string(),
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }

    fn location(&self) -> String {
        self.base_url.to_string()
    }
}

/// Reads the files from a local directory.
pub(crate) struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(FetchError::Source(format!(
                "the `{}` path must point to a directory",
                root.display()
            )));
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }
}

impl Source for FileSource {
    fn get(&self, resource: &str) -> Result<String> {
        let path = self.root.join(resource);
        debug!(path = %path.display(), "reading file");

        fs::read_to_string(&path).map_err(|error| FetchError::Io { path, error })
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
