//! Puzzle input resolution: local cache first, authenticated download second

use crate::error::InputError;
use aoc_http_client::AocClient;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};
use zeroize::Zeroizing;

/// File-based cache for puzzle inputs
///
/// Directory structure: `{input_dir}/{year}/day{day:02}.txt`, with sample
/// inputs under `{input_dir}/{year}/sample/{name}`.
pub struct InputCache {
    input_dir: PathBuf,
}

impl InputCache {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Get the path of a named sample input
    pub fn sample_path(&self, year: u16, name: &str) -> PathBuf {
        self.input_dir
            .join(year.to_string())
            .join("sample")
            .join(name)
    }

    /// Get cached input or None if not cached
    ///
    /// Content is returned verbatim, without any validation.
    pub fn get(&self, year: u16, day: u8) -> io::Result<Option<String>> {
        match fs::read_to_string(self.cache_path(year, day)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Store input in cache
    ///
    /// Written to a temporary file next to the target and renamed into place,
    /// so readers never observe a partial file.
    pub fn put(&self, year: u16, day: u8, input: &str) -> io::Result<PathBuf> {
        let path = self.cache_path(year, day);
        let dir = path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(input.as_bytes())?;
        file.persist(&path).map_err(|e| e.error)?;
        Ok(path)
    }
}

/// Resolves a day's puzzle input
pub struct InputProvider {
    cache: InputCache,
    client: AocClient,
    session: Option<Zeroizing<String>>,
}

impl InputProvider {
    pub fn new(cache: InputCache, client: AocClient, session: Option<Zeroizing<String>>) -> Self {
        Self {
            cache,
            client,
            session,
        }
    }

    /// Get the input for a year/day, from cache or by downloading it
    ///
    /// A cached file is never re-fetched. Without a cached file a session is
    /// required; its absence fails before any network traffic.
    pub fn get_input(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.cache.cache_path(year, day);
        if let Some(input) = self
            .cache
            .get(year, day)
            .map_err(|source| InputError::Io {
                path: path.clone(),
                source,
            })?
        {
            info!(path = %path.display(), "using cached input");
            return Ok(input);
        }

        let session = self
            .session
            .as_ref()
            .ok_or(InputError::MissingSession { year, day })?;

        info!(year, day, "downloading input");
        let input = self
            .client
            .get_input(year, day, session)
            .map_err(|source| InputError::Network { year, day, source })?;

        // Cache failures are not fatal; the input is already in hand
        match self.cache.put(year, day, &input) {
            Ok(path) => info!(path = %path.display(), "input saved"),
            Err(e) => warn!(year, day, error = %e, "failed to cache input"),
        }

        Ok(input)
    }

    /// Read a named sample input instead of the real one
    pub fn sample_input(&self, year: u16, name: &str) -> Result<String, InputError> {
        let path = self.cache.sample_path(year, name);
        info!(path = %path.display(), "using sample input");
        fs::read_to_string(&path).map_err(|source| InputError::Io { path, source })
    }
}
