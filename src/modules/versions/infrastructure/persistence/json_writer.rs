use crate::modules::versions::domain::{BaseAggregate, BaseTitleId};
use crate::shared::{
    config::SyncConfig,
    errors::{AppError, AppResult},
};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Pretty printer that escapes everything outside printable ASCII as `\uXXXX`
struct AsciiPrettyFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    // Quotes, backslashes and control characters are escaped before reaching here
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, c) in fragment.char_indices() {
            if c <= '~' {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Pretty JSON with four-space indentation, ASCII-only, no trailing newline
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = AsciiPrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Write `value` to `path` through a temporary file in the same directory,
/// so readers only ever see the old or the new complete file.
pub fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let contents = to_pretty_json(value)?;

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent).map_err(|e| AppError::io(path, e))?;
    file.write_all(&contents).map_err(|e| AppError::io(path, e))?;
    file.persist(path).map_err(|e| AppError::io(path, e.error))?;

    debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Persists the aggregate file and the per-title files
pub struct VersionsWriter {
    json_path: PathBuf,
    dir_path: PathBuf,
}

impl VersionsWriter {
    pub fn new(json_path: impl Into<PathBuf>, dir_path: impl Into<PathBuf>) -> Self {
        Self {
            json_path: json_path.into(),
            dir_path: dir_path.into(),
        }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(&config.json_path, &config.dir_path)
    }

    pub fn title_file_path(&self, base: &BaseTitleId) -> PathBuf {
        self.dir_path.join(format!("{}.json", base))
    }

    /// Whole aggregate into the single aggregate file
    pub fn write_aggregate(&self, aggregate: &BaseAggregate) -> AppResult<()> {
        write_pretty_json(&self.json_path, aggregate)
    }

    /// One `<BASE_ID>.json` per base title; returns how many were written
    pub fn write_title_files(&self, aggregate: &BaseAggregate) -> AppResult<usize> {
        fs::create_dir_all(&self.dir_path).map_err(|e| AppError::io(&self.dir_path, e))?;

        let mut written = 0;
        for (base, record) in aggregate.iter() {
            write_pretty_json(&self.title_file_path(base), record)?;
            written += 1;
        }
        Ok(written)
    }
}
