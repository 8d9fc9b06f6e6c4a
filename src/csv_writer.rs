use crate::error::{Error, Result};
use crate::movie::MovieRecord;
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub const HEADERS: [&str; 5] = ["id", "title", "release_date", "vote_average", "overview"];

/// Quotes a field only when it holds a comma, a double quote or a newline.
pub fn escape_csv_field(field: Option<&str>) -> Cow<'_, str> {
    let Some(field) = field else {
        return Cow::Borrowed("");
    };
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

impl MovieRecord {
    /// Cells in `HEADERS` order, `None` where the record lacks the field.
    pub fn csv_fields(&self) -> [Option<String>; 5] {
        [
            self.id.map(|v| v.to_string()),
            self.title.clone(),
            self.release_date.clone(),
            self.vote_average.map(|v| v.to_string()),
            self.overview.clone(),
        ]
    }
}

pub fn render_csv(movies: &[MovieRecord]) -> Result<String> {
    if movies.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut lines = Vec::with_capacity(movies.len() + 1);
    lines.push(HEADERS.join(","));
    for movie in movies {
        let fields = movie.csv_fields();
        let row: Vec<Cow<'_, str>> = fields
            .iter()
            .map(|f| escape_csv_field(f.as_deref()))
            .collect();
        lines.push(row.join(","));
    }
    Ok(lines.join("\n"))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("movies.csv"));
    name.push(".part");
    path.with_file_name(name)
}

/// Writes `movies` as CSV to `path`, replacing any existing file.
///
/// Parent directories are created first. The body goes to a sibling staging
/// file which is then renamed over `path`, so readers never see a partial file.
pub async fn write_movies_to_csv(movies: &[MovieRecord], path: &Path) -> Result<()> {
    let content = render_csv(movies)?;

    let wrap = |e: std::io::Error| Error::WriteFailed(e.to_string());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(wrap)?;
    }

    let staging = staging_path(path);
    if let Err(e) = fs::write(&staging, content.as_bytes()).await {
        fs::remove_file(&staging).await.ok();
        return Err(wrap(e));
    }
    if let Err(e) = fs::rename(&staging, path).await {
        fs::remove_file(&staging).await.ok();
        return Err(wrap(e));
    }

    debug!(path = %path.display(), rows = movies.len(), "csv written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> MovieRecord {
        MovieRecord {
            id: Some(1),
            title: Some("A, B".into()),
            release_date: Some("2020-05-01".into()),
            vote_average: Some(7.5),
            overview: Some("Has \"quotes\"".into()),
        }
    }

    #[test]
    fn plain_fields_are_left_alone() {
        assert_eq!(escape_csv_field(Some("Inception")), "Inception");
        assert_eq!(escape_csv_field(Some("")), "");
        assert_eq!(escape_csv_field(None), "");
        assert!(matches!(escape_csv_field(Some("x")), Cow::Borrowed(_)));
    }

    #[test]
    fn special_characters_force_quoting() {
        assert_eq!(escape_csv_field(Some("a,b")), "\"a,b\"");
        assert_eq!(escape_csv_field(Some("say \"hi\"")), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_field(Some("line1\nline2")), "\"line1\nline2\"");
    }

    #[test]
    fn carriage_return_alone_does_not_quote() {
        assert_eq!(escape_csv_field(Some("a\rb")), "a\rb");
    }

    #[test]
    fn renders_header_and_escaped_row() {
        let body = render_csv(&[sample()]).unwrap();
        assert_eq!(
            body,
            concat!(
                "id,title,release_date,vote_average,overview\n",
                "1,\"A, B\",2020-05-01,7.5,\"Has \"\"quotes\"\"\"",
            )
        );
    }

    #[test]
    fn one_line_per_record_plus_header() {
        let movies: Vec<_> = (0..4)
            .map(|i| MovieRecord {
                id: Some(i),
                title: Some(format!("Movie {i}")),
                vote_average: Some(8.0),
                ..Default::default()
            })
            .collect();
        let body = render_csv(&movies).unwrap();
        let lines: Vec<_> = body.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "0,Movie 0,,8,");
        assert!(lines.iter().all(|l| l.split(',').count() == 5));
    }

    #[test]
    fn missing_fields_become_empty_cells() {
        let body = render_csv(&[MovieRecord::default()]).unwrap();
        assert_eq!(body.lines().nth(1), Some(",,,,"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(render_csv(&[]), Err(Error::EmptyInput)));
    }

    #[tokio::test]
    async fn empty_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.csv");

        let err = write_movies_to_csv(&[], &path).await.unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn creates_parent_dirs_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/movies.csv");

        write_movies_to_csv(&[sample(), sample()], &path).await.unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first.lines().count(), 3);

        write_movies_to_csv(&[sample()], &path).await.unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(second, render_csv(&[sample()]).unwrap());
        assert!(!staging_path(&path).exists());
    }

    #[tokio::test]
    async fn unwritable_target_is_write_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = write_movies_to_csv(&[sample()], &blocker.join("movies.csv"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::WriteFailed(_)));
        assert!(err.to_string().starts_with("Failed to write CSV file: "));
    }
}
