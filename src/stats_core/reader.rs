//! Asynchronous JSONL post reader

use super::error::StatsError;
use super::post::SocialPost;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

pub struct PostReader {
    path: PathBuf,
}

impl PostReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every post in the file, in file order
    ///
    /// Blank lines are skipped. Lines that fail to parse are logged and
    /// skipped so one bad record does not abort the run.
    pub async fn read_all(&self) -> Result<Vec<SocialPost>, StatsError> {
        let file = File::open(&self.path).await?;
        let mut reader = BufReader::new(file);

        log::info!("📖 Reading posts from: {}", self.path.display());

        let mut posts = Vec::new();
        let mut skipped = 0usize;
        let mut line_no = 0usize;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            line_no += 1;

            // Invalid UTF-8 is a bad record, not a broken stream
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    skipped += 1;
                    log::warn!(
                        "Skipping non UTF-8 line at {}:{}: {}",
                        self.path.display(),
                        line_no,
                        e
                    );
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            match SocialPost::from_jsonl(line) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    skipped += 1;
                    log::warn!(
                        "Failed to parse post at {}:{}: {}",
                        self.path.display(),
                        line_no,
                        e
                    );
                }
            }
        }

        log::info!("Loaded {} posts ({} skipped)", posts.len(), skipped);
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_read_all_skips_blank_and_malformed_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("posts.jsonl");

        let mut file = tokio::fs::File::create(&file_path).await.unwrap();
        file.write_all(
            b"{\"id\":\"1\",\"author_id\":\"a\",\"date\":\"2023-01-02T00:00:00Z\"}\n\
              \n\
              {\"id\": broken\n\
              {\"id\":\"2\"}\n",
        )
        .await
        .unwrap();
        file.flush().await.unwrap();
        drop(file);

        let posts = PostReader::new(file_path).read_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "1");
        assert_eq!(posts[0].author_id.as_deref(), Some("a"));
        assert_eq!(posts[1].id, "2");
        assert!(posts[1].date.is_none());
    }

    #[tokio::test]
    async fn test_read_all_skips_non_utf8_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("posts.jsonl");

        // Test: an invalid UTF-8 record between two valid ones
        let mut contents = b"{\"id\":\"1\",\"author_id\":\"a\"}\n".to_vec();
        contents.extend_from_slice(b"{\"id\":\"\xff\xfe\"}\n");
        contents.extend_from_slice(b"{\"id\":\"3\",\"author_id\":\"b\"}");
        tokio::fs::write(&file_path, contents).await.unwrap();

        let posts = PostReader::new(file_path).read_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "1");
        assert_eq!(posts[1].id, "3");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = PostReader::new(temp_dir.path().join("nope.jsonl"))
            .read_all()
            .await;

        assert!(matches!(result, Err(StatsError::Io(_))));
    }
}
