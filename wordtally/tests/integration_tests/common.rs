// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub const SAMPLE_TEXT: &str = "Hello! This is a test text. Hello world! \
    This text is used to test the word count script. Let's go!";

/// "中文" encoded as GBK.
pub const GBK_WORD: &[u8] = b"\xD6\xD0\xCE\xC4";

pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    Ok(())
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "01_sample.txt", SAMPLE_TEXT.as_bytes())?;
    create_test_file(temp_dir.path(), "02_copy.txt", SAMPLE_TEXT.as_bytes())?;

    let mut gbk = b"Hello ".to_vec();
    gbk.extend_from_slice(GBK_WORD);
    gbk.extend_from_slice(b" world");
    create_test_file(temp_dir.path(), "03_gbk.txt", &gbk)?;

    create_test_file(temp_dir.path(), "04_broken.txt", b"caf\xFF \xFF")?;
    create_test_file(temp_dir.path(), "05_empty.txt", b"")?;
    create_test_file(temp_dir.path(), "readme.md", b"Not counted by default")?;
    create_test_file(temp_dir.path(), "drafts/06_draft.txt", b"draft words only")?;

    Ok(temp_dir)
}
