// tests/integration_tests/decoding_test.rs
use super::common::{GBK_WORD, setup_test_directory};
use anyhow::Result;
use wordtally::{Upload, WordTallyError, analyze_upload, decode_text};

#[test]
fn test_gbk_file_is_decoded() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let bytes = std::fs::read(temp_dir.path().join("03_gbk.txt"))?;

    let result = analyze_upload(&Upload::new("03_gbk.txt", bytes))?;
    assert_eq!(result.total_word_count, 3);
    assert!(result.words().any(|word| word == "中文"));
    Ok(())
}

#[test]
fn test_utf8_is_preferred_over_gbk() -> Result<()> {
    // Valid UTF-8 for "中文"; would decode to different characters as GBK.
    let text = decode_text("中文".as_bytes())?;
    assert_eq!(text, "中文");
    assert_ne!(decode_text(GBK_WORD)?, String::from_utf8_lossy(GBK_WORD));
    Ok(())
}

#[test]
fn test_undecodable_file_is_an_error() {
    let result = analyze_upload(&Upload::new("broken.txt", b"caf\xFF \xFF".to_vec()));
    assert!(matches!(result, Err(WordTallyError::Decode { len: 6, .. })));
}
