// tests/integration_tests/batch_test.rs
use super::common::{SAMPLE_TEXT, setup_test_directory};
use anyhow::Result;
use wordtally::{
    BatchAggregator, CollectOptions, Upload, analyze_batch, analyze_text, collect_uploads,
};

#[test]
fn test_identical_files_share_vocabulary() {
    let uploads = vec![
        Upload::new("a.txt", SAMPLE_TEXT),
        Upload::new("b.txt", SAMPLE_TEXT),
    ];
    let single = analyze_text(SAMPLE_TEXT);
    let summary = analyze_batch(&uploads);

    assert_eq!(summary.total_all_files, single.total * 2);
    assert_eq!(summary.unique_all_files, single.unique);
}

#[test]
fn test_directory_batch_isolates_failures() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = CollectOptions::new(["txt"], ["drafts"])?;
    let uploads = collect_uploads(&[temp_dir.path().to_path_buf()], &options);
    assert_eq!(uploads.len(), 5, "Only .txt files outside drafts/ are collected");

    let mut aggregator = BatchAggregator::new();
    for upload in uploads {
        match upload {
            Ok(upload) => aggregator.add_upload(&upload),
            Err(failure) => aggregator.add_failure(failure),
        }
    }
    let summary = aggregator.finish();

    let names: Vec<&str> = summary
        .files
        .iter()
        .filter_map(|file| file.filename.rsplit('/').next())
        .collect();
    assert_eq!(
        names,
        vec!["01_sample.txt", "02_copy.txt", "03_gbk.txt", "05_empty.txt"]
    );
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].filename.ends_with("04_broken.txt"));

    // 20 + 20 + 3 + 0; "hello" and "world" are already in the sample.
    assert_eq!(summary.total_all_files, 43);
    assert_eq!(summary.unique_all_files, 16);
    for file in &summary.files {
        assert!(summary.unique_all_files >= file.unique_word_count);
    }
    assert!(summary.unique_all_files <= summary.total_all_files);
    Ok(())
}

#[test]
fn test_batch_sum_matches_individual_totals() {
    let texts = ["one two three", "Two, three; four!", "", "five five five"];
    let uploads: Vec<Upload> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| Upload::new(format!("{i}.txt"), *text))
        .collect();

    let summary = analyze_batch(&uploads);
    let expected: usize = texts.iter().map(|text| analyze_text(text).total).sum();

    assert_eq!(summary.total_all_files, expected);
    assert_eq!(summary.unique_all_files, 5);
    assert_eq!(summary.files.len(), 4);
}
