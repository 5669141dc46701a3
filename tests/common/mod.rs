// Shared helpers for the integration tests
#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use swiftlint_annotate::errors::FetchError;
use swiftlint_annotate::tools::Downloader;

mock! {
    pub Downloader {}

    #[async_trait]
    impl Downloader for Downloader {
        async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError>;
    }
}

/// Build a release archive shaped like `portable_swiftlint.zip`
pub fn release_zip(binary: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    writer
        .start_file(
            "swiftlint",
            SimpleFileOptions::default().unix_permissions(0o755),
        )
        .expect("Failed to start binary entry");
    writer
        .write_all(binary.as_bytes())
        .expect("Failed to write binary entry");

    writer
        .start_file("LICENSE", SimpleFileOptions::default())
        .expect("Failed to start license entry");
    writer
        .write_all(b"The MIT License (MIT)")
        .expect("Failed to write license entry");

    writer
        .finish()
        .expect("Failed to finish archive")
        .into_inner()
}

/// A mock downloader serving `archive` and recording every requested URL
pub fn serving_downloader(
    archive: Vec<u8>,
    times: usize,
) -> (MockDownloader, Arc<Mutex<Vec<String>>>) {
    let urls = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&urls);

    let mut downloader = MockDownloader::new();
    downloader
        .expect_download()
        .times(times)
        .returning(move |url| {
            recorded.lock().unwrap().push(url.to_string());
            Ok(archive.clone())
        });

    (downloader, urls)
}

/// A mock downloader that fails the test if it is ever called
pub fn offline_downloader() -> MockDownloader {
    let mut downloader = MockDownloader::new();
    downloader.expect_download().never();
    downloader
}
