// File: crates/heatmap-core/tests/loader.rs
// Purpose: Dataset loading from files and from a local HTTP stub; failures surface as errors.

use std::io::Write;

use heatmap_core::{load, DataSource, LoadError, Loader};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const SAMPLE: &str = include_str!("data/sample.json");

/// Client that ignores proxy settings from the environment.
fn direct() -> Loader {
    Loader::with_client(reqwest::Client::builder().no_proxy().build().expect("client"))
}

/// Serve exactly one HTTP response on an ephemeral port and return its base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; 4096];
        let _ = sock.read(&mut buf).await;
        let resp = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        sock.write_all(resp.as_bytes()).await.expect("write");
        sock.shutdown().await.ok();
    });
    format!("http://{}/global-temperature.json", addr)
}

#[tokio::test]
async fn loads_from_file() {
    let mut f = tempfile::NamedTempFile::new().expect("tmp");
    f.write_all(SAMPLE.as_bytes()).expect("write tmp");
    let ds = load(&DataSource::File(f.path().to_path_buf())).await.expect("load file");
    assert_eq!(ds.base_temperature, 8.66);
    assert_eq!(ds.monthly_variance.len(), 48);
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let err = load(&DataSource::File("does/not/exist.json".into())).await.unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
}

#[tokio::test]
async fn malformed_file_is_json_error() {
    let mut f = tempfile::NamedTempFile::new().expect("tmp");
    f.write_all(b"{\"baseTemperature\": 8.66, \"monthlyVariance\": [").expect("write tmp");
    let err = load(&DataSource::File(f.path().to_path_buf())).await.unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }), "got {err:?}");
}

#[cfg(feature = "fetch")]
#[tokio::test]
async fn fetches_over_http() {
    let url = serve_once("200 OK", SAMPLE).await;
    let ds = direct().load(&DataSource::parse(&url)).await.expect("fetch");
    assert_eq!(ds.monthly_variance.len(), 48);
    assert_eq!(ds.monthly_variance[0].year, 1900);
}

#[cfg(feature = "fetch")]
#[tokio::test]
async fn http_error_status_fails_fast() {
    let url = serve_once("404 Not Found", "{}").await;
    let err = direct().load(&DataSource::parse(&url)).await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }), "got {err:?}");
}

#[cfg(feature = "fetch")]
#[tokio::test]
async fn http_body_must_be_json() {
    let url = serve_once("200 OK", "<html>oops</html>").await;
    let err = direct().load(&DataSource::parse(&url)).await.unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }), "got {err:?}");
}

#[cfg(feature = "fetch")]
#[tokio::test]
async fn connection_refused_is_http_error() {
    // bind then drop to get a port nobody listens on
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        l.local_addr().expect("addr").port()
    };
    let err = direct().load(&DataSource::Url(format!("http://127.0.0.1:{port}/x.json"))).await.unwrap_err();
    assert!(matches!(err, LoadError::Http { .. }), "got {err:?}");
}
