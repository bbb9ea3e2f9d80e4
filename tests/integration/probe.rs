//! The network probe against live and dead targets.

use std::time::{Duration, Instant};

use hello_vibe::api::HELLO_MESSAGE;
use hello_vibe::harness::{HelloProbe, DEFAULT_TIMEOUT};
use hello_vibe::HarnessError;
use pretty_assertions::assert_eq;

use crate::support::{closed_addr, SilentServer, TestServer};

#[tokio::test]
async fn probe_passes_against_running_server() {
    let server = TestServer::spawn().await;
    let probe = HelloProbe::new(&server.base_url, DEFAULT_TIMEOUT).unwrap();

    let report = probe.probe().await.unwrap();

    assert_eq!(report.status, 200);
    assert_eq!(report.payload.message, HELLO_MESSAGE);
    assert!(report.content_type.starts_with("application/json"));
    assert!(report.url.ends_with("/api/hello"));
}

#[tokio::test]
async fn probe_reports_unreachable_for_closed_port() {
    let addr = closed_addr();
    let probe = HelloProbe::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();

    let err = probe.probe().await.unwrap_err();

    assert!(err.is_unreachable(), "expected unreachable, got {err:?}");
}

#[tokio::test]
async fn silent_target_times_out_as_unreachable() {
    let silent = SilentServer::spawn().await;
    let probe = HelloProbe::new(
        &format!("http://{}", silent.addr),
        Duration::from_millis(300),
    )
    .unwrap();

    let start = Instant::now();
    let err = probe.probe().await.unwrap_err();
    let elapsed = start.elapsed();

    assert!(err.is_unreachable(), "expected unreachable, got {err:?}");
    assert!(
        elapsed < Duration::from_millis(1500),
        "timed out after {elapsed:?}, expected about 300ms"
    );
}

#[test]
fn probe_can_run_outside_an_async_test() {
    let addr = closed_addr();
    let probe = HelloProbe::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();

    let result = tokio_test::block_on(probe.probe());

    assert!(matches!(result, Err(HarnessError::Unreachable { .. })));
}
