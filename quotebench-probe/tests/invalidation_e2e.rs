use quotebench_probe::api::ApiClient;
use quotebench_probe::config::PollPolicy;
use quotebench_probe::harness::{InvalidationProbe, ProbeError, ProbeState};
use server_http::{AppState, build_router};
use shared::TtlMs;
use shared::config::Config;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

fn server_config(invalidate_min_interval_ms: u64) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        http_port: 0,
        cache_ttl: TtlMs(60_000),
        invalidate_min_interval_ms,
    }
}

async fn start_server(config: Config) -> (String, tokio::sync::oneshot::Sender<()>, JoinHandle<()>) {
    let app = build_router(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await;
    });

    (format!("http://{addr}"), tx, server)
}

#[tokio::test]
async fn probe_measures_invalidation_latency_end_to_end() {
    let (base, shutdown_tx, handle) = start_server(server_config(0)).await;

    let mut probe = InvalidationProbe::new(ApiClient::new(base), PollPolicy::default());
    let report = probe
        .run(&CancellationToken::new())
        .await
        .expect("probe should reach Success against a live server");

    assert!(report.elapsed > Duration::ZERO);
    assert!(report.attempts >= 1);
    assert_eq!(probe.state(), ProbeState::Success);

    let rendered = probe.timeline().to_string();
    assert!(rendered.contains("Created and fetched initial quote"));
    assert!(rendered.contains("Cache invalidation event triggered."));
    assert!(rendered.contains("Updated data received"));

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn second_run_inside_the_rate_limit_window_fails_at_invalidation() {
    let (base, shutdown_tx, handle) = start_server(server_config(60_000)).await;

    let mut probe = InvalidationProbe::new(ApiClient::new(base), PollPolicy::default());
    let cancel = CancellationToken::new();

    probe.run(&cancel).await.expect("first run should succeed");

    let err = probe.run(&cancel).await.unwrap_err();
    match err {
        ProbeError::Invalidate(ref api_err) => assert!(api_err.is_rate_limited()),
        other => panic!("expected an invalidation-stage failure, got {other:?}"),
    }
    assert_eq!(probe.state(), ProbeState::Failed);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}
