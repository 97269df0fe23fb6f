use std::time::Duration;

use httpmock::prelude::*;
use hello_gateway::{
    AppActor, Backend, Config, NetworkActor, NetworkCommand, NetworkResponse, RenderState,
    UiEvent,
};
use tokio::sync::mpsc;

struct Harness {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
}

impl Harness {
    fn start(gateway_url: String) -> Self {
        let config = Config {
            gateway_url,
            ..Config::default()
        };

        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
        let (render_tx, render_rx) = mpsc::unbounded_channel::<RenderState>();

        tokio::spawn(NetworkActor::new(&config, net_resp_tx).run(net_cmd_rx));
        tokio::spawn(AppActor::new(config.gateway_url.clone(), net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        Harness { ui_tx, render_rx }
    }

    async fn next(&mut self) -> RenderState {
        tokio::time::timeout(Duration::from_secs(5), self.render_rx.recv())
            .await
            .expect("timed out waiting for render state")
            .expect("app actor stopped")
    }

    /// Wait until the given slot settles
    async fn settled(&mut self, backend: Backend) -> RenderState {
        loop {
            let state = self.next().await;
            if !state.slot(backend).pending {
                return state;
            }
        }
    }
}

#[tokio::test]
async fn press_runs_full_cycle() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/java/hello");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"message": "Hello from Spring Boot"}"#);
    });

    let mut h = Harness::start(server.base_url());

    let initial = h.next().await;
    assert!(!initial.spring.pending);
    assert_eq!(initial.spring.text, "");

    h.ui_tx.send(UiEvent::Press(Backend::SpringBoot)).unwrap();
    let pending = h.next().await;
    assert!(pending.spring.pending);
    assert_eq!(pending.spring.text, "");

    let done = h.settled(Backend::SpringBoot).await;
    assert_eq!(done.spring.text, "Hello from Spring Boot");
    assert!(done.spring.elapsed_ms.is_some());
}

#[tokio::test]
async fn failure_then_retrigger_clears_text() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/python/hello");
        then.status(500);
    });

    let mut h = Harness::start(server.base_url());
    h.next().await;

    h.ui_tx.send(UiEvent::Press(Backend::FastApi)).unwrap();
    let done = h.settled(Backend::FastApi).await;
    assert_eq!(done.fastapi.text, "Failed to connect to FastAPI.");

    h.ui_tx.send(UiEvent::Press(Backend::FastApi)).unwrap();
    let pending = h.next().await;
    assert!(pending.fastapi.pending);
    assert_eq!(pending.fastapi.text, "");

    let done = h.settled(Backend::FastApi).await;
    assert_eq!(done.fastapi.text, "Failed to connect to FastAPI.");
}

#[tokio::test]
async fn slots_do_not_influence_each_other() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/java/hello");
        then.status(200).body(r#"{"message": "Hello from Spring Boot!"}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/python/hello");
        then.status(200).body("not json");
    });

    let mut h = Harness::start(server.base_url());
    h.next().await;

    h.ui_tx.send(UiEvent::Press(Backend::SpringBoot)).unwrap();
    let state = h.settled(Backend::SpringBoot).await;
    assert_eq!(state.spring.text, "Hello from Spring Boot!");
    assert!(!state.fastapi.pending);
    assert_eq!(state.fastapi.text, "");

    h.ui_tx.send(UiEvent::Press(Backend::FastApi)).unwrap();
    let pending = h.next().await;
    assert!(pending.fastapi.pending);
    assert!(!pending.spring.pending);
    assert_eq!(pending.spring.text, "Hello from Spring Boot!");

    let state = h.settled(Backend::FastApi).await;
    assert_eq!(state.fastapi.text, "Failed to connect to FastAPI.");
    assert_eq!(state.spring.text, "Hello from Spring Boot!");
}

#[tokio::test]
async fn health_check_reports_both_backends() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/java/health");
        then.status(200).body("OK");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/python/health");
        then.status(200).body(r#"{"status": "ok"}"#);
    });

    let mut h = Harness::start(server.base_url());
    h.next().await;

    h.ui_tx.send(UiEvent::CheckHealth).unwrap();
    loop {
        let state = h.next().await;
        if state.spring.health == hello_gateway::HealthStatus::Up
            && state.fastapi.health == hello_gateway::HealthStatus::Up
        {
            assert_eq!(state.spring.text, "");
            break;
        }
    }
}

#[tokio::test]
async fn quit_stops_the_app_actor() {
    let mut h = Harness::start("http://127.0.0.1:1".into());
    h.next().await;

    h.ui_tx.send(UiEvent::Quit).unwrap();
    let closed = tokio::time::timeout(Duration::from_secs(5), h.render_rx.recv())
        .await
        .expect("app actor did not stop");
    assert!(closed.is_none());
}
