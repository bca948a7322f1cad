//! Fetching the image list from a local HTTP server.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use image_explorer::view::{LIST_ID, NOTICE_ID, thumbnail_id};
use image_explorer::{
    DATA_IMAGES_URL, ExplorerConfig, ExplorerState, FetchError, HttpImageSource, ImageDescriptor,
    ImageExplorer, ImageSource,
};
use scopedom::Element;
use tokio::net::TcpListener;
use url::Url;

/// Serve `body` with `status` to every request. Returns the endpoint URL.
async fn serve(status: StatusCode, body: &'static str) -> Url {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let io = TokioIo::new(stream);
            tokio::spawn(async move {
                let service = service_fn(move |_req: Request<Incoming>| async move {
                    Ok::<_, Infallible>(
                        Response::builder()
                            .status(status)
                            .header("Content-Type", "application/json")
                            .body(Full::new(Bytes::from(body)))
                            .unwrap(),
                    )
                });
                let _ = http1::Builder::new().serve_connection(io, service).await;
            });
        }
    });

    Url::parse(&format!("http://{addr}/site/1/images/")).unwrap()
}

/// Accept connections and never answer them. Returns the endpoint URL.
async fn serve_silence() -> Url {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _held = stream;
                std::future::pending::<()>().await;
            });
        }
    });

    Url::parse(&format!("http://{addr}/images")).unwrap()
}

const LISTING: &str = r#"[
    {"link": "/media/harbor.jpg", "name": "harbor"},
    {"link": "/media/untitled.jpg"}
]"#;

#[tokio::test]
async fn test_fetches_listing() {
    let url = serve(StatusCode::OK, LISTING).await;
    let images = HttpImageSource::new(url).fetch_images().await.unwrap();

    assert_eq!(
        images,
        vec![
            ImageDescriptor::new("/media/harbor.jpg", "harbor"),
            ImageDescriptor::new("/media/untitled.jpg", ""),
        ]
    );
}

#[tokio::test]
async fn test_error_status_is_http_error() {
    let url = serve(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let err = HttpImageSource::new(url).fetch_images().await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert!(matches!(err, FetchError::Http { message, .. } if message == "boom"));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let url = serve(StatusCode::OK, "<html>not json</html>").await;
    let err = HttpImageSource::new(url).fetch_images().await.unwrap_err();

    assert!(matches!(err, FetchError::Parse { .. }));
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/images")).unwrap();
    let err = HttpImageSource::new(url).fetch_images().await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_preconfigured_client_timeout_applies() {
    let url = serve_silence().await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let source = HttpImageSource::new(url.clone()).with_client(client);
    assert_eq!(source.url(), &url);

    let err = source.fetch_images().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(e) if e.is_timeout()));
}

#[tokio::test]
async fn test_config_timeout_applies() {
    let url = serve_silence().await;
    let config = ExplorerConfig::new(url.as_str()).timeout(Duration::from_millis(200));

    let err = HttpImageSource::from_config(&config)
        .unwrap()
        .fetch_images()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network(e) if e.is_timeout()));
}

// ============================================================================
// Widget over HTTP
// ============================================================================

fn host(url: &Url) -> Element {
    Element::new("image-explorer")
        .id("picker")
        .attr(DATA_IMAGES_URL, url.as_str())
}

#[tokio::test]
async fn test_explorer_renders_served_listing() {
    let url = serve(StatusCode::OK, LISTING).await;
    let mut explorer = ImageExplorer::new();
    explorer.initialize(&host(&url)).unwrap();

    explorer.show(|_| {}).unwrap();
    explorer.settle().await;

    let root = explorer.shadow_root().unwrap();
    assert_eq!(root.find(LIST_ID).unwrap().content.children().len(), 3);
    let unnamed = root.find(&thumbnail_id(1)).unwrap();
    assert_eq!(unnamed.get_attr("src"), Some("/media/untitled.jpg"));
    assert_eq!(unnamed.get_attr("alt"), Some(""));
}

#[tokio::test]
async fn test_explorer_survives_server_error() {
    let url = serve(StatusCode::NOT_FOUND, "missing").await;
    let picks: Arc<Mutex<Vec<ImageDescriptor>>> = Arc::default();
    let sink = picks.clone();

    let mut explorer = ImageExplorer::new();
    explorer.initialize(&host(&url)).unwrap();
    explorer
        .show(move |image| sink.lock().unwrap().push(image))
        .unwrap();
    explorer.settle().await;

    let root = explorer.shadow_root().unwrap();
    assert!(root.find(&thumbnail_id(0)).is_none());
    assert!(root.find(NOTICE_ID).is_some());
    assert!(picks.lock().unwrap().is_empty());
    assert_eq!(explorer.state(), ExplorerState::Open);
}

#[tokio::test]
async fn test_explorer_without_url_attribute_shows_notice() {
    let mut explorer = ImageExplorer::new();
    explorer
        .initialize(&Element::new("image-explorer").id("bare"))
        .unwrap();

    explorer.show(|_| {}).unwrap();
    explorer.settle().await;

    assert!(explorer.shadow_root().unwrap().find(NOTICE_ID).is_some());
}

#[tokio::test]
async fn test_explorer_timeout_shows_notice() {
    let url = serve_silence().await;
    let picks: Arc<Mutex<Vec<ImageDescriptor>>> = Arc::default();
    let sink = picks.clone();

    let mut explorer = ImageExplorer::new();
    let host = host(&url);
    let config = ExplorerConfig::from_host(&host).timeout(Duration::from_millis(200));
    explorer.initialize_with_config(&host, config).unwrap();
    explorer
        .show(move |image| sink.lock().unwrap().push(image))
        .unwrap();
    explorer.settle().await;

    let root = explorer.shadow_root().unwrap();
    assert!(root.find(NOTICE_ID).is_some());
    assert!(root.find(&thumbnail_id(0)).is_none());
    assert!(picks.lock().unwrap().is_empty());
    assert_eq!(explorer.state(), ExplorerState::Open);
}
