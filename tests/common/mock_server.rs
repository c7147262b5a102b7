//! Local HTTP server for exercising the real transport.
//!
//! Binds a random port before spawning, so requests queue in the backlog
//! until the runtime thread starts accepting.

use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Router,
};

/// Start the server on its own thread and return its base URL
pub fn start() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, router()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// A URL nothing is listening on
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

fn router() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/redirect", get(redirect))
        .route("/missing", get(missing))
        .route("/echo", any(echo))
}

async fn hello() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "hi")
}

async fn redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/hello")], "moved")
}

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nope")
}

/// Reflects what arrived, one `key=value` per line
async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-")
            .to_string()
    };
    format!(
        "method={method}\ncontent-type={}\nuser-agent={}\nauthorization={}\nx-test={}\nbody={}\n",
        header("content-type"),
        header("user-agent"),
        header("authorization"),
        header("x-test"),
        String::from_utf8_lossy(&body)
    )
}
