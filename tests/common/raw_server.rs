//! Hand-written responders for wire details axum does not produce: a custom
//! reason phrase, and TLS behind a self-signed certificate.
#![allow(dead_code)]

use std::io::{self, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;

use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ServerConfig, ServerConnection, StreamOwned};

const CERT_PEM: &[u8] = include_bytes!("../fixtures/self_signed.crt");
const KEY_PEM: &[u8] = include_bytes!("../fixtures/self_signed.key");

/// Answer every plain connection with `response`, byte for byte
pub fn start_plain(response: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let _ = answer(&mut stream, response);
        }
    });

    format!("http://{addr}/")
}

/// Same as [`start_plain`], over TLS with the self-signed fixture certificate
pub fn start_tls(response: &'static [u8]) -> String {
    let config = Arc::new(tls_config());
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let Ok(conn) = ServerConnection::new(config.clone()) else {
                continue;
            };
            let mut tls = StreamOwned::new(conn, stream);
            // a client that rejects the certificate fails the handshake here
            if answer(&mut tls, response).is_ok() {
                tls.conn.send_close_notify();
                let _ = tls.flush();
            }
        }
    });

    format!("https://{addr}/")
}

/// Read the request head, then write the canned response
fn answer<S: Read + Write>(stream: &mut S, response: &[u8]) -> io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }
    stream.write_all(response)?;
    stream.flush()
}

fn tls_config() -> ServerConfig {
    let certs = CertificateDer::pem_slice_iter(CERT_PEM)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let key = PrivateKeyDer::from_pem_slice(KEY_PEM).unwrap();

    ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .unwrap()
}
