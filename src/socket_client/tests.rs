//! Tests for the socket client.

use std::{
    io::{Read, Write},
    net::{SocketAddr, TcpListener},
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use rstest::{fixture, rstest};

use super::{Scheme, SocketClient, SocketClientConfig, SocketError, TlsOptions};

#[fixture]
fn tcp_listener() -> TcpListener {
    TcpListener::bind(("127.0.0.1", 0)).expect("bind ephemeral listener")
}

fn client_for(addr: SocketAddr) -> SocketClient {
    SocketClient::new(SocketClientConfig::tcp(addr.ip().to_string(), addr.port()))
}

/// Accept one connection and forward everything read until EOF.
fn spawn_sink(listener: TcpListener) -> (SocketAddr, mpsc::Receiver<Vec<u8>>) {
    let addr = listener.local_addr().expect("listener has address");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut received = Vec::new();
        stream.read_to_end(&mut received).expect("read to end");
        tx.send(received).expect("send received bytes");
    });
    (addr, rx)
}

fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    addr
}

#[rstest]
fn construction_does_not_connect(tcp_listener: TcpListener) {
    let client = client_for(tcp_listener.local_addr().unwrap());
    assert!(!client.is_connected());
    assert_eq!(client.scheme(), Scheme::Tcp);
}

#[rstest]
fn connection_handle_opens_lazily(tcp_listener: TcpListener) {
    let addr = tcp_listener.local_addr().unwrap();
    let mut client = client_for(addr);
    let connection = client.connection().expect("connect");
    assert_eq!(connection.peer_addr().expect("peer"), addr);
    assert!(!connection.is_tls());
    assert!(client.is_connected());
}

#[rstest]
fn write_delivers_bytes_unchanged(tcp_listener: TcpListener) {
    let (addr, rx) = spawn_sink(tcp_listener);
    let mut client = client_for(addr);
    let data = b"Hello World!";

    let written = client.write(data).expect("write");
    assert_eq!(written, data.len());
    client.close();

    let received = rx.recv_timeout(Duration::from_secs(2)).expect("received");
    assert_eq!(received, data);
}

#[rstest]
fn write_reuses_the_open_connection(tcp_listener: TcpListener) {
    let (addr, rx) = spawn_sink(tcp_listener);
    let mut client = client_for(addr);
    client.write(b"first ").expect("first write");
    client.write(b"second").expect("second write");
    drop(client);

    let received = rx.recv_timeout(Duration::from_secs(2)).expect("received");
    assert_eq!(received, b"first second");
}

#[rstest]
fn read_without_connection_fails() {
    let mut client = SocketClient::new(SocketClientConfig::tcp("127.0.0.1", 9));
    let err = client.read(16).expect_err("read must fail");
    assert!(matches!(err, SocketError::NotConnected { .. }));
}

#[rstest]
fn read_returns_peer_bytes(tcp_listener: TcpListener) {
    let addr = tcp_listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = tcp_listener.accept().expect("accept");
        let mut buf = [0u8; 4];
        stream.read_exact(&mut buf).expect("read ping");
        stream.write_all(b"pong").expect("write pong");
    });
    let mut client = client_for(addr);
    client.write(b"ping").expect("write");
    let mut reply = Vec::new();
    while reply.len() < 4 {
        let chunk = client.read(4 - reply.len()).expect("read");
        assert!(!chunk.is_empty(), "peer closed early");
        reply.extend(chunk);
    }
    assert_eq!(reply, b"pong");
}

#[rstest]
fn refused_connection_reports_endpoint() {
    let addr = refused_addr();
    let mut client = client_for(addr);
    let err = client.write(b"data").expect_err("connect must fail");
    let SocketError::Connect { endpoint, .. } = &err else {
        panic!("expected connect error, got {err:?}");
    };
    assert_eq!(endpoint.scheme, Scheme::Tcp);
    assert_eq!(endpoint.port, addr.port());
    assert!(err.to_string().contains(&format!("tcp://127.0.0.1:{}", addr.port())));
    assert!(!client.is_connected());
}

#[rstest]
fn close_without_connection_is_a_no_op() {
    let mut client = SocketClient::new(SocketClientConfig::tcp("127.0.0.1", 9));
    client.close();
    client.close();
    assert!(!client.is_connected());
}

#[rstest]
fn drop_closes_the_connection(tcp_listener: TcpListener) {
    let (addr, rx) = spawn_sink(tcp_listener);
    let mut client = client_for(addr);
    client.connection().expect("connect");
    drop(client);
    // The sink only reports after seeing EOF.
    let received = rx.recv_timeout(Duration::from_secs(2)).expect("eof seen");
    assert!(received.is_empty());
}

#[rstest]
fn tls_handshake_respects_timeout(tcp_listener: TcpListener) {
    let addr = tcp_listener.local_addr().unwrap();
    thread::spawn(move || {
        let (stream, _) = tcp_listener.accept().expect("accept connection");
        // Keep the TCP connection open without speaking TLS.
        thread::sleep(Duration::from_secs(2));
        drop(stream);
    });

    let options = TlsOptions {
        verify_peer: false,
        ..TlsOptions::new("localhost")
    };
    let config = SocketClientConfig::tls(addr.ip().to_string(), addr.port(), options)
        .with_timeouts(Duration::from_millis(250), Duration::from_millis(250));
    let mut client = SocketClient::new(config);

    let start = Instant::now();
    let err = client.write(b"data").expect_err("handshake must fail");
    let elapsed = start.elapsed();

    assert!(matches!(err, SocketError::Connect { .. }));
    assert_eq!(err.endpoint().scheme, Scheme::Tls);
    assert!(
        elapsed < Duration::from_secs(2),
        "handshake should respect timeout, elapsed {:?}",
        elapsed
    );
}

#[rstest]
fn failed_write_discards_the_connection(tcp_listener: TcpListener) {
    let addr = tcp_listener.local_addr().unwrap();
    let (closed_tx, closed_rx) = mpsc::channel();
    thread::spawn(move || {
        let (stream, _) = tcp_listener.accept().expect("accept connection");
        drop(stream);
        let _ = closed_tx.send(());
    });
    let mut client = client_for(addr);
    client.connection().expect("connect");
    closed_rx
        .recv_timeout(Duration::from_secs(2))
        .expect("peer closed");

    // The first writes after the peer hangs up can still land in the buffer.
    let err = (0..100)
        .find_map(|_| {
            let outcome = client.write(b"ping").err();
            if outcome.is_none() {
                thread::sleep(Duration::from_millis(10));
            }
            outcome
        })
        .expect("peer close surfaces as a write error");

    assert!(matches!(err, SocketError::Io { .. }), "{err:?}");
    assert!(!client.is_connected());
}
