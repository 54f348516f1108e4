//! Connection establishment and the live stream wrapper.

use std::{
    io::{self, Read, Write},
    net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs},
    time::Duration,
};

use native_tls::TlsStream;

use super::config::{SocketClientConfig, TlsOptions};

/// Live stream owned by a [`SocketClient`](super::SocketClient).
#[derive(Debug)]
pub enum ActiveConnection {
    PlainTcp(TcpStream),
    Tls(Box<TlsStream<TcpStream>>),
}

impl ActiveConnection {
    fn tcp(&self) -> &TcpStream {
        match self {
            ActiveConnection::PlainTcp(stream) => stream,
            ActiveConnection::Tls(stream) => stream.get_ref(),
        }
    }

    /// Whether the stream is TLS-wrapped.
    pub fn is_tls(&self) -> bool {
        matches!(self, ActiveConnection::Tls(_))
    }

    /// Address of the remote peer.
    pub fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.tcp().peer_addr()
    }

    /// Address of the local end.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.tcp().local_addr()
    }

    /// Apply `timeout` to both reads and writes.
    pub fn set_io_timeout(&self, timeout: Duration) -> io::Result<()> {
        let tcp = self.tcp();
        tcp.set_read_timeout(Some(timeout))?;
        tcp.set_write_timeout(Some(timeout))
    }

    /// Close the stream, sending a TLS close_notify first when applicable.
    pub fn shutdown(&mut self) -> io::Result<()> {
        match self {
            ActiveConnection::PlainTcp(stream) => stream.shutdown(Shutdown::Both),
            ActiveConnection::Tls(stream) => {
                // Peers that already hung up reject close_notify; the TCP
                // shutdown below still releases the socket.
                let _ = stream.shutdown();
                stream.get_ref().shutdown(Shutdown::Both)
            }
        }
    }
}

impl Read for ActiveConnection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ActiveConnection::PlainTcp(stream) => stream.read(buf),
            ActiveConnection::Tls(stream) => stream.read(buf),
        }
    }
}

impl Write for ActiveConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ActiveConnection::PlainTcp(stream) => stream.write(buf),
            ActiveConnection::Tls(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ActiveConnection::PlainTcp(stream) => stream.flush(),
            ActiveConnection::Tls(stream) => stream.flush(),
        }
    }
}

fn connect_tcp(host: &str, port: u16, timeout: Duration) -> io::Result<TcpStream> {
    let addrs: Vec<SocketAddr> = (host, port).to_socket_addrs()?.collect();
    let mut last_err = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => {
                stream.set_nonblocking(false)?;
                return Ok(stream);
            }
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no addresses resolved for {host}:{port}"),
        )
    }))
}

fn handshake(stream: TcpStream, tls: &TlsOptions, timeout: Duration) -> io::Result<ActiveConnection> {
    let connector = tls.connector()?;
    // Bound the handshake so a peer that never speaks TLS cannot stall us.
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))?;
    let stream = connector
        .connect(&tls.domain, stream)
        .map_err(io::Error::other)?;
    Ok(ActiveConnection::Tls(Box::new(stream)))
}

/// Establish a connection described by `config`.
pub(super) fn connect(config: &SocketClientConfig) -> io::Result<ActiveConnection> {
    let stream = connect_tcp(&config.host, config.port, config.connect_timeout)?;
    let connection = match &config.tls {
        Some(tls) => handshake(stream, tls, config.connect_timeout)?,
        None => ActiveConnection::PlainTcp(stream),
    };
    connection.set_io_timeout(config.io_timeout)?;
    Ok(connection)
}
