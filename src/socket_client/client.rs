//! The lazily-connecting stream client.

use std::io::{self, Read, Write};

use log::{debug, warn};

use super::{
    config::{Endpoint, Scheme, SocketClientConfig},
    connection::{ActiveConnection, connect},
    error::SocketError,
};

/// Blocking byte pipe over one TCP or TLS connection.
///
/// Construction never touches the network. The first [`write`](Self::write)
/// or [`connection`](Self::connection) call connects; the connection then
/// stays open until [`close`](Self::close), an I/O error, or drop. At most
/// one connection exists per client.
#[derive(Debug)]
pub struct SocketClient {
    config: SocketClientConfig,
    connection: Option<ActiveConnection>,
}

impl SocketClient {
    pub fn new(config: SocketClientConfig) -> Self {
        Self {
            config,
            connection: None,
        }
    }

    pub fn config(&self) -> &SocketClientConfig {
        &self.config
    }

    pub fn scheme(&self) -> Scheme {
        self.config.scheme()
    }

    pub fn endpoint(&self) -> Endpoint {
        self.config.endpoint()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Return the live connection, establishing it if necessary.
    ///
    /// The client keeps ownership; callers may inspect the stream but must
    /// not assume it outlives the next [`close`](Self::close).
    ///
    /// # Errors
    ///
    /// Returns [`SocketError::Connect`] when the host cannot be reached or
    /// the TLS handshake fails.
    pub fn connection(&mut self) -> Result<&mut ActiveConnection, SocketError> {
        if self.connection.is_none() {
            let endpoint = self.endpoint();
            let connection = connect(&self.config).map_err(|source| {
                warn!("SocketClient failed to connect to {endpoint}: {source}");
                SocketError::Connect {
                    endpoint: endpoint.clone(),
                    source,
                }
            })?;
            debug!("SocketClient connected to {endpoint}");
            self.connection = Some(connection);
        }
        self.connection
            .as_mut()
            .ok_or_else(|| SocketError::NotConnected {
                endpoint: self.config.endpoint(),
            })
    }

    /// Write all of `data`, connecting first if needed.
    ///
    /// Returns the number of bytes written, which always equals
    /// `data.len()` on success. Any failure discards the connection.
    ///
    /// # Errors
    ///
    /// - [`SocketError::Connect`] if no connection could be established.
    /// - [`SocketError::ShortWrite`] if the peer stops accepting bytes.
    /// - [`SocketError::Io`] for any other write failure.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, SocketError> {
        let connection = self.connection()?;
        let result = write_fully(connection, data);
        match result {
            Ok(written) if written == data.len() => Ok(written),
            Ok(written) => Err(self.fail(|endpoint| SocketError::ShortWrite {
                endpoint,
                written,
                expected: data.len(),
            })),
            Err(source) => Err(self.fail(|endpoint| SocketError::Io { endpoint, source })),
        }
    }

    /// Read at most `max_bytes` from the open connection.
    ///
    /// Performs a single read; an empty vector means the peer closed the
    /// stream.
    ///
    /// # Errors
    ///
    /// - [`SocketError::NotConnected`] if nothing has been written yet.
    /// - [`SocketError::Io`] if the read fails or times out.
    pub fn read(&mut self, max_bytes: usize) -> Result<Vec<u8>, SocketError> {
        let Some(connection) = self.connection.as_mut() else {
            return Err(SocketError::NotConnected {
                endpoint: self.config.endpoint(),
            });
        };
        let mut buf = vec![0u8; max_bytes];
        let result = loop {
            match connection.read(&mut buf) {
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                other => break other,
            }
        };
        match result {
            Ok(n) => {
                buf.truncate(n);
                Ok(buf)
            }
            Err(source) => Err(self.fail(|endpoint| SocketError::Io { endpoint, source })),
        }
    }

    /// Shut down the connection if one is open. Idempotent.
    pub fn close(&mut self) {
        let Some(mut connection) = self.connection.take() else {
            return;
        };
        if let Err(err) = connection.shutdown() {
            // Peers that closed first report NotConnected here.
            if err.kind() != io::ErrorKind::NotConnected {
                debug!("SocketClient shutdown of {} failed: {err}", self.endpoint());
            }
        }
        debug!("SocketClient closed connection to {}", self.endpoint());
    }

    fn fail(&mut self, make: impl FnOnce(Endpoint) -> SocketError) -> SocketError {
        self.connection = None;
        let err = make(self.endpoint());
        warn!("SocketClient {err}");
        err
    }
}

fn write_fully(writer: &mut impl Write, data: &[u8]) -> io::Result<usize> {
    let mut written = 0;
    while let Some(remaining) = data.get(written..).filter(|rest| !rest.is_empty()) {
        match writer.write(remaining) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    writer.flush()?;
    Ok(written)
}

impl Drop for SocketClient {
    fn drop(&mut self) {
        self.close();
    }
}
