//! Printer transport. Rendering decides WHAT to print; these adapters only
//! move bytes. Most thermal printers accept raw data over TCP port 9100.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::info;

use crate::error::AppError;

#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send rendered receipt bytes to the device.
    async fn print(&self, data: &[u8]) -> Result<(), AppError>;
}

#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    pub fn new(addr: &str) -> Result<Self, AppError> {
        let addr = addr
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid printer address: {addr}")))?;

        Ok(Self {
            addr,
            timeout: Duration::from_secs(5),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Printer for NetworkPrinter {
    async fn print(&self, data: &[u8]) -> Result<(), AppError> {
        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| AppError::Internal(format!("printer connection timeout: {}", self.addr)))?
            .map_err(|err| AppError::Internal(format!("printer unreachable {}: {err}", self.addr)))?;

        stream
            .write_all(data)
            .await
            .map_err(|err| AppError::Internal(format!("printer write failed: {err}")))?;
        stream
            .flush()
            .await
            .map_err(|err| AppError::Internal(format!("printer flush failed: {err}")))?;

        info!(addr = %self.addr, bytes = data.len(), "receipt sent to printer");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    use super::{NetworkPrinter, Printer};

    #[tokio::test]
    async fn sends_the_exact_bytes_to_the_device() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let printer = NetworkPrinter::new(&addr.to_string()).unwrap();
        printer.print(b"RECEIPT TRKA1B2\n").await.unwrap();

        let received = server.await.unwrap();
        assert_eq!(received, b"RECEIPT TRKA1B2\n");
    }

    #[test]
    fn rejects_unparseable_addresses() {
        assert!(NetworkPrinter::new("not-an-address").is_err());
    }
}
