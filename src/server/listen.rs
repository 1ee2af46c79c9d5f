use std::{io, net::SocketAddr};
use tokio::net::{TcpListener, TcpSocket};

const BACKLOG: u32 = 1024;

/// Bind a listener with address reuse, and port reuse where the platform supports it,
/// so a restarted process can take the port over immediately.
pub fn bind_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    #[cfg(all(unix, not(any(target_os = "solaris", target_os = "illumos"))))]
    socket.set_reuseport(true)?;
    socket.bind(addr)?;
    socket.listen(BACKLOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, SocketAddrV4};

    #[tokio::test]
    async fn binds_an_ephemeral_port() {
        let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0));
        let listener = bind_listener(addr).unwrap();
        let local = listener.local_addr().unwrap();
        assert_ne!(local.port(), 0);
        assert!(local.ip().is_loopback());
    }
}
