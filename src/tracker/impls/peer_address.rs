use std::fmt;
use std::fmt::Formatter;
use std::net::Ipv4Addr;
use crate::tracker::structs::peer_address::PeerAddress;

impl PeerAddress {
    pub fn new(ip: Ipv4Addr, port: u16) -> PeerAddress {
        let octets = ip.octets();
        let port_bytes = port.to_be_bytes();
        PeerAddress([octets[0], octets[1], octets[2], octets[3], port_bytes[0], port_bytes[1]])
    }

    #[inline]
    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::new(self.0[0], self.0[1], self.0[2], self.0[3])
    }

    #[inline]
    pub fn port(&self) -> u16 {
        u16::from_be_bytes([self.0[4], self.0[5]])
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.ip(), self.port())
    }
}
