// Project imports
use crate::utility::ip_detector::types::IpService;

/// IP-echo services, queried in this order.
pub const IP_ECHO_SERVICES: [IpService; 5] = [
    IpService {
        base_url: "https://api.ipify.org",
        path: "",
    },
    IpService {
        base_url: "https://ipinfo.io",
        path: "/ip",
    },
    IpService {
        base_url: "https://icanhazip.com",
        path: "",
    },
    IpService {
        base_url: "https://ident.me",
        path: "",
    },
    IpService {
        base_url: "https://checkip.amazonaws.com",
        path: "",
    },
];

/// Number of dot-separated components in a dotted-quad address.
pub const DOTTED_QUAD_PARTS: usize = 4;
