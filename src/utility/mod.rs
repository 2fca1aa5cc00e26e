pub mod http;
pub mod ip_details;
pub mod ip_detector;
