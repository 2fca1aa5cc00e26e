pub const TITLE: &str = "🌐 What is My IP Address";
pub const TITLE_RULE_WIDTH: usize = 30;

pub const DETAILS_HEADING: &str = "📋 IP Details:";
pub const DETAILS_RULE_WIDTH: usize = 20;

/// Keys that make up the location line; all must be present.
pub const LOCATION_KEYS: [&str; 3] = ["city", "region", "country"];
pub const LOCATION_LABEL: &str = "📍 Location";

/// Independent detail lines as `(key, label)`, printed in this order when
/// the key is present.
pub const DETAIL_FIELDS: [(&str, &str); 3] = [
    ("org", "🏢 ISP/Organization"),
    ("timezone", "🕐 Timezone"),
    ("hostname", "🌐 Hostname"),
];
