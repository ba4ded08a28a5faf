//! Parsed configuration trees
//!
//! - `section_tree`: arena of sections rooted at a synthetic depth 0 entry
//! - `parser`: indentation parser with verbatim (banner) block support

pub mod parser;
pub mod section_tree;

/// Unindented `banner <kind> <body>` line
pub const BANNER_REGEX: &str = r"^banner\s+(?P<kind>\S+)\s+(?P<body>\S.*)$";

/// IOS prints the banner delimiter as the two characters `^C`
pub const CONTROL_C_DELIMITER: &str = "^C";

pub const BANNER_KINDS: phf::Set<&'static str> = phf::phf_set! {
    "config-save",
    "exec",
    "incoming",
    "login",
    "motd",
    "prompt-timeout",
    "slip-ppp",
};
