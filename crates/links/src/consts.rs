use regex::Regex;
use std::sync::LazyLock;

const COMPONENT: &str = "(0|[1-9][0-9]*)";

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Either `major.minor` or `major.minor.patch`, no leading zeros and nothing else.
regex!(VERSION_REGEX, format!(r"^{0}\.{0}(?:\.{0})?$", COMPONENT).as_str());
