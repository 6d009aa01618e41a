//! Terminal output with colored `[module]` prefixes. The build is a
//! short-lived batch run, so this stays deliberately small: one line per
//! emitted artifact, no progress bars.

use colored::{ColoredString, Colorize};

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("feed"; "feed.xml ({} items)", items);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Writes one prefixed line to stdout.
pub fn log(module: &str, message: &str) {
    println!("{} {}", colorize_prefix(module), message);
}

fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{}]", module);
    match module {
        "error" => prefix.bright_red().bold(),
        "build" => prefix.bright_green().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_prefix_wraps_module_name() {
        // Strip color codes by comparing against the uncolored content.
        let prefix = colorize_prefix("sitemap");
        assert!(prefix.to_string().contains("[sitemap]"));
    }
}
