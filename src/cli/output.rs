#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_id(id: &str) -> Self {
        match id {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub use_color: bool,
    pub verbose: bool,
}

/// Resolve the effective color setting from the `--no-color` flag, the
/// configured mode (auto|always|never), NO_COLOR, and whether stdout is a
/// terminal.
pub fn resolve_color(color_flag: bool, mode: &str) -> bool {
    if !color_flag || mode == "never" {
        return false;
    }
    if mode == "always" {
        return true;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty_stdout()
}

fn atty_stdout() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_id() {
        assert_eq!(OutputFormat::from_id("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_id("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_id("anything"), OutputFormat::Text);
    }

    #[test]
    fn no_color_flag_wins() {
        assert!(!resolve_color(false, "always"));
    }

    #[test]
    fn never_mode_disables_color() {
        assert!(!resolve_color(true, "never"));
    }

    #[test]
    fn always_mode_forces_color() {
        assert!(resolve_color(true, "always"));
    }
}
