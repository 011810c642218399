#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub show_banner: bool,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_banner: true,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Filter directive for the log subscriber; each `-v` lowers the bar
    /// by one level, starting at warnings.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
