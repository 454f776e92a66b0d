// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "frameless-window")]
#[command(about = "Borderless rounded window with custom controls", long_about = None)]
pub struct Cli {
    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["frameless-window"]);
        assert_eq!(cli.width, 800);
        assert_eq!(cli.height, 600);
    }

    #[test]
    fn test_explicit_size() {
        let cli = Cli::parse_from(["frameless-window", "--width", "400", "--height", "300"]);
        assert_eq!(cli.width, 400);
        assert_eq!(cli.height, 300);
    }
}
