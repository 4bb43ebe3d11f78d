use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "cardtext",
    version,
    about = "Convert vCard (.vcf) contact exports into readable, labelled text"
)]
pub struct Cli {
    /// vCard file to read
    pub input: PathBuf,

    /// Output file (default: stdout)
    pub output: Option<PathBuf>,

    /// Caption language: el or en (default: from config, else el)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Log filter, e.g. `debug` or `cardtext_rfc=trace` (default: from config)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Config file path (default: ./cardtext.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_and_output_are_positional() {
        let cli = Cli::try_parse_from(["cardtext", "in.vcf", "out.txt", "--locale", "en"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.vcf"));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.locale.as_deref(), Some("en"));
    }

    #[test]
    fn output_is_optional() {
        let cli = Cli::try_parse_from(["cardtext", "in.vcf"]).unwrap();
        assert!(cli.output.is_none());
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["cardtext"]).is_err());
    }
}
