use clap::Parser;
use scaffold::model::Component;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scaffold", bin_name = "scaffold", version)]
#[command(about = "Scaffold platforms and features for your integration", long_about = None)]
pub struct Cli {
    /// Component to scaffold
    #[arg(value_enum, required_unless_present = "list")]
    pub component: Option<Component>,

    /// Overwrite the component file if it already exists
    #[arg(long)]
    pub force: bool,

    /// List available components and exit
    #[arg(long)]
    pub list: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_component_with_force() {
        let cli = Cli::try_parse_from(["scaffold", "binary_sensor", "--force"]).unwrap();
        assert_eq!(cli.component, Some(Component::BinarySensor));
        assert!(cli.force);
        assert!(!cli.list);
    }

    #[test]
    fn test_list_needs_no_component() {
        let cli = Cli::try_parse_from(["scaffold", "--list"]).unwrap();
        assert!(cli.list);
        assert_eq!(cli.component, None);
    }

    #[test]
    fn test_component_required_without_list() {
        let err = Cli::try_parse_from(["scaffold"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_component_rejected() {
        let err = Cli::try_parse_from(["scaffold", "climate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_directory_flag() {
        let cli = Cli::try_parse_from(["scaffold", "-C", "/tmp/project", "api", "-v"]).unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp/project")));
        assert_eq!(cli.component, Some(Component::Api));
        assert!(cli.verbose);
    }
}
