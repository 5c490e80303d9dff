use clap::Parser;
use std::path::PathBuf;

/// Scan a directory of projects and generate technical documents.
#[derive(Parser, Debug)]
#[command(name = "projdoc", version, about)]
pub struct Args {
    /// Directory containing the projects to analyze
    #[arg(long, value_name = "PATH")]
    pub project_dir: PathBuf,

    /// Directory the generated documents are written to
    #[arg(long, value_name = "PATH")]
    pub output_dir: PathBuf,

    /// Analyze only this project (a subdirectory of --project-dir)
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_args() {
        let args = Args::try_parse_from([
            "projdoc",
            "--project-dir",
            "/tmp/projects",
            "--output-dir",
            "/tmp/docs",
        ])
        .unwrap();
        assert_eq!(args.project_dir, PathBuf::from("/tmp/projects"));
        assert_eq!(args.output_dir, PathBuf::from("/tmp/docs"));
        assert!(args.project.is_none());
    }

    #[test]
    fn test_missing_output_dir_rejected() {
        let result = Args::try_parse_from(["projdoc", "--project-dir", "/tmp/projects"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_project() {
        let args = Args::try_parse_from([
            "projdoc",
            "--project-dir",
            "/tmp/projects",
            "--output-dir",
            "/tmp/docs",
            "--project",
            "gateway",
        ])
        .unwrap();
        assert_eq!(args.project.as_deref(), Some("gateway"));
    }
}
