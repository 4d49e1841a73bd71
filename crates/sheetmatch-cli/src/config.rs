//! TOML job files and their merge with command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use sheetmatch_output::OutputFormat;

use crate::cli::JoinArgs;

/// A saved join job.
///
/// ```toml
/// master = "orders.csv"
/// lookup = "customers.csv"
/// master_key = "Customer ID"
/// lookup_key = "id"
/// append = ["Region", "Tier"]
/// fuzzy = true
/// output = "orders_matched.csv"
/// ```
///
/// Relative paths are resolved against the job file's directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    pub master: Option<PathBuf>,
    pub lookup: Option<PathBuf>,
    pub master_sheet: Option<String>,
    pub lookup_sheet: Option<String>,
    pub master_key: Option<String>,
    pub lookup_key: Option<String>,
    #[serde(default)]
    pub append: Vec<String>,
    pub fuzzy: Option<bool>,
    pub infer_types: Option<bool>,
    pub output: Option<PathBuf>,
}

impl JobFile {
    /// Parses a job file and resolves its relative paths.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read job file {}", path.display()))?;
        let mut job: Self =
            toml::from_str(&text).with_context(|| format!("parse job file {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for slot in [&mut job.master, &mut job.lookup, &mut job.output] {
            let resolved = slot
                .as_deref()
                .filter(|p| p.is_relative())
                .map(|p| base.join(p));
            if resolved.is_some() {
                *slot = resolved;
            }
        }
        Ok(job)
    }
}

/// Everything a join run needs, after flags and job file are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinPlan {
    pub master: PathBuf,
    pub lookup: PathBuf,
    pub master_sheet: Option<String>,
    pub lookup_sheet: Option<String>,
    pub master_key: Option<String>,
    pub lookup_key: Option<String>,
    pub append: Vec<String>,
    pub fuzzy: bool,
    pub infer_types: bool,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl JoinPlan {
    /// Merges flags over the job file named by `--config`, if any.
    pub fn from_args(args: &JoinArgs) -> Result<Self> {
        let job = match &args.config {
            Some(path) => JobFile::load(path)?,
            None => JobFile::default(),
        };
        Self::merge(args, job)
    }

    /// Flags win over the job file; the job file wins over defaults.
    pub fn merge(args: &JoinArgs, job: JobFile) -> Result<Self> {
        let Some(master) = args.master.clone().or(job.master) else {
            bail!("no master table given (pass MASTER or set `master` in the job file)");
        };
        let Some(lookup) = args.lookup.clone().or(job.lookup) else {
            bail!("no lookup table given (pass LOOKUP or set `lookup` in the job file)");
        };
        let append: Vec<String> = if args.append.is_empty() {
            job.append
        } else {
            args.append.clone()
        };
        Ok(Self {
            master,
            lookup,
            master_sheet: args.master_sheet.clone().or(job.master_sheet),
            lookup_sheet: args.lookup_sheet.clone().or(job.lookup_sheet),
            master_key: non_blank(args.master_key.clone().or(job.master_key)),
            lookup_key: non_blank(args.lookup_key.clone().or(job.lookup_key)),
            append: append
                .into_iter()
                .map(|column| column.trim().to_string())
                .filter(|column| !column.is_empty())
                .collect(),
            fuzzy: !args.exact && job.fuzzy.unwrap_or(true),
            infer_types: args.infer_types || job.infer_types.unwrap_or(false),
            output: args.output.clone().or(job.output),
            format: args.format.map(OutputFormat::from),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Command};

    fn join_args(argv: &[&str]) -> JoinArgs {
        let cli = Cli::try_parse_from(argv).expect("parse args");
        match cli.command {
            Command::Join(args) => args,
            _ => panic!("expected join command"),
        }
    }

    #[test]
    fn flags_override_job_file() {
        let args = join_args(&[
            "sheetmatch",
            "join",
            "a.csv",
            "--lookup-key",
            "code",
            "--append",
            "x,y",
            "--exact",
        ]);
        let job = JobFile {
            master: Some(PathBuf::from("job_master.csv")),
            lookup: Some(PathBuf::from("job_lookup.csv")),
            master_key: Some("id".to_string()),
            lookup_key: Some("id".to_string()),
            append: vec!["z".to_string()],
            fuzzy: Some(true),
            ..JobFile::default()
        };
        let plan = JoinPlan::merge(&args, job).expect("merge");
        assert_eq!(plan.master, PathBuf::from("a.csv"));
        assert_eq!(plan.lookup, PathBuf::from("job_lookup.csv"));
        assert_eq!(plan.master_key.as_deref(), Some("id"));
        assert_eq!(plan.lookup_key.as_deref(), Some("code"));
        assert_eq!(plan.append, vec!["x", "y"]);
        assert!(!plan.fuzzy);
    }

    #[test]
    fn missing_tables_are_reported() {
        let args = join_args(&["sheetmatch", "join"]);
        let err = JoinPlan::merge(&args, JobFile::default()).unwrap_err();
        assert!(err.to_string().starts_with("no master table given"));
    }

    #[test]
    fn job_file_paths_resolve_against_its_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("job.toml");
        std::fs::write(
            &path,
            "master = \"m.csv\"\nlookup = \"/abs/l.csv\"\nappend = [\"dept\"]\nfuzzy = false\n",
        )
        .expect("write job");
        let job = JobFile::load(&path).expect("load job");
        assert_eq!(job.master, Some(dir.path().join("m.csv")));
        assert_eq!(job.lookup, Some(PathBuf::from("/abs/l.csv")));
        assert_eq!(job.fuzzy, Some(false));
    }

    #[test]
    fn unknown_job_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("job.toml");
        std::fs::write(&path, "masterkey = \"id\"\n").expect("write job");
        assert!(JobFile::load(&path).is_err());
    }
}
