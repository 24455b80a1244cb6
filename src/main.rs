use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_gate::cli::{pull_request_from, run_release_workflow, ReleaseRequest, VersionSource};
use release_gate::config;
use release_gate::git::Git2Repository;
use release_gate::host::GitHubHost;
use release_gate::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-gate",
    version,
    about = "Validate a pull request's version bump, merge it and publish a release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Metadata file holding the version [default: library.properties]"
    )]
    metadata: Option<PathBuf>,

    #[arg(
        long,
        env = "pr_version",
        help = "Candidate version [default: version in the metadata file]"
    )]
    pr_version: Option<String>,

    #[arg(long, env = "main_version", help = "Baseline version on the target branch")]
    main_version: Option<String>,

    #[arg(
        long,
        help = "Read the baseline from the metadata file committed at this git reference (e.g. origin/main)"
    )]
    baseline_ref: Option<String>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "API token")]
    token: Option<String>,

    #[arg(long, env = "GITHUB_REPOSITORY", help = "Repository in owner/name form")]
    repository: Option<String>,

    #[arg(long, env = "PR_NUMBER", help = "Pull request number")]
    pr_number: Option<u64>,

    #[arg(long, env = "PR_TITLE", help = "Pull request title")]
    pr_title: Option<String>,

    #[arg(long, help = "Require the standard metadata fields to be present")]
    validate_metadata: bool,

    #[arg(long, help = "Check dependency names in the depends= line")]
    validate_depends: bool,

    #[arg(long, help = "Validate only; do not merge or create a release")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        ui::display_error_chain(&err);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "release_gate=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("loading configuration")?;
    let metadata_path = args
        .metadata
        .clone()
        .unwrap_or_else(|| config.metadata.path.clone());

    let candidate_source = match args.pr_version {
        Some(version) => VersionSource::Literal(version),
        None => VersionSource::MetadataFile(metadata_path.clone()),
    };
    let baseline_source = match (args.main_version, args.baseline_ref) {
        (Some(version), _) => VersionSource::Literal(version),
        (None, Some(reference)) => VersionSource::GitRef {
            reference,
            path: metadata_path.clone(),
        },
        (None, None) => bail!(
            "No baseline version: pass --main-version (or set main_version) or --baseline-ref"
        ),
    };

    let repo = if baseline_source.needs_repository() {
        Some(Git2Repository::open(".").context("opening git repository")?)
    } else {
        None
    };
    let candidate = candidate_source.resolve(repo.as_ref())?;
    let baseline = baseline_source.resolve(repo.as_ref())?;

    let token = args.token.filter(|token| !token.trim().is_empty());
    let token = match token {
        Some(token) => token,
        None if args.dry_run => String::new(),
        None => bail!("An API token is required: pass --token or set GITHUB_TOKEN"),
    };

    let request = ReleaseRequest {
        candidate,
        baseline,
        pull_request: pull_request_from(
            args.repository.as_deref(),
            args.pr_number,
            args.pr_title.as_deref(),
        )?,
        metadata_path,
        validate_metadata: args.validate_metadata,
        validate_dependencies: args.validate_depends,
        dry_run: args.dry_run,
    };

    ui::display_status(&format!(
        "Validating version {} against main version {}...",
        request.candidate, request.baseline
    ));
    if !request.dry_run {
        if let Some(pr) = &request.pull_request {
            ui::display_status(&format!(
                "Will merge PR #{} in {} and create a release",
                pr.number, pr.repository
            ));
        }
    }

    let host = GitHubHost::new(&config.api.base_url, token, config.api.timeout());
    let result = run_release_workflow(&request, &config, &host)?;

    for warning in &result.warnings {
        ui::display_warning(warning);
    }
    ui::display_success(&format!("Version {} is valid.", result.version));
    ui::display_summary(&result);

    Ok(())
}
