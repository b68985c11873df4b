use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use nsx_dfw_backup::api::ManagerClient;
use nsx_dfw_backup::cli::{run_operation, OperationPlan, RunOptions};
use nsx_dfw_backup::config::paths::DEFAULT_PREFIX;
use nsx_dfw_backup::config::settings::{DEFAULT_PASSWORD, DEFAULT_USER};
use nsx_dfw_backup::config::{BackupPaths, ManagerSettings};

#[derive(Parser)]
#[command(
    name = "nsx-dfw-backup",
    version,
    about = "NSX DFW Policy Backup & Restore - DFW Policies, Groups, Services & Profiles",
    long_about = "Saves the distributed firewall configuration of an NSX Manager \
                  (services, context profiles, policies, rules and groups) to JSON \
                  files, and restores those files with bulk PATCH calls against \
                  /policy/api/v1/infra."
)]
struct Cli {
    /// NSX Manager IP or hostname
    #[arg(long = "nsx-mgr-ip", value_name = "IP")]
    nsx_mgr_ip: String,

    /// What operation - backup or restore (substring match; both may run)
    #[arg(long)]
    operation: String,

    /// NSX username
    #[arg(long, default_value = DEFAULT_USER)]
    user: String,

    /// NSX password
    #[arg(
        long,
        env = "NSX_PASSWORD",
        default_value = DEFAULT_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    password: String,

    /// Prefix for backup files: <prefix>-<object-type>-bkup.json
    #[arg(long = "backupfileprefix", default_value = DEFAULT_PREFIX)]
    backupfileprefix: String,

    /// Directory for backup files (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    backup_dir: Option<PathBuf>,

    /// Do not restore L4 services (needed for managers older than 3.1)
    #[arg(long)]
    skip_services_restore: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = ManagerSettings::new(cli.nsx_mgr_ip, cli.user, cli.password)?;
    if settings.uses_default_password() {
        warn!("using the built-in default password; pass --password or set NSX_PASSWORD");
    }

    let paths = match cli.backup_dir {
        Some(dir) => BackupPaths::new(dir, cli.backupfileprefix)?,
        None => BackupPaths::in_current_dir(cli.backupfileprefix)?,
    };
    let options = RunOptions {
        skip_services_restore: cli.skip_services_restore,
    };

    debug!(
        dir = %paths.dir().display(),
        prefix = paths.prefix(),
        "backup file location"
    );

    let client = ManagerClient::new(settings)?;
    let mut stdout = std::io::stdout().lock();
    let report = run_operation(
        &client,
        &paths,
        OperationPlan::parse(&cli.operation),
        &options,
        &mut stdout,
    )
    .with_context(|| format!("operation '{}' against {} failed", cli.operation, client.settings().host()))?;

    if !report.is_empty() {
        for outcome in report.failed_restores() {
            warn!(category = %outcome.category(), "manager rejected restore");
        }
        debug!(
            backups = report.backups.len(),
            restores = report.restores.len(),
            "run finished"
        );
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
