use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use csv_remove_users::{AssumeYes, Confirm, JsonUserStore, ReportWriter, remove_users};

use super::args::CliArgs;
use super::errors::AppError;
use super::progress::ProgressObserver;
use super::prompt::TerminalConfirm;

fn init_logging(verbose: bool) -> Result<(), AppError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log)?;

    let request = args.request();
    debug!("Request: {:?}", request);
    if request.dry_run {
        info!("Dry run: no users will be removed. Pass --dry-run=false to apply.");
    }

    let mut store = JsonUserStore::open(&args.store)?;
    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm)
    };
    let mut observer = ProgressObserver::new();
    if let Some(path) = &args.report {
        observer = observer.with_report(ReportWriter::create(path)?);
    }

    remove_users(
        &request,
        &mut store,
        args.site,
        confirm.as_mut(),
        &mut observer,
    )?;

    observer.close()?;
    if let Some(path) = &args.report {
        info!("Report written to {:?}", path);
    }

    Ok(())
}
