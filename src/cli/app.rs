//! Main app runner: routes parsed commands to the dispatcher

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::application::{invocations, Dispatcher};
use crate::domain::{DispatchError, Invocation, ManagerOp};
use crate::infrastructure::{install, ExecLauncher};

use super::args::{
    Cli, Commands, ManagedClusterCommands, ManagedCommands, ManagedStreamCommands, OnpremCommands,
    OnpremStreamCommands,
};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Initialize logging. `--verbose` selects debug level; otherwise
/// `RUST_LOG` is honored, defaulting to info.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the invocation for the selected leaf command and transfer control
/// to its native app. Returns only when dispatch fails.
pub fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();
    let invocation = build_invocation(&cli.command);

    match dispatch(&invocation) {
        // Unreachable with the real exec launcher; kept for the contract.
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn dispatch(invocation: &Invocation) -> Result<(), DispatchError> {
    let app_dir = install::app_dir()?;
    install::prepare_environment(&app_dir);
    Dispatcher::new(ExecLauncher, app_dir).dispatch(invocation)
}

fn build_invocation(command: &Commands) -> Invocation {
    match command {
        Commands::Managed { command } => build_managed(command),
        Commands::Onprem { command } => build_onprem(command),
        Commands::Ingest(args) => invocations::ingest(args),
        Commands::Playback(args) => invocations::playback(args),
        Commands::Print(args) => invocations::print(args),
        Commands::Chunk(args) => invocations::chunk(&args.options, &args.source),
    }
}

fn build_managed(command: &ManagedCommands) -> Invocation {
    match command {
        ManagedCommands::Stream { command } => match command {
            ManagedStreamCommands::Create {
                context,
                stream_name,
            } => invocations::managed_stream(ManagerOp::CreateStream, context, Some(stream_name)),
            ManagedStreamCommands::Delete {
                context,
                stream_name,
            } => invocations::managed_stream(ManagerOp::DeleteStream, context, Some(stream_name)),
            ManagedStreamCommands::List { context } => {
                invocations::managed_stream(ManagerOp::ListStreams, context, None)
            }
        },
        ManagedCommands::Cluster { command } => match command {
            ManagedClusterCommands::Create { context, selector } => {
                invocations::managed_cluster(ManagerOp::CreateCluster, context, Some(selector))
            }
            ManagedClusterCommands::Delete { context, selector } => {
                invocations::managed_cluster(ManagerOp::DeleteCluster, context, Some(selector))
            }
            ManagedClusterCommands::List { context } => {
                invocations::managed_cluster(ManagerOp::ListClusters, context, None)
            }
        },
    }
}

fn build_onprem(command: &OnpremCommands) -> Invocation {
    match command {
        OnpremCommands::Stream { command } => match command {
            OnpremStreamCommands::Create {
                context,
                stream_name,
                stream_retention_seconds,
            } => invocations::onprem_stream(
                ManagerOp::CreateStream,
                context,
                Some(stream_name),
                Some(*stream_retention_seconds),
            ),
            OnpremStreamCommands::Delete {
                context,
                stream_name,
            } => invocations::onprem_stream(
                ManagerOp::DeleteStream,
                context,
                Some(stream_name),
                None,
            ),
            OnpremStreamCommands::List { context } => {
                invocations::onprem_stream(ManagerOp::ListStreams, context, None, None)
            }
        },
    }
}
