use clap::{Parser, Subcommand};
use lp_app::lp_client::{HttpSolver, Solver, SolverConfig};
use lp_app::lp_core::View;
use lp_app::lp_matrix::to_source_text;
use lp_app::{
    AppResult, Effect, Event, SessionState, decode_source, load_matrix_spec, read_source_file,
    write_export,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lp-cli")]
#[command(about = "lp-online CLI - submit LP models to the solve service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an LP source file
    Run {
        /// Path to the .lp or .txt source file
        source_path: PathBuf,
        /// Solve service URL (overrides LP_SOLVE_API and the built-in endpoint)
        #[arg(long)]
        endpoint: Option<String>,
        /// Also write the report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Render a YAML matrix spec as LP source text
    Render {
        /// Path to the matrix spec YAML file
        matrix_path: PathBuf,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the solve endpoint that would be used
    Endpoint,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            source_path,
            endpoint,
            report,
        } => cmd_run(&source_path, endpoint.as_deref(), report.as_deref()),
        Commands::Render {
            matrix_path,
            output,
        } => cmd_render(&matrix_path, output.as_deref()),
        Commands::Endpoint => cmd_endpoint(),
    }
}

fn solver_config(endpoint: Option<&str>) -> AppResult<SolverConfig> {
    let config = match endpoint {
        Some(url) => SolverConfig::with_endpoint(url)?,
        None => SolverConfig::from_env()?,
    };
    Ok(config)
}

fn cmd_run(source_path: &Path, endpoint: Option<&str>, report: Option<&Path>) -> AppResult<()> {
    let solver = HttpSolver::new(&solver_config(endpoint)?)?;
    let mut session = load_session(source_path)?;

    println!("Solving with {}", solver.endpoint());
    let mut failure = None;
    for effect in session.apply(Event::RunRequested) {
        if let Effect::Solve { request, body } = effect {
            let outcome = solver.solve(&body);
            if let Err(e) = &outcome {
                failure = Some(e.clone());
            }
            session.apply(Event::RunFinished { request, outcome });
        }
    }

    if let Some(path) = report {
        for effect in session.apply(Event::ReportSaveRequested) {
            if let Effect::SaveFile { name, contents } = effect
                && failure.is_none()
            {
                let written = write_export(path, &contents);
                session.apply(Event::ExportFinished {
                    name: name.to_string(),
                    result: written.as_ref().map(|_| ()).map_err(|e| e.to_string()),
                });
                written?;
            }
        }
    }

    for entry in session.log().entries() {
        eprintln!("{}", entry.message);
    }

    if let Some(e) = failure {
        return Err(e.into());
    }

    println!("{}", session.buffers().load(View::Objective));
    Ok(())
}

/// Session seeded with the decoded source file.
fn load_session(source_path: &Path) -> AppResult<SessionState> {
    tracing::info!(path = %source_path.display(), "loading source");
    let (name, bytes) = read_source_file(source_path)?;
    let text = decode_source(&name, &bytes)?;
    tracing::debug!(%name, bytes = bytes.len(), "source decoded");
    Ok(SessionState::new(text))
}

fn cmd_render(matrix_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let spec = load_matrix_spec(matrix_path)?;
    let text = to_source_text(&spec);

    match output {
        Some(path) => {
            write_export(path, &text)?;
            println!(
                "✓ Rendered {} constraint(s) to {}",
                spec.constraint_count(),
                path.display()
            );
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_endpoint() -> AppResult<()> {
    let config = solver_config(None)?;
    println!("{}", config.endpoint());
    Ok(())
}
