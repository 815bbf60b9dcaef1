use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nurse_core::tracing_setup::init_tracing;
use nurse_core::FormConfig;

use nurse_tui::runtime::run_app;
use nurse_tui::ui::{self, App};

#[derive(Parser)]
#[command(name = "nurse-tui")]
#[command(about = "Record a patient's vitals and a SOAP note")]
struct Cli {
    /// Patient name shown in the summary (read-only on screen)
    #[arg(long, short = 'n')]
    patient_name: Option<String>,

    /// Path to JSON config file (patientName, logFile)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Config file, then environment, then flags
    fn load_config(&self) -> Result<FormConfig> {
        let mut config = FormConfig::resolve(self.config.as_deref())?.with_env();
        if let Some(name) = &self.patient_name {
            config.patient_name = name.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(config.log_file.as_deref()).context("failed to set up logging")?;
    tracing::info!(patient = %config.patient_name, "starting nursing form");

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableBracketedPaste
        );
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let mut app = App::new(&config);
    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}
