use anyhow::Result;
use spendio::application::TrackerService;
use spendio::cli;

/// State file, kept next to wherever the tracker is run from.
const DATA_FILE: &str = "spending.json";

fn main() -> Result<()> {
    let (mut service, load_error) = TrackerService::open(DATA_FILE);
    if let Some(err) = load_error {
        eprintln!("Error loading data: {err:#}");
        eprintln!("Starting with default data.");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(&mut service, stdin.lock(), stdout.lock())
}
