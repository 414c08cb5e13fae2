use anyhow::Context;
use anyhow::Result;
use sheet_inspector::inspect;
use sheet_inspector::logging;
use sheet_inspector::Settings;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // The report goes to stdout, diagnostics to stderr
            println!("Error: {error:#}");
            tracing::error!("{error:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let settings = Settings::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    inspect(&settings, &mut out)
        .with_context(|| format!("inspecting '{}'", settings.file_name.display()))?;
    out.flush()?;
    Ok(())
}
