//! mdshift - markdown to platform text converter

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mdshift::{convert, Platform, Session};

#[derive(Parser)]
#[command(name = "mdshift")]
#[command(version, about = "Convert markdown into platform-specific text", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdshift -p slack notes.md       Convert a file for Slack
    echo '**hi**' | mdshift -p whatsapp
    mdshift --list                  Show supported platforms")]
struct Cli {
    /// Input file (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Target platform (unknown values fall back to plain text)
    #[arg(short, long, default_value = "plaintext")]
    platform: String,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// List supported platforms
    #[arg(short, long)]
    list: bool,

    /// Save the input and platform to a session file after converting
    #[arg(long, value_name = "FILE")]
    session: Option<PathBuf>,

    /// Re-run the conversion stored in the session file
    #[arg(long, requires = "session")]
    resume: bool,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list {
        for platform in Platform::ALL {
            println!("{platform}");
        }
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let (text, platform_id) = if cli.resume {
        let path = cli
            .session
            .as_deref()
            .ok_or("--resume requires --session")?;
        let session = Session::load(path)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("no session found at {}", path.display()))?;
        (session.text, session.platform.to_string())
    } else {
        let text = read_input(cli.input.as_deref()).map_err(|e| e.to_string())?;
        (text, cli.platform.clone())
    };

    if !cli.quiet && Platform::from_id(&platform_id).is_none() {
        eprintln!("warning: unknown platform '{platform_id}', falling back to plain text");
    }

    let result = convert(&platform_id, &text);

    match &cli.output {
        Some(path) => fs::write(path, &result).map_err(|e| e.to_string())?,
        None => println!("{result}"),
    }

    // A failed save never aborts a successful conversion.
    if let (Some(path), false) = (&cli.session, cli.resume) {
        let platform = Platform::from_id(&platform_id).unwrap_or(Platform::PlainText);
        if let Err(e) = Session::new(text, platform).save(path) {
            if !cli.quiet {
                eprintln!("warning: failed to save session: {e}");
            }
        }
    }

    Ok(())
}

fn read_input(input: Option<&str>) -> std::io::Result<String> {
    match input {
        Some(path) if path != "-" => fs::read_to_string(path),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
