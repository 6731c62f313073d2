use clap::Parser;
use ivr_flow::prelude::*;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replays scripted editing sessions against the standard IVR menu flow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON array of editor events
    script_path: Option<String>,

    /// Path to an editor configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Read one JSON event per line from stdin and print the canvas after each
    #[arg(short, long)]
    interactive: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ivr_flow=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };
    let mut session = EditorSession::with_config(&config);

    if cli.interactive {
        run_interactive(&mut session);
    } else {
        run_script(&mut session, cli);
    }
}

/// Replays a whole script file, then prints the resulting canvas.
fn run_script(session: &mut EditorSession, cli: Cli) {
    let script_path = cli.script_path.unwrap_or_else(|| {
        exit_with_error("Script path is required in non-interactive mode.");
    });
    let script = fs::read_to_string(&script_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read script file '{}': {}",
            &script_path, e
        ))
    });
    let events = EditorEvent::parse_script(&script)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let applied = session
        .replay(events)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    info!(applied, script = %script_path, "script replayed");

    print_canvas(session);
}

/// Reads events line by line. Rejected events are reported and skipped.
fn run_interactive(session: &mut EditorSession) {
    println!("--- IVR Flow Interactive Mode ---");
    println!("Enter one JSON event per line, e.g. {{\"action\":\"open_menu\",\"node\":\"transfer-sales\"}}");
    print_canvas(session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        match serde_json::from_str::<EditorEvent>(trimmed) {
            Ok(event) => match session.apply(event) {
                Ok(()) => print_canvas(session),
                Err(e) => println!("Rejected: {}", e),
            },
            Err(e) => println!("Invalid event: {}", e),
        }
    }
}

fn print_canvas(session: &EditorSession) {
    println!("\n--- Canvas ({:?}) ---", session.state());
    for slot in session.render_canvas() {
        match slot {
            CanvasSlot::Node(node) => {
                let mut line = format!("[{}] {} ({})", node.header, node.label, node.id);
                if let Some(destination) = &node.destination {
                    line.push_str(&format!(" -> {}", destination));
                }
                for badge in &node.skill_badges {
                    line.push_str(&format!(" <{}>", badge.text));
                }
                if let Some(label) = &node.label_badge {
                    line.push_str(&format!(" #{}", label));
                }
                if node.menu_open {
                    line.push_str(" *menu*");
                }
                println!("{}", line);
            }
            CanvasSlot::AddStep => println!("[+] add step"),
        }
    }
    println!();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
