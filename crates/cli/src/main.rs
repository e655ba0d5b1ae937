use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use legol_flowchart::FlowchartIndex;
use legol_session::{SessionStorage, SessionStore};
use legol_suggest::Role;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "legol")]
#[command(about = "Immigration document advisor session driver", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the persisted session record
    #[arg(long, global = true, default_value = ".legol")]
    state_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a user message and print the refreshed suggestions
    Say(SayArgs),

    /// Append an assistant message (replaying the chat endpoint's answer)
    Reply(ReplyArgs),

    /// Print the currently suggested documents
    Suggestions(SuggestionsArgs),

    /// Assemble and print the flowchart for the current suggestions
    Flowchart(FlowchartArgs),

    /// Dump the raw session record
    Show(ShowArgs),

    /// Reset the session to its seeded state
    Clear(ClearArgs),
}

#[derive(Args)]
struct SayArgs {
    /// Message text
    text: String,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ReplyArgs {
    /// Message text
    text: String,
}

#[derive(Args)]
struct SuggestionsArgs {
    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FlowchartArgs {
    /// Also print the highlight set around this node id
    #[arg(long)]
    focus: Option<String>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ClearArgs {}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON parsing
    let json_output = match &cli.command {
        Commands::Say(args) => args.json,
        Commands::Suggestions(args) => args.json,
        Commands::Flowchart(args) => args.json,
        Commands::Show(args) => args.json,
        _ => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let storage = SessionStorage::file(&cli.state_dir);

    match cli.command {
        Commands::Say(args) => run_say(args, &storage).await?,
        Commands::Reply(args) => run_reply(args, &storage).await?,
        Commands::Suggestions(args) => run_suggestions(args, &storage).await?,
        Commands::Flowchart(args) => run_flowchart(args, &storage).await?,
        Commands::Show(args) => run_show(args, &storage).await?,
        Commands::Clear(_) => run_clear(&storage).await?,
    }

    Ok(())
}

async fn run_say(args: SayArgs, storage: &SessionStorage) -> Result<()> {
    let mut store = storage.load().await;
    store.append_message(Role::User, args.text);
    storage.save(&store).await?;
    print_suggestions(&store, args.json)
}

async fn run_reply(args: ReplyArgs, storage: &SessionStorage) -> Result<()> {
    let mut store = storage.load().await;
    store.append_message(Role::Assistant, args.text);
    storage.save(&store).await?;
    eprintln!("Transcript at {} messages", store.message_count());
    Ok(())
}

async fn run_suggestions(args: SuggestionsArgs, storage: &SessionStorage) -> Result<()> {
    let store = storage.load().await;
    print_suggestions(&store, args.json)
}

async fn run_flowchart(args: FlowchartArgs, storage: &SessionStorage) -> Result<()> {
    let store = storage.load().await;
    let graph = store.flowchart();

    if args.json {
        let mut value = serde_json::to_value(&graph)?;
        if let Some(focus) = &args.focus {
            let index = FlowchartIndex::from_graph(&graph);
            let highlighted: Vec<String> = index.highlight_set(focus).into_iter().collect();
            value["highlighted"] = serde_json::to_value(highlighted)?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    eprintln!(
        "Flowchart: {} documents, {} analyses, {} legal references, {} connections",
        graph.documents.len(),
        graph.analyses.len(),
        graph.legal_texts.len(),
        graph.connections.len()
    );
    for doc in &graph.documents {
        println!("[doc]      {:<20} {}", doc.id, doc.label);
    }
    for analysis in &graph.analyses {
        println!("[analysis] {:<20} {}", analysis.id, analysis.label);
    }
    for legal in &graph.legal_texts {
        println!(
            "[legal]    {:<20} {} - {}",
            legal.id, legal.label, legal.subtitle
        );
    }
    for conn in &graph.connections {
        println!("           {} -> {}", conn.from, conn.to);
    }

    if let Some(focus) = &args.focus {
        let index = FlowchartIndex::from_graph(&graph);
        let highlighted: Vec<String> = index.highlight_set(focus).into_iter().collect();
        println!();
        println!("Highlighted around {}: {}", focus, highlighted.join(", "));
    }

    Ok(())
}

async fn run_show(args: ShowArgs, storage: &SessionStorage) -> Result<()> {
    let store = storage.load().await;
    let record = store.to_persisted();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    eprintln!(
        "Session: {} messages, country={}, institution={}",
        record.messages.len(),
        record.student_country,
        record.institution
    );
    for message in &record.messages {
        let role = match message.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        println!("{role:>9}: {}", message.text);
    }
    Ok(())
}

async fn run_clear(storage: &SessionStorage) -> Result<()> {
    let mut store = storage.load().await;
    store.clear();
    storage.save(&store).await?;
    eprintln!("Session reset to seeded state");
    Ok(())
}

fn print_suggestions(store: &SessionStore, json: bool) -> Result<()> {
    let documents = store.suggested_documents();

    if json {
        println!("{}", serde_json::to_string_pretty(&documents)?);
        return Ok(());
    }

    eprintln!("{} suggested documents", documents.len());
    for doc in &documents {
        let due = doc.due.map(|d| format!(" (due {d})")).unwrap_or_default();
        println!("{:<20} {:?}  {}{due}", doc.id, doc.status, doc.title);
    }
    Ok(())
}
