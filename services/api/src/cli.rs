use crate::demo::{run_chat, run_predict, ChatArgs, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cropcast::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CropCast Advisory Service",
    about = "Run the CropCast yield advisory service or exercise it from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run a one-shot yield prediction and print the full interpretation
    Predict(PredictArgs),
    /// Ask the farming assistant a single question
    Chat(ChatArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::Chat(args) => run_chat(args),
    }
}
