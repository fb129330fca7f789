// command line interface

use crate::core::{DEFAULT_MODEL, DuckDuckGo, Gemini, SafetySettings};
use crate::output::Output;
use crate::theme::{Theme, ThemeKind};
use crate::{Agent, Input, telemetry};
use clap::Parser;
use miette::Result;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "toddlerbot", about = "Ask a curious toddler bot a why-question")]
struct Cli {
    /// gemini api key
    #[arg(long, short = 'k', env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// gemini model to use
    #[arg(long, short, default_value = DEFAULT_MODEL)]
    model: String,

    /// colour theme
    #[arg(long, value_enum, default_value_t = ThemeKind::Auto)]
    theme: ThemeKind,

    /// log level for stderr (RUST_LOG overrides it)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// shorthand for --log-level debug
    #[arg(long, short)]
    verbose: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { cli.log_level.as_str() };
    telemetry::init(level);

    // no key, no calls
    let model = Gemini::new(cli.api_key, cli.model, SafetySettings::strict())?;
    tracing::info!(model = model.model(), "brain ready");

    let agent = Agent::new(Arc::new(model), Arc::new(DuckDuckGo::new()));
    let mut out = Output::stdout(Theme::new(cli.theme));
    let input = Input::stdin();

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("can't listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    Ok(agent.run(input, &mut out, interrupt).await?)
}
