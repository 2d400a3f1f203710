use clap::Parser;
use examprep::cli::ai::{AiConfig, CompletionGateway};
use examprep::cli::{
    run_ask, run_generate, run_grade, run_providers, run_topics, Cli, Commands, Submission,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Missing .env is fine; real environment variables win either way
    let _ = dotenvy::dotenv();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Topics(args) = &cli.command {
        return run_topics(args.grade, args.subject);
    }

    let config = AiConfig::load();
    if !config.is_configured() {
        warn!("no AI provider credentials found");
    }
    let gateway = CompletionGateway::from_config(&config);

    match cli.command {
        Commands::Ask(args) => {
            run_ask(
                &gateway,
                &args.prompt,
                args.temperature,
                args.max_retries,
                args.image.as_deref(),
            )?;
        }
        Commands::Providers => {
            run_providers(&gateway)?;
        }
        Commands::Generate(args) => {
            let save_dir = args.save_dir();
            run_generate(
                &gateway,
                args.grade,
                args.subject,
                args.topic.as_deref(),
                args.count,
                save_dir.as_deref(),
            )?;
        }
        Commands::Grade(args) => {
            let submission = match (&args.answers, &args.image) {
                (Some(path), _) => Submission::Typed(path),
                (None, Some(path)) => Submission::Photo(path),
                (None, None) => anyhow::bail!("Provide --answers or --image."),
            };
            let save_dir = args.save_dir();
            run_grade(
                &gateway,
                &args.questions,
                submission,
                &args.context(),
                &args.student,
                save_dir.as_deref(),
            )?;
        }
        Commands::Topics(_) => {}
    }

    Ok(())
}
