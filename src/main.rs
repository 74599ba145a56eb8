use clap::Parser;
use cryptocore::cli::commands;
use cryptocore::cli::{output, Cli, Commands};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable read for the log filter.
const LOG_ENV_VAR: &str = "CRYPTOCORE_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Random { bytes, hex } => commands::random::execute(bytes, hex),
        Commands::Encode {
            ref input,
            ref file,
            standard,
        } => commands::encode::execute(input.as_deref(), file.as_deref(), standard),
        Commands::Decode { ref input, hex } => commands::decode::execute(input, hex),
        Commands::Fingerprint {
            ref input,
            ref file,
            ref metadata,
        } => commands::fingerprint::execute(input.as_deref(), file.as_deref(), metadata.as_deref()),
        Commands::Encrypt {
            ref input,
            ref file,
            ref aad,
            ref iv,
        } => commands::encrypt::execute(
            input.as_deref(),
            file.as_deref(),
            aad.as_deref(),
            iv.as_deref(),
        ),
        Commands::Decrypt {
            ref ciphertext,
            ref aad,
            ref iv,
        } => commands::decrypt::execute(ciphertext, aad.as_deref(), iv.as_deref()),
        Commands::Keygen {
            ref out_dir,
            bits,
            force,
        } => commands::keygen::execute(&cli, out_dir, bits, force),
        Commands::Seal {
            ref public_key,
            ref input,
            ref file,
            ref aad,
            ref splitter,
        } => commands::seal::execute(
            &cli,
            public_key,
            input.as_deref(),
            file.as_deref(),
            aad.as_deref(),
            splitter.as_deref(),
        ),
        Commands::Open {
            ref private_key,
            ref envelope,
            ref aad,
            ref splitter,
        } => commands::open::execute(
            &cli,
            private_key,
            envelope,
            aad.as_deref(),
            splitter.as_deref(),
        ),
        Commands::Pack {
            ref key,
            ref data,
            ref splitter,
        } => commands::pack::execute(&cli, key, data, splitter.as_deref()),
        Commands::Unpack {
            ref envelope,
            json,
            ref splitter,
        } => commands::unpack::execute(&cli, envelope, json, splitter.as_deref()),
        Commands::Inspect {
            ref envelope,
            ref splitter,
        } => commands::inspect::execute(&cli, envelope, splitter.as_deref()),
        Commands::Completions { ref shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
