use anyhow::Result;
use clap::{Parser, Subcommand};
use icongen::{command, GenArgs, GenEnv, Platform};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("ICONGEN_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    args.command.run()
}

#[derive(Subcommand)]
enum Commands {
    /// Generate icons for every platform
    All {
        #[clap(flatten)]
        args: GenArgs,
    },
    /// Generate Android launcher icons
    Android {
        #[clap(flatten)]
        args: GenArgs,
    },
    /// Generate the iOS app icon set
    Ios {
        #[clap(flatten)]
        args: GenArgs,
    },
    /// Generate web/PWA icons
    Web {
        #[clap(flatten)]
        args: GenArgs,
    },
    /// Generate website favicons
    Favicon {
        #[clap(flatten)]
        args: GenArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        let (args, platforms): (GenArgs, &[Platform]) = match self {
            Self::All { args } => (args, Platform::ALL),
            Self::Android { args } => (args, &[Platform::Android]),
            Self::Ios { args } => (args, &[Platform::Ios]),
            Self::Web { args } => (args, &[Platform::Web]),
            Self::Favicon { args } => (args, &[Platform::Favicon]),
        };
        let env = GenEnv::new(&args.icon, &args.root)?;
        command::generate(&env, platforms)
    }
}
