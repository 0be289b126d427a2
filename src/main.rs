//! Pricing Engine CLI
//!
//! Drives the pricing core from a terminal: one-off quotes, an interactive
//! session fed line by line on stdin, and the stripe animation on a frame
//! clock. Results go to stdout as JSON lines; logs go to stderr.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use pricing_engine::adapters::{JsonLinesRenderer, RenderMode, TracingSliderDriver};
use pricing_engine::application::{PricingSession, SessionCommand};
use pricing_engine::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};
use pricing_engine::domain::catalog::{BillingPeriod, CatalogError, CurrencyCode, PricingCatalog};
use pricing_engine::domain::foundation::ValidationError;
use pricing_engine::domain::pricing::{Locale, PricingError, PricingState};
use pricing_engine::domain::stripe::{LaneSpec, StripeAnimation};
use pricing_engine::ports::{AdapterError, PriceRenderer};

#[derive(Parser)]
#[command(name = "pricing-engine")]
#[command(about = "Compute pricing page prices, phone-credit packs and stripe frames")]
struct Cli {
    /// Print localized card text instead of the raw result
    #[arg(long, global = true)]
    view: bool,

    /// Override the configured display locale (en, fr)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single selection
    Quote {
        /// Slider position (1-4) or plan code (pro1, pro2, pro3)
        #[arg(short, long, default_value = "1")]
        plan: String,

        /// Number of users (1-10)
        #[arg(short, long, default_value_t = 1)]
        users: i64,

        /// Billing period (monthly, quarterly, annual)
        #[arg(long, default_value = "monthly")]
        period: String,

        /// Currency code or selector label
        #[arg(short, long, default_value = "EUR")]
        currency: String,
    },

    /// Read selection commands from stdin and render each result
    Session,

    /// Run the stripe animation and print lane positions per frame
    Stripe {
        /// Number of frames to run
        #[arg(short, long, default_value_t = 120)]
        frames: u64,

        /// Lanes as direction:length
        #[arg(short, long, value_delimiter = ',', default_value = "left:1000,right:800")]
        lanes: Vec<LaneSpec>,

        /// Wrapper width in pixels
        #[arg(short, long, default_value_t = 1200.0)]
        wrapper: f64,

        /// Frame at which the pointer enters the stripe
        #[arg(long)]
        pause_at: Option<u64>,

        /// Frame at which the pointer leaves the stripe
        #[arg(long)]
        resume_at: Option<u64>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] pricing_engine::config::ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid input: {0}")]
    Input(#[from] ValidationError),

    #[error("Unknown currency '{0}'")]
    UnknownCurrency(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "Command failed");
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let locale = cli.locale.unwrap_or(config.display.locale);
    let mode = if cli.view {
        RenderMode::View(locale)
    } else {
        RenderMode::Result
    };

    match cli.command {
        Commands::Quote {
            plan,
            users,
            period,
            currency,
        } => {
            let catalog = config.build_catalog()?;
            let state = quote_state(&catalog, &plan, users, &period, &currency)?;
            let result = config.engine().calculate(&state, &catalog);
            JsonLinesRenderer::with_mode(io::stdout(), mode).render(&result)?;
        }

        Commands::Session => {
            let catalog = Arc::new(config.build_catalog()?);
            let renderer = JsonLinesRenderer::with_mode(io::stdout(), mode);
            let session = PricingSession::new(catalog, config.engine(), Box::new(renderer));
            run_session(session).await?;
        }

        Commands::Stripe {
            frames,
            lanes,
            wrapper,
            pause_at,
            resume_at,
        } => {
            let mut animation = StripeAnimation::new(config.stripe.settings(), wrapper);
            for lane in lanes {
                animation.add_lane(lane.direction, lane.content_length)?;
            }
            run_stripe(
                animation,
                config.stripe.frame_interval(),
                frames,
                pause_at,
                resume_at,
            )
            .await?;
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    // Ignore re-initialization
    let _ = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

fn quote_state(
    catalog: &PricingCatalog,
    plan: &str,
    users: i64,
    period: &str,
    currency: &str,
) -> Result<PricingState, CliError> {
    let mut state = PricingState::new();

    match plan.trim().parse::<i64>() {
        Ok(position) => {
            state.set_plan_position(position);
        }
        Err(_) => state.set_plan(catalog.plan_by_code(plan)?.id),
    }

    let period = period.parse::<BillingPeriod>()?;
    state.set_billing_period(period);
    state.set_users_raw(users, period)?;

    let currency = currency
        .parse::<CurrencyCode>()
        .ok()
        .or_else(|| catalog.currency_by_label(currency))
        .ok_or_else(|| CliError::UnknownCurrency(currency.to_string()))?;
    state.set_currency(currency);

    Ok(state)
}

async fn run_session(mut session: PricingSession) -> Result<(), CliError> {
    tracing::info!(session_id = %session.id(), "Session started");
    session.refresh()?;

    let mut driver = TracingSliderDriver;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(line, error = %err, "Ignoring unreadable command");
                continue;
            }
        };

        match command {
            SessionCommand::Signal(signal) => {
                session.handle(signal);
            }
            SessionCommand::PhoneCredits(raw) => {
                write_json_line(&session.select_phone_credits(raw))?;
            }
            SessionCommand::Placeholder(hint) => {
                if let Err(err) = session.select_plan_placeholder(hint, &mut driver) {
                    tracing::warn!(error = %err, "Placeholder click ignored");
                }
            }
        }
    }

    tracing::info!(session_id = %session.id(), "Session ended");
    Ok(())
}

#[derive(Serialize)]
struct LaneFrame {
    direction: String,
    position: f64,
    velocity: f64,
}

#[derive(Serialize)]
struct StripeFrame {
    frame: u64,
    paused: bool,
    lanes: Vec<LaneFrame>,
}

async fn run_stripe(
    mut animation: StripeAnimation,
    frame_interval: std::time::Duration,
    frames: u64,
    pause_at: Option<u64>,
    resume_at: Option<u64>,
) -> Result<(), CliError> {
    tracing::info!(
        lanes = animation.lanes().len(),
        frames,
        interval_ms = frame_interval.as_millis() as u64,
        "Stripe animation started"
    );

    let mut clock = tokio::time::interval(frame_interval);
    for frame in 0..frames {
        clock.tick().await;

        if pause_at == Some(frame) {
            animation.pause();
        }
        if resume_at == Some(frame) {
            animation.resume();
        }
        animation.tick();

        write_json_line(&StripeFrame {
            frame,
            paused: animation.is_paused(),
            lanes: animation
                .lanes()
                .iter()
                .map(|lane| LaneFrame {
                    direction: lane.direction().to_string(),
                    position: lane.position(),
                    velocity: lane.velocity(),
                })
                .collect(),
        })?;
    }

    Ok(())
}

fn write_json_line<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}
