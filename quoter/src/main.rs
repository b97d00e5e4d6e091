//! Quoter binary entry point

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use quoter::core::messages;
use quoter::core::share::format_currency;
use quoter::services::{FileKeyValueStore, GeminiTipClient, fallback_outcome};
use quoter::{QuoteSession, QuoterConfig, TipProvider};
use shared::{
    Locale, Quote, QuoteId, SUGGESTED_MARGINS, SessionId, logging, paver_models, session_debug,
};

/// Paver quote calculator
#[derive(Parser)]
#[command(name = "quoter")]
#[command(about = "Calculates paver quantities and prices for installation quotes")]
struct Args {
    /// Directory holding history and settings (defaults to $CONCRE7_DATA_DIR or ./.concre7)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Language for labels, tips and share messages (pt-BR, en)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a quote and add it to history
    Quote {
        /// Area in square meters
        #[arg(long, allow_hyphen_values = true)]
        area: String,

        /// Paver model id (see `models`)
        #[arg(long)]
        model: Option<String>,

        /// Waste margin in percent
        #[arg(long)]
        margin: Option<u32>,

        /// Skip the AI installation tip
        #[arg(long)]
        no_tip: bool,

        /// Also print the share message
        #[arg(long)]
        share: bool,
    },
    /// Inspect or edit past quotes
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Show or save the unit price
    Price {
        #[command(subcommand)]
        command: PriceCommand,
    },
    /// List the paver catalog
    Models,
    /// Print the share message for a quote (newest when no id is given)
    Share {
        id: Option<String>,

        /// Print a WhatsApp link instead of the plain message
        #[arg(long)]
        whatsapp: bool,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    List,
    Show { id: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum PriceCommand {
    Show,
    Set {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(SessionId::current(), "quoter");

    let config = QuoterConfig::from_env()?
        .with_data_dir(args.data_dir)
        .with_locale(args.locale);
    let locale = config.locale;

    let store = FileKeyValueStore::with_base_dir(config.data_dir.clone());
    let tips: Arc<dyn TipProvider> = Arc::new(
        GeminiTipClient::new(config.gemini_api_key.clone())
            .with_model(config.gemini_model.clone())
            .with_base_url(config.gemini_base_url.clone())
            .with_timeout(config.tip_timeout),
    );
    let mut session = QuoteSession::start(store, tips, locale, config.tip_timeout).await;

    match args.command {
        Command::Quote {
            area,
            model,
            margin,
            no_tip,
            share,
        } => {
            if let Some(model) = model {
                session.select_model(&model)?;
            }
            if let Some(margin) = margin {
                session.set_margin(margin)?;
            }

            let quote = match session.submit(&area).await {
                Ok(quote) => quote,
                Err(e) if e.is_invalid_input() => {
                    logging::log_error(SessionId::current(), "Quote", &e);
                    anyhow::bail!("{e}");
                }
                Err(e) => return Err(e.into()),
            };

            print_quote(&quote, locale);
            if share {
                println!();
                println!("{}", session.share_message()?);
            }

            if no_tip {
                session.skip_tip();
            } else {
                // The quote is already saved; the tip only decorates it
                if let Some(placeholder) = session.state().tip_text() {
                    eprintln!("💡 {placeholder}");
                }
                let outcome = if config.tips_enabled() {
                    session.begin_tip(&quote).await?
                } else {
                    session_debug!("No API key configured, showing fallback tip");
                    fallback_outcome(&quote, locale)
                };
                session.apply_tip(outcome);
                if let Some(tip) = session.state().tip_text() {
                    println!();
                    println!("💡 \"{tip}\"");
                }
            }
        }
        Command::History { command } => match command {
            HistoryCommand::List => {
                let history = &session.state().history;
                if history.is_empty() {
                    println!("{}", empty_history_label(locale));
                }
                for quote in history.iter() {
                    println!(
                        "{}\t{}\t{}\t{} m²\t{}\t{}",
                        quote.id,
                        quote.timestamp.format("%d/%m/%Y"),
                        quote.model.name,
                        quote.area,
                        quote.total_pavers,
                        format_currency(quote.total_value, locale)
                    );
                }
            }
            HistoryCommand::Show { id } => {
                let quote = session.show(&QuoteId::from(id))?.clone();
                print_quote(&quote, locale);
            }
            HistoryCommand::Delete { id } => {
                let removed = session.delete(&QuoteId::from(id.as_str())).await?;
                match removed {
                    Some(quote) => println!("deleted {}", quote.id),
                    None => println!("no quote {id} in history"),
                }
            }
        },
        Command::Price { command } => match command {
            PriceCommand::Show => {
                println!("{}", format_currency(session.state().unit_price, locale));
            }
            PriceCommand::Set { value } => {
                let saved = session.save_unit_price(value).await?;
                println!("saved {}", format_currency(saved, locale));
            }
        },
        Command::Models => {
            for model in paver_models() {
                println!(
                    "{}\t{}\t{}\t{} /m²",
                    model.id,
                    model.name,
                    model.dimensions_label(),
                    model.pavers_per_m2
                );
            }
            let margins: Vec<String> = SUGGESTED_MARGINS
                .iter()
                .map(|m| messages::margin_label(locale, *m))
                .collect();
            println!();
            println!("margins: {}", margins.join(", "));
        }
        Command::Share { id, whatsapp } => {
            match id {
                Some(id) => session.show(&QuoteId::from(id))?,
                None => session.show_latest()?,
            };
            if whatsapp {
                println!("{}", session.share_link()?);
            } else {
                println!("{}", session.share_message()?);
            }
        }
    }

    Ok(())
}

fn print_quote(quote: &Quote, locale: Locale) {
    let (model, area, base, units, value) = match locale {
        Locale::PtBr => ("Modelo", "Área", "Base", "Total peças", "Valor total"),
        Locale::En => ("Model", "Area", "Base", "Total pieces", "Total value"),
    };
    let waste = match locale {
        Locale::PtBr => "perda",
        Locale::En => "waste",
    };

    println!("{model}: {}", quote.model.name);
    println!("{area}: {} m²", quote.area);
    println!(
        "{base}: {} /m² + {}% {waste}",
        quote.model.pavers_per_m2, quote.margin
    );
    println!("{units}: {}", quote.total_pavers);
    println!("{value}: {}", format_currency(quote.total_value, locale));
    println!("id: {}", quote.id);
}

fn empty_history_label(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Histórico vazio",
        Locale::En => "History is empty",
    }
}
