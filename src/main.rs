//! ticketfangrub - command line storefront
//!
//! Each subcommand is one step of the purchase flow. The seat hold is handed
//! from `lock` to `checkout`/`complete` through the cart file.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use ticketfangrub::adapters::{
    FileCartStore, HttpBackendConfig, HttpTicketingBackend, InMemoryCartStore,
    InMemoryTicketingBackend,
};
use ticketfangrub::application::handlers::checkout::{
    CheckoutView, CompleteCheckoutOutcome, LockSeatsOutcome,
};
use ticketfangrub::application::handlers::queue::QueueStatus;
use ticketfangrub::application::handlers::seating::DataSource;
use ticketfangrub::application::{
    Navigation, Storefront, StorefrontError, HOME_MESSAGE, SUCCESS_HEADLINE, SUCCESS_MESSAGE,
    WALLET_MESSAGE,
};
use ticketfangrub::config::AppConfig;
use ticketfangrub::domain::foundation::{EventId, GroupId, SeatId, SectionId, ValidationError};
use ticketfangrub::domain::queue::QueueMode;
use ticketfangrub::domain::seating::{SeatMap, ToggleOutcome};
use ticketfangrub::ports::{BackendError, TicketingBackend};

/// ticketfangrub - queue, pick seats, and check out
#[derive(Parser, Debug)]
#[command(name = "ticketfangrub")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Use the in-process backend instead of the configured URL
    #[arg(long, global = true)]
    offline: bool,

    /// Event to act on
    #[arg(long, global = true, default_value = "demo-event")]
    event: EventId,

    /// Log filter (overrides configuration; RUST_LOG wins over both)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    // === Queue ===
    /// Join the event queue
    Join {
        /// solo, friend, or watch
        #[arg(long, default_value = "solo")]
        mode: QueueMode,
    },

    /// Show a group's queue status
    Status {
        /// Group ID
        #[arg(long)]
        group: GroupId,

        /// Keep refreshing until interrupted
        #[arg(short, long)]
        watch: bool,
    },

    /// Leave the queue
    Leave {
        /// Group ID
        #[arg(long)]
        group: GroupId,
    },

    // === Seat map ===
    /// List the event's sections
    Sections,

    /// List the seats of a section
    Seats {
        /// Section ID (defaults to the first section)
        #[arg(long)]
        section: Option<SectionId>,
    },

    /// Hold seats and start checkout
    Lock {
        /// Group ID
        #[arg(long, default_value = "demo-group")]
        group: GroupId,

        /// Section the seats are in (defaults to the first section)
        #[arg(long)]
        section: Option<SectionId>,

        /// Seat IDs, at most four
        #[arg(required = true)]
        seats: Vec<SeatId>,
    },

    // === Checkout ===
    /// Show the held seats and time left
    Checkout {
        /// Keep the countdown running until the hold expires
        #[arg(short, long)]
        watch: bool,
    },

    /// Complete the purchase
    Complete,

    /// Show the wallet
    Wallet,

    /// Run the whole flow against the in-process backend
    Demo,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    init_tracing(
        cli.log_level.as_deref().unwrap_or(&config.client.log_level),
        config.is_production(),
    );

    let settings = match config
        .validate()
        .and_then(|()| config.storefront_settings())
    {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    let storefront = match &cli.command {
        // The demo keeps everything in memory, cart included
        Commands::Demo => Storefront::new(
            Arc::new(InMemoryTicketingBackend::new()),
            Arc::new(InMemoryCartStore::new()),
            settings,
        ),
        _ => match backend(&config, cli.offline) {
            Ok(backend) => Storefront::new(
                backend,
                Arc::new(FileCartStore::new(&config.storage.cart_path)),
                settings,
            ),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::from(2);
            }
        },
    };

    match run(cli.command, cli.event, &storefront).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(directive: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Production logs are JSON lines for collectors
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn backend(config: &AppConfig, offline: bool) -> Result<Arc<dyn TicketingBackend>, BackendError> {
    if offline {
        return Ok(Arc::new(InMemoryTicketingBackend::new()));
    }
    let http = HttpBackendConfig::new(&config.backend.base_url)
        .with_timeout(config.backend.request_timeout());
    Ok(Arc::new(HttpTicketingBackend::new(http)?))
}

async fn run(command: Commands, event: EventId, storefront: &Storefront) -> Result<(), StorefrontError> {
    match command {
        Commands::Join { mode } => {
            let joined = storefront.join_queue(event, mode).await?;
            println!("Joined the queue ({})", mode.action_label());
            println!("Group ID: {}", joined.group_id);
            print_navigation(&joined.navigation);
        }
        Commands::Status { group, watch } => {
            if watch {
                let mut updates = storefront.watch_queue(event, group);
                loop {
                    tokio::select! {
                        status = updates.next() => match status {
                            Some(status) => print_status(&status),
                            None => break,
                        },
                        _ = tokio::signal::ctrl_c() => break,
                    }
                }
            } else {
                let status = storefront.queue_status(event, group).await;
                print_status(&status);
                print_navigation(&status.continue_to_seats());
            }
        }
        Commands::Leave { group } => {
            let left = storefront.leave_queue(event, group).await;
            if !left.acknowledged {
                println!("The backend did not confirm; returning to the event anyway.");
            }
            print_navigation(&left.navigation);
        }
        Commands::Sections => {
            let (map, source) = storefront.open_seat_map(&event).await;
            print_source(source);
            for section in map.sections() {
                println!(
                    "{:<6} {:<6} from {:<8} {}/{} available",
                    section.id,
                    section.level.to_string(),
                    section.base_price.to_string(),
                    section.available_seats,
                    section.total_seats
                );
            }
        }
        Commands::Seats { section } => {
            let map = seat_map(storefront, &event, section.as_ref()).await?;
            print_seats(&map);
        }
        Commands::Lock {
            group,
            section,
            seats,
        } => {
            let mut map = seat_map(storefront, &event, section.as_ref()).await?;
            for seat in &seats {
                if let ToggleOutcome::Ignored(reason) = map.toggle_seat(seat) {
                    println!("Skipping {}: {}", seat, reason);
                }
            }
            match storefront.lock_seats(event, group, &map).await? {
                LockSeatsOutcome::NothingSelected => println!("No seats selected."),
                LockSeatsOutcome::Locked { cart, navigation } => {
                    println!(
                        "Held {} seat(s), total {}, expires {}",
                        cart.selected_seats.len(),
                        cart.total_price,
                        cart.expires_at.as_datetime()
                    );
                    print_navigation(&navigation);
                }
            }
        }
        Commands::Checkout { watch } => {
            let view = storefront.view_checkout().await?;
            print_checkout(&view);
            if let (true, CheckoutView::Ready { cart, .. }) = (watch, &view) {
                let mut ticks = storefront.watch_countdown(cart.expires_at);
                loop {
                    tokio::select! {
                        countdown = ticks.next() => match countdown {
                            Some(countdown) => println!("Seat lock expires in: {}", countdown),
                            None => break,
                        },
                        _ = tokio::signal::ctrl_c() => break,
                    }
                }
            }
        }
        Commands::Complete => match storefront.complete_checkout().await? {
            CompleteCheckoutOutcome::NoSelection => println!("{}", CheckoutView::EMPTY_MESSAGE),
            CompleteCheckoutOutcome::Completed { navigation } => {
                println!("{}", SUCCESS_HEADLINE);
                println!("{}", SUCCESS_MESSAGE);
                print_navigation(&navigation);
            }
        },
        Commands::Wallet => {
            println!("{}", WALLET_MESSAGE);
            print_navigation(&Navigation::Home);
        }
        Commands::Demo => demo(storefront, event).await?,
    }
    Ok(())
}

/// Opens the seat map and focuses `section` when given.
async fn seat_map(
    storefront: &Storefront,
    event: &EventId,
    section: Option<&SectionId>,
) -> Result<SeatMap, StorefrontError> {
    let (mut map, source) = storefront.open_seat_map(event).await;
    print_source(source);
    if let Some(section) = section {
        if !storefront.select_section(&mut map, event, section).await {
            return Err(StorefrontError::Validation(ValidationError::invalid_format(
                "section",
                format!("section {} is not on the map", section),
            )));
        }
    }
    Ok(map)
}

/// Queue, seats, and purchase in one process.
async fn demo(storefront: &Storefront, event: EventId) -> Result<(), StorefrontError> {
    println!("{}", HOME_MESSAGE);

    let joined = storefront.join_queue(event.clone(), QueueMode::Solo).await?;
    let status = storefront.queue_status(event.clone(), joined.group_id.clone()).await;
    print_status(&status);

    let (mut map, source) = storefront.open_seat_map(&event).await;
    print_source(source);
    let picks: Vec<SeatId> = map
        .seats()
        .iter()
        .filter(|s| s.available)
        .take(2)
        .map(|s| s.id.clone())
        .collect();
    for seat in &picks {
        map.toggle_seat(seat);
    }
    print_seats(&map);

    if let LockSeatsOutcome::Locked { navigation, .. } =
        storefront.lock_seats(event, joined.group_id, &map).await?
    {
        print_navigation(&navigation);
    }
    print_checkout(&storefront.view_checkout().await?);

    if let CompleteCheckoutOutcome::Completed { navigation } = storefront.complete_checkout().await? {
        println!("{}", SUCCESS_HEADLINE);
        print_navigation(&navigation);
    }
    Ok(())
}

fn print_navigation(navigation: &Navigation) {
    println!("-> {}", navigation);
}

fn print_source(source: DataSource) {
    if source == DataSource::Fallback {
        println!("(backend unavailable, showing demo seats)");
    }
}

fn print_status(status: &QueueStatus) {
    println!("Group ID: {}", status.group_id);
    println!("Your position: {}", status.position_label());
    if let Some(group) = &status.group {
        println!(
            "Buyers: {}  Watchers: {}  Locked: {}",
            group.buyers().len(),
            group.watchers().len(),
            group.locked
        );
    }
}

fn print_seats(map: &SeatMap) {
    if let Some(section) = map.selected_section() {
        println!("Section {} ({})", section.label, section.level.description());
    }
    for seat in map.seats() {
        let mark = if map.selection().contains(&seat.id) {
            "*"
        } else if seat.available {
            " "
        } else {
            "x"
        };
        println!("[{}] {:<10} Row {} Seat {:<3} {}", mark, seat.id, seat.row, seat.number, seat.price);
    }
    if !map.selection().is_empty() {
        println!("Selected {} seat(s), total {}", map.selection().len(), map.total_price());
    }
}

fn print_checkout(view: &CheckoutView) {
    match view {
        CheckoutView::Empty => println!("{}", CheckoutView::EMPTY_MESSAGE),
        CheckoutView::Ready { cart, countdown } => {
            println!("Seat lock expires in: {}", countdown);
            for seat in &cart.selected_seats {
                println!("{}  {}", seat, seat.price);
            }
            println!("Total {}", cart.total_price);
        }
    }
}
