use anyhow::Result;
use clap::{Parser, Subcommand};

use trailhead::cli::{
    handle_announcement_command, handle_backup_command, handle_banner_command,
    handle_batch_command, handle_booking_command, handle_coupon_command, handle_export_command,
    handle_ticket_command, handle_trek_command, handle_vendor_command,
};
use trailhead::config::{paths::TrailheadPaths, settings::Settings};
use trailhead::storage::Storage;

#[derive(Parser)]
#[command(
    name = "trailhead",
    version,
    about = "Terminal-based booking console for trek and adventure marketplaces",
    long_about = "Trailhead is a terminal console for running a trek booking \
                  marketplace: vendor onboarding and verification, a trek catalog \
                  with dated departures, booking capture, coupons, support \
                  tickets, and storefront content."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Run the vendor registration wizard
    Register,

    /// Vendor management and verification
    #[command(subcommand)]
    Vendor(trailhead::cli::VendorCommands),

    /// Trek catalog management
    #[command(subcommand)]
    Trek(trailhead::cli::TrekCommands),

    /// Departure batch management
    #[command(subcommand)]
    Batch(trailhead::cli::BatchCommands),

    /// Booking capture and lifecycle
    #[command(subcommand, alias = "bkg")]
    Booking(trailhead::cli::BookingCommands),

    /// Discount code management
    #[command(subcommand)]
    Coupon(trailhead::cli::CouponCommands),

    /// Support ticket queue
    #[command(subcommand)]
    Ticket(trailhead::cli::TicketCommands),

    /// Storefront banner management
    #[command(subcommand)]
    Banner(trailhead::cli::BannerCommands),

    /// Announcement management
    #[command(subcommand, alias = "announce")]
    Announcement(trailhead::cli::AnnouncementCommands),

    /// Export bookings or the catalog
    #[command(subcommand)]
    Export(trailhead::cli::ExportCommands),

    /// Backup and restore
    #[command(subcommand)]
    Backup(trailhead::cli::BackupCommands),

    /// Initialize a new installation
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrailheadPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            trailhead::tui::run_tui(&storage, &settings, &paths)?;
        }
        Some(Commands::Register) => {
            trailhead::registration::prompt::run(&storage, &paths)?;
        }
        Some(Commands::Vendor(cmd)) => {
            handle_vendor_command(&storage, cmd)?;
        }
        Some(Commands::Trek(cmd)) => {
            handle_trek_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Batch(cmd)) => {
            handle_batch_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Booking(cmd)) => {
            handle_booking_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Coupon(cmd)) => {
            handle_coupon_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Ticket(cmd)) => {
            handle_ticket_command(&storage, cmd)?;
        }
        Some(Commands::Banner(cmd)) => {
            handle_banner_command(&storage, cmd)?;
        }
        Some(Commands::Announcement(cmd)) => {
            handle_announcement_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Trailhead at: {}", paths.data_dir().display());
            trailhead::storage::init::initialize_storage(&paths)?;
            settings.setup_completed = true;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  - Run 'trailhead register' to onboard your first vendor");
            println!("  - Run 'trailhead tui' to open the interactive console");
        }
        Some(Commands::Config) => {
            println!("Trailhead Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Page size:       {}", settings.page_size);
            println!("  Setup completed: {}", settings.setup_completed);
        }
        None => {
            println!("Trailhead - terminal console for trek booking marketplaces");
            println!();
            println!("Run 'trailhead --help' for usage information.");
            println!("Run 'trailhead tui' to launch the interactive console.");
        }
    }

    Ok(())
}
