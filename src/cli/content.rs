//! Banner and announcement CLI commands

use clap::Subcommand;

use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Audience, BannerPlacement};
use crate::services::ContentService;
use crate::storage::Storage;

/// Banner subcommands
#[derive(Subcommand)]
pub enum BannerCommands {
    /// Create a banner
    Create {
        /// Banner title
        title: String,
        /// Image asset key or URL
        #[arg(short, long)]
        image: String,
        /// Target link
        #[arg(short, long, default_value = "")]
        link: String,
        /// Placement (home, listing, checkout)
        #[arg(short, long, default_value = "home")]
        placement: String,
        /// Ordering within the placement (lower first)
        #[arg(short, long, default_value = "0")]
        sort_order: i32,
    },
    /// List banners
    List {
        /// Only banners on this placement (home, listing, checkout)
        #[arg(short, long)]
        placement: Option<String>,
        /// Only live banners
        #[arg(short, long)]
        live: bool,
    },
    /// Activate or deactivate a banner
    SetActive {
        /// Banner ID
        banner: String,
        /// true or false
        active: bool,
    },
    /// Delete a banner
    Delete {
        /// Banner ID
        banner: String,
    },
}

/// Announcement subcommands
#[derive(Subcommand)]
pub enum AnnouncementCommands {
    /// Draft an announcement
    Draft {
        /// Headline
        title: String,
        /// Body text
        #[arg(short, long)]
        body: String,
        /// Audience (everyone, vendors, customers)
        #[arg(short, long, default_value = "everyone")]
        audience: String,
    },
    /// Publish a drafted announcement
    Publish {
        /// Announcement ID
        announcement: String,
    },
    /// List announcements
    List {
        /// Only published announcements
        #[arg(short, long)]
        published: bool,
        /// Narrow to one audience (everyone, vendors, customers)
        #[arg(short, long)]
        audience: Option<String>,
    },
}

/// Handle a banner command
pub fn handle_banner_command(storage: &Storage, cmd: BannerCommands) -> TrailheadResult<()> {
    let service = ContentService::new(storage);

    match cmd {
        BannerCommands::Create {
            title,
            image,
            link,
            placement,
            sort_order,
        } => {
            let placement = BannerPlacement::parse(&placement).ok_or_else(|| {
                TrailheadError::Validation(format!(
                    "Invalid placement '{}'. Valid values: home, listing, checkout",
                    placement
                ))
            })?;

            let banner = service.create_banner(&title, &image, &link, placement, sort_order)?;
            println!("Created banner: {} [{}]", banner.title, banner.placement);
            println!("  ID: {}", banner.id);
        }

        BannerCommands::List { placement, live } => {
            let placement = match placement {
                Some(p) => Some(BannerPlacement::parse(&p).ok_or_else(|| {
                    TrailheadError::Validation(format!("Invalid placement '{}'", p))
                })?),
                None => None,
            };

            let banners: Vec<_> = service
                .list_banners()?
                .into_iter()
                .filter(|b| placement.map_or(true, |p| b.placement == p))
                .filter(|b| !live || b.active)
                .collect();
            if banners.is_empty() {
                println!("No banners found.");
            } else {
                for banner in banners {
                    let state = if banner.active { "live" } else { "off" };
                    println!(
                        "  {}  {} [{}] order {}  ({})",
                        banner.id, banner.title, banner.placement, banner.sort_order, state
                    );
                }
            }
        }

        BannerCommands::SetActive { banner, active } => {
            let id = banner.parse().map_err(|_| TrailheadError::NotFound {
                entity_type: "Banner",
                identifier: banner.clone(),
            })?;
            let banner = service.set_banner_active(id, active)?;
            println!(
                "Banner '{}' is now {}.",
                banner.title,
                if banner.active { "live" } else { "off" }
            );
        }

        BannerCommands::Delete { banner } => {
            let id = banner.parse().map_err(|_| TrailheadError::NotFound {
                entity_type: "Banner",
                identifier: banner.clone(),
            })?;
            service.delete_banner(id)?;
            println!("Banner deleted.");
        }
    }

    Ok(())
}

/// Handle an announcement command
pub fn handle_announcement_command(
    storage: &Storage,
    cmd: AnnouncementCommands,
) -> TrailheadResult<()> {
    let service = ContentService::new(storage);

    match cmd {
        AnnouncementCommands::Draft {
            title,
            body,
            audience,
        } => {
            let audience = Audience::parse(&audience).ok_or_else(|| {
                TrailheadError::Validation(format!(
                    "Invalid audience '{}'. Valid values: everyone, vendors, customers",
                    audience
                ))
            })?;

            let announcement = service.draft_announcement(&title, &body, audience)?;
            println!("Drafted announcement: {}", announcement.title);
            println!("  ID: {}", announcement.id);
        }

        AnnouncementCommands::Publish { announcement } => {
            let id = announcement.parse().map_err(|_| TrailheadError::NotFound {
                entity_type: "Announcement",
                identifier: announcement.clone(),
            })?;
            let announcement = service.publish_announcement(id)?;
            println!("Announcement '{}' published.", announcement.title);
        }

        AnnouncementCommands::List { published, audience } => {
            let audience = match audience {
                Some(a) => Some(Audience::parse(&a).ok_or_else(|| {
                    TrailheadError::Validation(format!("Invalid audience '{}'", a))
                })?),
                None => None,
            };

            let announcements = if published || audience.is_some() {
                service.published_announcements(audience)?
            } else {
                service.list_announcements()?
            };

            if announcements.is_empty() {
                println!("No announcements found.");
            } else {
                for announcement in announcements {
                    println!("  {}  {}", announcement.id, announcement);
                }
            }
        }
    }

    Ok(())
}
