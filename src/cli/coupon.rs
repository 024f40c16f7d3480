//! Coupon CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TrailheadError, TrailheadResult};
use crate::models::{Discount, Money};
use crate::services::CouponService;
use crate::storage::Storage;

/// Coupon subcommands
#[derive(Subcommand)]
pub enum CouponCommands {
    /// Create a discount code
    Create {
        /// Code customers will enter
        code: String,
        /// Percent discount (1-100); mutually exclusive with --flat
        #[arg(short, long, conflicts_with = "flat")]
        percent: Option<u8>,
        /// Flat discount amount; mutually exclusive with --percent
        #[arg(short, long)]
        flat: Option<String>,
        /// First valid day (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Last valid day (YYYY-MM-DD)
        #[arg(long)]
        until: String,
        /// Maximum redemptions
        #[arg(short, long)]
        max_uses: Option<u32>,
    },
    /// List coupons
    List,
    /// Preview a code against an amount
    Check {
        /// Coupon code
        code: String,
        /// Amount to discount
        amount: String,
    },
    /// Deactivate a coupon
    Deactivate {
        /// Coupon code
        code: String,
    },
}

fn parse_date(s: &str) -> TrailheadResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TrailheadError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
    })
}

/// Handle a coupon command
pub fn handle_coupon_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CouponCommands,
) -> TrailheadResult<()> {
    let service = CouponService::new(storage);

    match cmd {
        CouponCommands::Create {
            code,
            percent,
            flat,
            from,
            until,
            max_uses,
        } => {
            let discount = match (percent, flat) {
                (Some(pct), None) => Discount::Percent(pct),
                (None, Some(amount)) => Discount::Flat(
                    Money::parse(&amount).map_err(|e| TrailheadError::Validation(e.to_string()))?,
                ),
                _ => {
                    return Err(TrailheadError::Validation(
                        "Specify exactly one of --percent or --flat".into(),
                    ))
                }
            };

            let coupon = service.create(
                &code,
                discount,
                parse_date(&from)?,
                parse_date(&until)?,
                max_uses,
            )?;

            println!("Created coupon: {}", coupon.code);
            println!("  Discount: {}", coupon.discount);
            println!("  Valid:    {} -> {}", coupon.valid_from, coupon.valid_until);
            if let Some(max) = coupon.max_uses {
                println!("  Max uses: {}", max);
            }
        }

        CouponCommands::List => {
            let coupons = service.list()?;
            if coupons.is_empty() {
                println!("No coupons found.");
            } else {
                for coupon in coupons {
                    let state = if coupon.active { "active" } else { "inactive" };
                    let uses = match coupon.max_uses {
                        Some(max) => format!("{}/{}", coupon.times_used, max),
                        None => format!("{}", coupon.times_used),
                    };
                    println!(
                        "  {}  {}  {} -> {}  used {}  [{}]",
                        coupon.code, coupon.discount, coupon.valid_from, coupon.valid_until, uses, state
                    );
                }
            }
        }

        CouponCommands::Check { code, amount } => {
            let amount =
                Money::parse(&amount).map_err(|e| TrailheadError::Validation(e.to_string()))?;
            let today = chrono::Utc::now().date_naive();

            match service.preview(&code, amount, today) {
                Ok(discounted) => {
                    println!(
                        "{} -> {}",
                        amount.format_with_symbol(&settings.currency_symbol),
                        discounted.format_with_symbol(&settings.currency_symbol)
                    );
                }
                Err(e) => println!("Code not applicable: {}", e),
            }
        }

        CouponCommands::Deactivate { code } => {
            let coupon = storage
                .coupons
                .get_by_code(&code)?
                .ok_or_else(|| TrailheadError::coupon_not_found(&code))?;
            let coupon = service.deactivate(coupon.id)?;
            println!("Coupon '{}' deactivated.", coupon.code);
        }
    }

    Ok(())
}
