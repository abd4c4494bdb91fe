//! Locate command implementation
//!
//! One-off resolution of a coordinate pair to its IANA time zone, optionally
//! localising a UTC timestamp into that zone. Useful for spot-checking trace
//! data and boundary behavior without assembling a CSV stream.

use std::str::FromStr;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use tracing::{debug, info};

use super::shared::setup_logging;
use crate::app::services::timezone_lookup::{TimezoneLookup, TzfTimezoneLookup};
use crate::cli::args::LocateArgs;
use crate::constants::{LOCAL_TIMESTAMP_FORMAT, UTC_TIMESTAMP_FORMAT};
use crate::{Error, Result};

/// Locate command runner
pub fn run_locate(args: LocateArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    info!("Loading timezone boundary index");
    let lookup = TzfTimezoneLookup::new();

    let zone_id = lookup
        .resolve(args.latitude, args.longitude)
        .ok_or_else(|| Error::zone_not_found(args.latitude, args.longitude))?;

    match &args.timestamp {
        Some(timestamp) => {
            // Validated above, so the parse cannot fail here
            let instant = NaiveDateTime::parse_from_str(timestamp.trim(), UTC_TIMESTAMP_FORMAT)
                .map_err(|_| {
                    Error::configuration(format!("Timestamp '{}' is not parseable", timestamp))
                })?
                .and_utc();
            let zone = Tz::from_str(zone_id).map_err(|_| {
                Error::configuration(format!("Zone id '{}' is not in the tz database", zone_id))
            })?;
            let local = instant.with_timezone(&zone).format(LOCAL_TIMESTAMP_FORMAT);
            println!("{},{}", zone_id, local);
        }
        None => {
            println!("{}", zone_id);
        }
    }

    Ok(())
}
