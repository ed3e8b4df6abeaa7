//! Lookup command handler
//!
//! Resolves a place and reports the hazards covering it.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::hazard::client::HazardClient;
use crate::places::resolver::PlaceResolver;
use crate::places::ResolvedPlace;
use crate::present::{build_views, HazardView};
use crate::share::{share_url, share_via, StdoutChannel};
use clap::Args;

/// Lookup command arguments
#[derive(Args)]
pub struct LookupArgs {
    /// Free-text place query (e.g. "rocky mountain")
    pub place: Option<String>,

    /// Latitude
    #[arg(long, requires = "lng", conflicts_with_all = ["place", "place_id"])]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,

    /// Resolve a known place id directly
    #[arg(long, conflicts_with = "place")]
    pub place_id: Option<String>,

    /// List suggestions for the query instead of resolving the first one
    #[arg(long)]
    pub suggest: bool,

    /// Print a shareable link for the resolved place
    #[arg(long)]
    pub share: bool,

    /// Output hazards as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the lookup command
pub async fn run(args: LookupArgs) -> Result<()> {
    let config = Config::load()?;
    let resolver = PlaceResolver::from_config(&config);
    let client = HazardClient::new(config.api.base_url.clone());

    // Direct coordinate lookup skips place resolution entirely.
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let hazards = client.query_by_point(lat, lng).await?;
        print_hazards(&build_views(&hazards), args.json)?;
        return Ok(());
    }

    let place = match (&args.place_id, &args.place) {
        (Some(place_id), _) => resolver
            .place_details(place_id)
            .await?
            .ok_or_else(|| Error::PlaceLookup(format!("Unknown place id: {}", place_id)))?,
        (None, Some(query)) => {
            let suggestions = resolver.suggestions(query).await?;

            if args.suggest {
                if suggestions.is_empty() {
                    println!("No matches for '{}'", query);
                } else {
                    for s in &suggestions {
                        println!("{}  [{}]", s.description, s.place_id);
                    }
                }
                return Ok(());
            }

            let first = suggestions.first().ok_or_else(|| {
                Error::PlaceLookup(format!("No place matched '{}'", query))
            })?;
            eprintln!("Resolved to: {}", first.description);

            resolver.place_details(&first.place_id).await?.ok_or_else(|| {
                Error::PlaceLookup(format!("Could not resolve '{}'", first.description))
            })?
        }
        (None, None) => {
            eprintln!("Error: Provide a place query, --place-id, or --lat/--lng");
            std::process::exit(1);
        }
    };

    print_place(&place);

    if args.share {
        let origin = config.share.public_origin.trim();
        let origin = (!origin.is_empty()).then_some(origin);
        let url = share_url(&place.place_id, origin);
        share_via(&[&StdoutChannel], &url);
    }

    // Place details are already on screen; a hazard backend outage
    // must not erase them.
    let Some(point) = place.coordinates else {
        eprintln!("No coordinates for this place; skipping hazard lookup");
        return Ok(());
    };

    match client.query_by_point(point.lat, point.lng).await {
        Ok(hazards) => print_hazards(&build_views(&hazards), args.json),
        Err(e) => {
            eprintln!("Hazard lookup failed: {}", e);
            Err(e)
        }
    }
}

fn print_place(place: &ResolvedPlace) {
    println!("{}", place.name);
    if let Some(address) = &place.formatted_address {
        println!("  {}", address);
    }
    if let Some(point) = place.coordinates {
        println!("  {:.4}, {:.4}", point.lat, point.lng);
    }
}

fn print_hazards(views: &[HazardView], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(views)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("\nNo known hazards at this location");
        return Ok(());
    }

    println!("\nHazards:");
    for view in views {
        println!(
            "  {} [{}] ({})",
            view.name, view.severity_label, view.kind_label
        );
        if let Some(description) = &view.description {
            println!("    {}", description);
        }
        if !view.areas.is_empty() {
            println!("    Areas: {}", view.areas.join(", "));
        }
        if let Some(tips) = &view.tips {
            for tip in tips {
                println!("    Tip: {} - {}", tip.name, tip.description);
            }
        }
    }

    Ok(())
}
