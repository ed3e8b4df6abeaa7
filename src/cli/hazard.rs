//! Hazard command handler
//!
//! Admin operations against the hazard API: creating hazards and
//! attaching circular coverage areas.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::hazard::client::HazardClient;
use crate::hazard::{HazardKind, NewHazard, NewPresentation, NewTip, Severity};
use clap::{Args, Subcommand};
use uuid::Uuid;

/// Hazard command arguments
#[derive(Args)]
pub struct HazardArgs {
    #[command(subcommand)]
    pub command: HazardCommand,

    /// Admin token (falls back to the ADMIN_TOKEN environment variable)
    #[arg(long, global = true)]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum HazardCommand {
    /// Create a hazard
    Add {
        /// Hazard name (unique)
        name: String,

        /// Severity: low, medium, or high
        #[arg(long, short = 's')]
        severity: String,

        /// Category: animal, event, weather, or disease
        #[arg(long = "type", short = 't')]
        kind: String,

        /// Description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Safety tip as "name:description" (repeatable)
        #[arg(long)]
        tip: Vec<String>,
    },

    /// Attach a circular coverage area to a hazard
    Present {
        /// Hazard id
        hazard_id: Uuid,

        /// Center latitude
        #[arg(long)]
        lat: f64,

        /// Center longitude
        #[arg(long)]
        lng: f64,

        /// Radius in meters
        #[arg(long, short = 'r')]
        radius: f64,

        /// Notes shown alongside this area
        #[arg(long)]
        notes: Option<String>,

        /// Named location to associate
        #[arg(long)]
        location_id: Option<Uuid>,
    },
}

/// Run the hazard command
pub async fn run(args: HazardArgs) -> Result<()> {
    let config = Config::load()?;

    let token = args
        .token
        .unwrap_or_else(|| config.api.admin_token.clone());
    if token.trim().is_empty() {
        return Err(Error::Config(
            "Admin token required (set ADMIN_TOKEN or pass --token)".to_string(),
        ));
    }

    let client = HazardClient::new(config.api.base_url.clone()).with_admin_token(token);

    match args.command {
        HazardCommand::Add {
            name,
            severity,
            kind,
            description,
            tip,
        } => {
            let payload = NewHazard {
                name,
                severity: parse_severity(&severity)?,
                kind: parse_kind(&kind)?,
                description,
                tips: tip.iter().map(|t| parse_tip(t)).collect::<Result<_>>()?,
            };

            let hazard = client.create_hazard(&payload).await?;
            println!("Created hazard {} ({})", hazard.name, hazard.id);
        }

        HazardCommand::Present {
            hazard_id,
            lat,
            lng,
            radius,
            notes,
            location_id,
        } => {
            let payload = NewPresentation {
                latitude: lat,
                longitude: lng,
                radius_meters: radius,
                notes,
                location_id,
            };

            let presentation = client.add_presentation(hazard_id, &payload).await?;
            println!(
                "Added coverage area {} to hazard {}",
                presentation.id, hazard_id
            );
        }
    }

    Ok(())
}

fn parse_severity(value: &str) -> Result<Severity> {
    match value.to_lowercase().as_str() {
        "low" => Ok(Severity::Low),
        "medium" => Ok(Severity::Medium),
        "high" => Ok(Severity::High),
        other => Err(Error::Validation(format!(
            "Unknown severity '{}' (expected low, medium, or high)",
            other
        ))),
    }
}

fn parse_kind(value: &str) -> Result<HazardKind> {
    match value.to_lowercase().as_str() {
        "animal" => Ok(HazardKind::Animal),
        "event" => Ok(HazardKind::Event),
        "weather" => Ok(HazardKind::Weather),
        "disease" => Ok(HazardKind::Disease),
        other => Err(Error::Validation(format!(
            "Unknown hazard type '{}' (expected animal, event, weather, or disease)",
            other
        ))),
    }
}

fn parse_tip(value: &str) -> Result<NewTip> {
    let (name, description) = value.split_once(':').ok_or_else(|| {
        Error::Validation(format!("Tip must be 'name:description', got '{}'", value))
    })?;

    Ok(NewTip {
        name: name.trim().to_string(),
        description: description.trim().to_string(),
    })
}
