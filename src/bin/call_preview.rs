//! Call Preview
//!
//! Evaluates one character against one call and prints the verdict,
//! label rows and (optionally) the overlay geometry as JSON.

use clap::Parser;
use masks_dispatch::cooldown::Combatant;
use masks_dispatch::core::{config, set_config, DispatchConfig, ParticipantId};
use masks_dispatch::dispatch::{Call, CallType, Desk, Dispatcher};
use masks_dispatch::fit::{label_rows, LabelRow, RequirementSet};
use masks_dispatch::labels::{Character, Condition, Conditions, EffectiveLabels, Label, LabelSet};
use masks_dispatch::overlay::OverlayGraph;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Call Preview - check how a character fits a call
#[derive(Parser, Debug)]
#[command(name = "call_preview")]
#[command(about = "Classify a character against call requirements and print JSON")]
struct Args {
    /// Character name
    #[arg(long, default_value = "Hero")]
    name: String,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    danger: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    freak: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    savior: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    mundane: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    superior: i32,

    /// Marked condition (afraid, angry, guilty, hopeless, insecure); repeatable
    #[arg(long = "condition")]
    conditions: Vec<String>,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    forward: i32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    ongoing: i32,

    /// Requirement as label=value (e.g. danger=2); repeatable
    #[arg(long = "require")]
    requirements: Vec<String>,

    /// Call type key
    #[arg(long, default_value = "assault")]
    call_type: String,

    /// Team size used for the cooldown after --dispatch
    #[arg(long, default_value_t = 1)]
    team_size: usize,

    /// Run the full dispatch (with the settle delay) instead of a preview
    #[arg(long)]
    dispatch: bool,

    /// Include call sheet overlay geometry
    #[arg(long)]
    overlay: bool,

    /// Config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// JSON output structure
#[derive(Serialize)]
struct Preview {
    name: String,
    call_type: CallType,
    effective: EffectiveLabels,
    tooltip: String,
    requirements: RequirementSet,
    verdict: masks_dispatch::fit::FitVerdict,
    verdict_label: &'static str,
    rows: Vec<LabelRow>,
    summary: Option<String>,
    forward_after: Option<i32>,
    cooldown_turns: Option<u32>,
    overlay: Option<OverlayGraph>,
}

fn parse_conditions(names: &[String]) -> Result<Conditions, String> {
    let mut conditions = Conditions::none();
    for name in names {
        let condition =
            Condition::from_key(name).ok_or_else(|| format!("unknown condition: {}", name))?;
        conditions.set(condition, true);
    }
    Ok(conditions)
}

fn parse_requirements(entries: &[String]) -> Result<RequirementSet, String> {
    let mut pairs = Vec::new();
    for entry in entries {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("expected label=value, got '{}'", entry))?;
        let value: i64 = value
            .trim()
            .parse()
            .map_err(|e| format!("bad requirement value '{}': {}", value, e))?;
        pairs.push((key.trim().to_string(), value));
    }
    Ok(RequirementSet::from_pairs(
        pairs.iter().map(|(key, value)| (key.as_str(), Some(*value))),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        if set_config(DispatchConfig::load(path)?).is_err() {
            tracing::warn!("Config already set, ignoring {}", path.display());
        }
    }

    let labels = LabelSet::new()
        .with(Label::Danger, args.danger)
        .with(Label::Freak, args.freak)
        .with(Label::Savior, args.savior)
        .with(Label::Mundane, args.mundane)
        .with(Label::Superior, args.superior);
    let character = Character::new(args.name.clone(), labels)
        .with_conditions(parse_conditions(&args.conditions)?)
        .with_forward(args.forward)
        .with_ongoing(args.ongoing);
    let requirements = parse_requirements(&args.requirements)?;
    let call_type: CallType = args.call_type.parse()?;

    let participant = ParticipantId::new("preview");
    let preset = config().presets.call_sheet;
    let mut desk = Desk::default();
    desk.add_character(participant.clone(), character.clone());
    desk.set_encounter(
        (0..args.team_size)
            .map(|i| {
                if i == 0 {
                    Combatant::character(participant.as_str())
                } else {
                    Combatant::character(format!("teammate-{}", i))
                }
            })
            .collect(),
    );
    let call_id = desk.add_call(Call::new("Preview", call_type, requirements));

    let effective = character.effective();
    let (verdict, summary, forward_after, cooldown_turns) = if args.dispatch {
        let dispatcher = Dispatcher::new(desk.clone());
        dispatcher.assign(call_id, participant.clone()).await?;
        let settlement = dispatcher.dispatch(call_id).await?.await??;
        let desk_after = dispatcher.desk().await;
        let turns = desk_after
            .cooldowns()
            .remaining(&participant, desk_after.max_cooldown());
        desk = desk_after.clone();
        (
            settlement.verdict,
            Some(settlement.to_string()),
            Some(settlement.forward),
            Some(turns),
        )
    } else {
        (desk.preview(call_id, &participant)?, None, None, None)
    };

    let overlay = if args.overlay {
        let hovered = (!args.dispatch).then_some(&participant);
        Some(desk.overlay(call_id, hovered, &preset)?)
    } else {
        None
    };

    let preview = Preview {
        name: character.name.clone(),
        call_type,
        tooltip: effective.tooltip(),
        rows: label_rows(Some(&effective.labels), &requirements),
        effective,
        requirements,
        verdict,
        verdict_label: verdict.display_label(),
        summary,
        forward_after,
        cooldown_turns,
        overlay,
    };

    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
