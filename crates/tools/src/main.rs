use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use foundation::math::Vec2;
use scene::World;
use serde::Serialize;
use swath::{EngineConfig, VisibilityMode};
use tools::fixture::{FixtureError, load_config, load_scene, load_schedule};
use tools::report::{SessionSetup, evaluate, pick};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate swath visibility and picking against scene fixtures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Session {
    /// Scene fixture (JSON: objects with properties and footprints)
    #[arg(long)]
    scene: PathBuf,

    /// Engine config (JSON); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Visibility mode: off, selected_plan, filtered, all
    #[arg(long)]
    mode: Option<VisibilityMode>,

    /// Target filter
    #[arg(long)]
    target: Option<String>,

    /// Active analysis run
    #[arg(long)]
    run: Option<String>,

    /// Active plan schedule (JSON array of items with opportunity_id)
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Opportunity to select before evaluating
    #[arg(long)]
    select: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one visibility pass and print visible opportunities with debug info
    Evaluate {
        #[command(flatten)]
        session: Session,
    },

    /// Click at a screen point and print the pick result
    Pick {
        #[command(flatten)]
        session: Session,

        #[arg(long)]
        x: f64,

        #[arg(long)]
        y: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Evaluate { session } => {
            let (world, config, setup) = open(&session)?;
            let report = evaluate(world, config, &setup);
            info!(
                visible = report.visible_opportunity_ids.len(),
                cap_warning = report.cap_warning,
                "evaluated"
            );
            print_json(&report)
        }
        Command::Pick { session, x, y } => {
            let (world, config, setup) = open(&session)?;
            let report = pick(world, config, &setup, Vec2::new(x, y));
            info!(hit = report.hit_type.label(), "picked");
            print_json(&report)
        }
    }
}

fn open(session: &Session) -> Result<(World, EngineConfig, SessionSetup), FixtureError> {
    let world = load_scene(&session.scene)?;
    let config = load_config(session.config.as_deref())?;
    let plan = session.plan.as_deref().map(load_schedule).transpose()?;
    let setup = SessionSetup {
        mode: session.mode,
        filtered_target: session.target.clone(),
        active_run: session.run.clone(),
        plan,
        selected: session.select.clone(),
    };
    Ok((world, config, setup))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
