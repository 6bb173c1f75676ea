//! Render one background frame to an SVG file.

mod svg;

use anyhow::Context;
use backdrop_core::{
    Backdrop, ManualClock, SceneConfig, SceneDriver, SceneKind, Season, Section, ViewportState,
};
use clap::Parser;
use std::path::PathBuf;

fn parse_mode(v: &str) -> Result<SceneKind, String> {
    SceneKind::parse(v).ok_or_else(|| format!("unknown mode {v:?} (seasonal or section)"))
}

fn parse_season(v: &str) -> Result<Season, String> {
    Season::parse(v).ok_or_else(|| format!("unknown season {v:?}"))
}

fn parse_section(v: &str) -> Result<Section, String> {
    Ok(Section::parse(v))
}

fn parse_pair(v: &str, sep: char) -> Result<(f32, f32), String> {
    let (a, b) = v
        .split_once(sep)
        .ok_or_else(|| format!("expected two numbers separated by '{sep}', got {v:?}"))?;
    let num = |s: &str| s.trim().parse::<f32>().map_err(|e| format!("{s:?}: {e}"));
    Ok((num(a)?, num(b)?))
}

fn parse_pointer(v: &str) -> Result<(f32, f32), String> {
    parse_pair(v, ',')
}

fn parse_size(v: &str) -> Result<(f32, f32), String> {
    parse_pair(v, 'x')
}

#[derive(Parser, Debug)]
#[command(name = "backdrop-svg")]
#[command(about = "Render one background frame to SVG", long_about = None)]
struct Args {
    /// Background to render: seasonal (spider web) or section
    #[arg(long = "mode", default_value = "seasonal", value_parser = parse_mode)]
    kind: SceneKind,

    /// Season for the spider web (spring, summer, autumn, winter)
    #[arg(long, value_parser = parse_season, conflicts_with = "month")]
    season: Option<Season>,

    /// Calendar month (1 = January) picking the starting season
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Page section id for the section background
    #[arg(long, default_value = "home", value_parser = parse_section)]
    section: Section,

    /// Scroll offset in CSS pixels
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    scroll: f32,

    /// Pointer position as X,Y; also marks the page as hovered
    #[arg(long, value_parser = parse_pointer)]
    pointer: Option<(f32, f32)>,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "1024x768", value_parser = parse_size)]
    size: (f32, f32),

    #[arg(long)]
    seed: Option<u64>,

    /// Output file
    #[arg(default_value = "backdrop.svg")]
    out: PathBuf,
}

fn build_driver(args: &Args) -> Box<dyn SceneDriver> {
    let mut config = SceneConfig::for_kind(args.kind)
        .with_viewport(ViewportState::new(args.size.0, args.size.1));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let clock = ManualClock::default();
    match args.kind {
        SceneKind::SpiderWeb => {
            let season = args
                .season
                .or_else(|| args.month.map(Season::from_month))
                .unwrap_or(Season::Spring);
            Box::new(Backdrop::seasonal(season, clock, config))
        }
        SceneKind::Section => Box::new(Backdrop::sections(args.section, clock, config)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let mut driver = build_driver(&args);
    driver.on_scroll(args.scroll);
    if let Some((x, y)) = args.pointer {
        driver.on_pointer_enter();
        driver.on_pointer_move(x, y);
    }

    let frame = driver.frame();
    log::info!(
        "[svg] {} with {} drawables -> {}",
        driver.theme().name,
        frame.len(),
        args.out.display()
    );
    std::fs::write(&args.out, svg::to_svg_string(&frame))
        .with_context(|| format!("writing {}", args.out.display()))?;
    Ok(())
}
