use std::time::Duration;

use anyhow::{Context, bail};
use tokio::sync::mpsc;
use tracing::{debug, info};
use vitrine_config::{ConfigLoad, ShowcaseConfig};
use vitrine_core::{
    Carousel, CarouselOptions, PageKind, PaginationController,
    PaginationView, StaticCatalog, ThemeTokens, assemble, compute_page_window,
};
use vitrine_model::{LoopMode, Slide};

use crate::{ConfigFormat, OutputFormat};

/// Upper bound on how long the carousel command waits for one slide change
/// before giving up.
const TICK_GRACE: Duration = Duration::from_secs(2);

pub fn pages(
    config: &ShowcaseConfig,
    page: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let kinds = match page {
        Some(name) => vec![name.parse::<PageKind>()?],
        None => PageKind::ALL.to_vec(),
    };

    let catalog = StaticCatalog::new();
    let mut rendered = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let page = assemble(kind, &catalog, config)
            .with_context(|| format!("failed to assemble the {kind} page"))?;
        info!(page = %kind, "page assembled");
        rendered.push(page);
    }

    match format {
        OutputFormat::Text => {
            let text: Vec<String> =
                rendered.iter().map(|page| page.to_text()).collect();
            println!("{}", text.join("\n\n"));
        }
        OutputFormat::Json => {
            for page in &rendered {
                println!("{}", page.to_json()?);
            }
        }
    }
    Ok(())
}

pub fn paginate(
    config: &ShowcaseConfig,
    current: usize,
    total: usize,
    max: Option<usize>,
) -> anyhow::Result<()> {
    let max = max.unwrap_or(config.pagination.max_visible_pages);
    if max == 0 {
        bail!("--max must be at least 1");
    }

    let window = compute_page_window(current, total, max);
    let labels: Vec<String> =
        window.iter().map(|label| label.to_string()).collect();
    println!("{}", labels.join(" "));

    let controller = PaginationController::from_config(&config.pagination, total)
        .with_max_visible_pages(max)
        .with_current_page(current);
    if controller.current_page() != current {
        debug!(
            requested = current,
            shown = controller.current_page(),
            "bar clamps the current page"
        );
    }

    let tokens = ThemeTokens::for_preset(config.theme.scale_preset);
    match PaginationView::from_config(&controller, &config.pagination, &tokens)
    {
        Some(view) => println!("{}", view.to_text()),
        None => println!("(hidden)"),
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct CarouselRun {
    pub slides: usize,
    pub interval_ms: Option<u64>,
    pub ticks: usize,
    pub infinite: bool,
}

pub async fn carousel(
    config: &ShowcaseConfig,
    run: CarouselRun,
) -> anyhow::Result<()> {
    if run.slides < 2 {
        bail!("autoplay needs at least two slides (got {})", run.slides);
    }

    let interval = run
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.carousel.autoplay_interval());
    let options = CarouselOptions::from(&config.carousel)
        .autoplay(interval)
        .loop_mode(LoopMode::from_flag(run.infinite));

    let slides = (0..run.slides)
        .map(|index| Slide::new(index, format!("Slide {}", index + 1)))
        .collect();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut carousel =
        Carousel::mount_with_observer(slides, options, move |index| {
            let _ = tx.send(index);
        })?;
    info!(
        slides = run.slides,
        interval_ms = interval.as_millis() as u64,
        "carousel playing"
    );

    println!("{}", carousel.view().to_text());
    for tick in 1..=run.ticks {
        let index = tokio::time::timeout(interval + TICK_GRACE, rx.recv())
            .await
            .context("autoplay stopped ticking")?
            .context("carousel released its observer")?;
        println!("tick {tick}: slide {}", index + 1);
    }

    carousel.pause();
    println!("{}", carousel.view().to_text());
    Ok(())
}

pub fn config(
    load: &ConfigLoad,
    print: bool,
    format: ConfigFormat,
) -> anyhow::Result<()> {
    println!("source: {}", load.source.describe());
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => println!("warning: {} ({hint})", warning.message),
            None => println!("warning: {}", warning.message),
        }
    }

    if print {
        let rendered = match format {
            ConfigFormat::Toml => toml::to_string_pretty(&load.config)
                .context("failed to serialize configuration as TOML")?,
            ConfigFormat::Json => serde_json::to_string_pretty(&load.config)
                .context("failed to serialize configuration as JSON")?,
        };
        println!("{rendered}");
    }
    Ok(())
}
