use std::sync::Arc;

use anyhow::Result;
use griot_config::AppConfig;
use griot_contracts::listener::LoggingListener;
use griot_core::carousel::{CarouselDriver, CarouselEngine, CardPosition};
use griot_core::catalog::{Catalog, HOME_SLIDE_COUNT};
use tracing::info;

pub async fn run(
    config: &AppConfig,
    cycles: u64,
    period_ms: Option<u64>,
    transition_ms: Option<u64>,
) -> Result<()> {
    let mut settings = config.carousel;
    if let Some(period) = period_ms {
        settings.auto_advance_period_ms = period;
    }
    if let Some(transition) = transition_ms {
        settings.transition_duration_ms = transition;
    }
    let timing = settings.timing()?;

    let catalog = Catalog::builtin();
    let engine = CarouselEngine::new(timing, Arc::new(LoggingListener));
    let driver =
        CarouselDriver::mount(engine, catalog.carousel_slides(HOME_SLIDE_COUNT));
    info!(?timing, cycles, "carousel mounted");

    print_cards(&driver, 0);
    let mut frames = driver.frames();
    for settle in 1..=cycles {
        frames.wait_for(|frame| frame.settles >= settle).await?;
        print_cards(&driver, settle);
    }

    driver.dispose();
    Ok(())
}

fn print_cards(driver: &CarouselDriver, settle: u64) {
    let line = driver.with_engine(|engine| {
        engine.visible_triple().map(|triple| {
            CardPosition::ALL
                .iter()
                .map(|position| triple.at(*position).title.as_str())
                .collect::<Vec<_>>()
                .join(" | ")
        })
    });
    match line {
        Some(line) => println!("[{settle}] {line}"),
        None => println!("[{settle}] (no slides)"),
    }
}
