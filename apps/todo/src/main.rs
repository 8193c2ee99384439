//! Scripted demo of the todo application.
//!
//! Plays through a short session: add todos, complete one, cancel and then
//! confirm a delete, and clear the rest. Dialogs are "rendered" by a
//! subscriber that logs what would be on screen.

use anyhow::Context;
use tickbox_dialogs::{constants, DialogManager};
use tickbox_runtime::metrics::MetricsRecorder;
use tickbox_todo::{AppConfig, TodoFeature, TodoStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| tickbox_todo::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        min_length = config.min_length,
        max_length = config.max_length,
        metrics = config.metrics_enabled,
        "Configuration loaded"
    );

    let mut recorder = MetricsRecorder::new();
    if config.metrics_enabled {
        recorder.install().context("installing metrics recorder")?;
    }

    let dialogs = DialogManager::new();
    let feature = TodoFeature::with_rules(TodoStore::default(), dialogs.clone(), config.validation_rules());

    let _dialog_view = dialogs.subscribe(|snapshot| {
        for dialog in snapshot.visible() {
            info!(
                dialog = %dialog.config.id,
                title = %dialog.config.title,
                message = %dialog.config.message,
                confirm = %dialog.config.confirm_text,
                cancel = %dialog.config.cancel_text,
                "Dialog on screen"
            );
        }
    });
    let _list_view = feature.store().subscribe(|snapshot| {
        let stats = snapshot.stats();
        let summary = stats.summary().unwrap_or_else(|| "nothing to do".to_string());
        info!(
            version = snapshot.version(),
            count = %stats.count_label(),
            summary = %summary,
            "Todo list changed"
        );
    });

    let milk = feature.add("Buy milk")?;
    let dog = feature.add("  Walk the dog  ")?;
    feature.add("Write report")?;

    if let Err(error) = feature.add("   ") {
        info!(%error, "Blank todo rejected");
    }

    feature.toggle(&milk)?;

    feature.request_delete(&dog)?;
    dialogs.cancel(constants::DELETE_TODO_DIALOG_ID)?;
    info!(remaining = feature.stats().total, "Delete cancelled");

    feature.request_delete(&dog)?;
    dialogs.confirm(constants::DELETE_TODO_DIALOG_ID)?;

    for todo in feature.todos() {
        let status = if todo.completed { "x" } else { " " };
        println!("[{status}] {}", todo.text);
    }

    if feature.stats().can_clear_all() {
        feature.request_clear_all()?;
        dialogs.confirm(constants::CLEAR_ALL_TODOS_DIALOG_ID)?;
    }

    info!(count = %feature.stats().count_label(), "Session finished");
    feature.shutdown();

    if let Some(text) = recorder.render() {
        println!("{text}");
    }

    Ok(())
}
