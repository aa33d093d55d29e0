use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_companion::{
    config::{AppConfig, Config},
    navigation::{Navigator, Route, Tab},
    screens, AppState,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(&config.app);

    info!("Starting Smart Companion ({})", config.app.environment);
    debug!("Completion settings: {:?}", config.completion);

    let state = AppState::new(config)?;
    let mut navigator = Navigator::new();

    let mut events_rx = state.events.subscribe();
    let mut chat_rx = state.chat.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    draw(&state, &navigator);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_input(&state, &mut navigator, line.trim_end()) {
                    break;
                }
                draw(&state, &navigator);
            }
            Ok(()) = events_rx.changed() => {
                if matches!(navigator.current(), Route::Events) {
                    draw(&state, &navigator);
                }
            }
            Ok(()) = chat_rx.changed() => {
                if matches!(navigator.current(), Route::Chat) {
                    draw(&state, &navigator);
                }
            }
        }
    }

    info!("Bye");
    Ok(())
}

fn init_tracing(app: &AppConfig) {
    // Логи идут в stderr, чтобы не мешать экрану
    let json = app.is_production().then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let plain = (!app.is_production()).then(|| {
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&app.rust_log))
        .with(json)
        .with(plain)
        .init();
}

fn draw(state: &AppState, navigator: &Navigator) {
    let body = screens::render(navigator.current(), &state.events.state(), &state.chat.state());
    println!("\n{}\n\n{}", body, screens::tab_bar(navigator));
    println!(":home  :events  :chat  :back  :quit");
}

/// Обрабатывает строку ввода. Возвращает `false`, когда пора выходить.
fn handle_input(state: &Arc<AppState>, navigator: &mut Navigator, line: &str) -> bool {
    let before = navigator.current().clone();

    match line {
        ":quit" | ":q" => return false,
        ":home" => navigator.select_tab(Tab::Home),
        ":events" => navigator.select_tab(Tab::Events),
        ":chat" => navigator.select_tab(Tab::Chat),
        ":back" => {
            navigator.back();
        }
        "events" if before == Route::Home => navigator.navigate(Route::Events),
        "chat" if before == Route::Home => navigator.navigate(Route::Chat),
        _ => match &before {
            Route::Events => {
                if let Ok(index) = line.trim().parse::<usize>() {
                    let events = state.events.state().events;
                    if let Some(event) = index.checked_sub(1).and_then(|i| events.get(i)) {
                        navigator.open_event(event);
                    }
                }
            }
            Route::Chat => {
                let state = state.clone();
                let prompt = line.to_string();
                tokio::spawn(async move {
                    // ошибка уже записана в журнал, пустой ввод просто игнорируем
                    let _ = state.chat.submit(&prompt).await;
                });
            }
            _ => {}
        },
    }

    on_route_change(state, &before, navigator.current());
    true
}

fn on_route_change(state: &Arc<AppState>, before: &Route, after: &Route) {
    if before == after {
        return;
    }

    if *before == Route::Chat {
        state.chat.detach();
    }
    // Список событий покидаем не в детали - запросы в полёте не нужны
    if *before == Route::Events && !matches!(after, Route::EventDetails(_)) {
        state.events.detach();
    }
    // Как LaunchedEffect: при входе на экран список перезагружается
    if *after == Route::Events && !matches!(before, Route::EventDetails(_)) {
        let state = state.clone();
        tokio::spawn(async move {
            state.events.refresh().await;
        });
    }
}
