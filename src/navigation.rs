use tracing::debug;

use crate::models::Event;

/// Экраны приложения.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Events,
    EventDetails(Event),
    Chat,
}

/// Вкладки нижней панели.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Events,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Events, Tab::Chat];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Events => "Events",
            Tab::Chat => "Assistant",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Events => Route::Events,
            Tab::Chat => Route::Chat,
        }
    }
}

/// Стек переходов с корнем `Home`. Корень никогда не снимается.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self { stack: vec![Route::Home] }
    }

    pub fn current(&self) -> &Route {
        // стек не бывает пустым
        self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating to {:?}", route);
        self.stack.push(route);
    }

    /// Переход по вкладке: стек сбрасывается к корню, затем открывается вкладка.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.is_selected(tab) {
            return;
        }
        self.stack.truncate(1);
        if tab != Tab::Home {
            self.navigate(tab.route());
        }
    }

    /// Открывает детали события, если у него есть id.
    pub fn open_event(&mut self, event: &Event) -> bool {
        if !event.has_id() {
            debug!("Event without id cannot be opened");
            return false;
        }
        self.navigate(Route::EventDetails(event.clone()));
        true
    }

    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn is_selected(&self, tab: Tab) -> bool {
        *self.current() == tab.route()
    }
}
