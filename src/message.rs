use crate::model::{NavTarget, Route};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Signals that cross view boundaries. Views send them; the app drains
/// them once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    OpenContactModal,
    StartPageLoad,
    Navigate(Route),
    Back,
    NavLink(NavTarget),
    OpenPreview(usize),
    OpenExternal(String),
    ToggleMenu,
    CloseMenu,
    ToggleTheme,
}

/// Cloneable sending side of the event bus.
#[derive(Clone)]
pub struct EventSender(Sender<AppEvent>);

impl EventSender {
    /// Fire-and-forget; a closed bus just drops the event.
    pub fn send(&self, event: AppEvent) {
        if self.0.send(event).is_err() {
            tracing::debug!("event bus closed");
        }
    }
}

pub struct EventBus {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> EventSender {
        EventSender(self.tx.clone())
    }

    /// Everything sent so far, in order.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.rx.try_iter().collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
