//! UI side effects requested by flows, and the seam that performs them.

use tracing::{error, info};

use crate::{routes::Route, state::RosterState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// `replace` swaps the current history entry instead of pushing one.
    Navigate { route: Route, replace: bool },
    Notify(Notification),
}

/// Performs effects on behalf of the presentation layer (router, toasts).
pub trait EffectSink {
    fn navigate(&mut self, route: &Route, replace: bool);
    fn notify(&mut self, notification: &Notification);
}

pub fn apply_effects(sink: &mut dyn EffectSink, effects: &[UiEffect]) {
    for effect in effects {
        match effect {
            UiEffect::Navigate { route, replace } => sink.navigate(route, *replace),
            UiEffect::Notify(notification) => sink.notify(notification),
        }
    }
}

/// Sink for headless sessions: effects are only logged.
#[derive(Debug, Default)]
pub struct TracingEffectSink {
    pub current_route: Option<Route>,
}

impl EffectSink for TracingEffectSink {
    fn navigate(&mut self, route: &Route, replace: bool) {
        info!(route = %route, replace, "ui: navigate");
        self.current_route = Some(*route);
    }

    fn notify(&mut self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Success => info!(message = %notification.message, "ui: notify"),
            NotificationLevel::Error => error!(message = %notification.message, "ui: notify"),
        }
    }
}

/// Raises one error notification each time the roster's fetch error changes
/// to a new message.
#[derive(Debug, Default)]
pub struct FetchErrorNotifier {
    last_seen: Option<String>,
}

impl FetchErrorNotifier {
    pub fn observe(&mut self, state: &RosterState) -> Option<UiEffect> {
        let current = state.error();
        if current == self.last_seen.as_deref() {
            return None;
        }
        self.last_seen = current.map(str::to_string);
        current.map(|message| UiEffect::Notify(Notification::error(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RosterStore;

    #[derive(Default)]
    struct RecordingSink {
        routes: Vec<(Route, bool)>,
        notifications: Vec<Notification>,
    }

    impl EffectSink for RecordingSink {
        fn navigate(&mut self, route: &Route, replace: bool) {
            self.routes.push((*route, replace));
        }

        fn notify(&mut self, notification: &Notification) {
            self.notifications.push(notification.clone());
        }
    }

    #[test]
    fn applies_effects_in_order() {
        let mut sink = RecordingSink::default();
        apply_effects(
            &mut sink,
            &[
                UiEffect::Navigate {
                    route: Route::Roster,
                    replace: false,
                },
                UiEffect::Notify(Notification::success("saved")),
            ],
        );
        assert_eq!(sink.routes, vec![(Route::Roster, false)]);
        assert_eq!(sink.notifications, vec![Notification::success("saved")]);
    }

    #[test]
    fn notifies_once_per_new_fetch_error() {
        let store = RosterStore::new();
        let mut notifier = FetchErrorNotifier::default();
        assert_eq!(notifier.observe(&store.snapshot()), None);

        store.begin_load();
        store.fail_load(Some("Network error".into()));
        assert_eq!(
            notifier.observe(&store.snapshot()),
            Some(UiEffect::Notify(Notification::error("Network error")))
        );
        assert_eq!(notifier.observe(&store.snapshot()), None);

        store.begin_load();
        assert_eq!(notifier.observe(&store.snapshot()), None);
        store.fail_load(Some("Network error".into()));
        assert_eq!(
            notifier.observe(&store.snapshot()),
            Some(UiEffect::Notify(Notification::error("Network error")))
        );
    }

    #[test]
    fn tracing_sink_tracks_current_route() {
        let mut sink = TracingEffectSink::default();
        sink.navigate(&Route::Add, false);
        sink.notify(&Notification::error("ignored"));
        assert_eq!(sink.current_route, Some(Route::Add));
    }
}
