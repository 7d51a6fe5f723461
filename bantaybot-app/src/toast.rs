use std::time::{Duration, Instant};

/// Visibility phase of the transient status toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Hidden,
    Visible,
    Fading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    /// How long the message stays fully visible.
    pub visible: Duration,
    /// Fade-out tail before the toast is gone.
    pub fade: Duration,
}

impl Default for ToastTimings {
    /// Stock 2.5 s dismissal window: 2.2 s visible plus a 300 ms fade.
    fn default() -> Self {
        Self {
            visible: Duration::from_millis(2200),
            fade: Duration::from_millis(300),
        }
    }
}

/// Fire-and-forget timed message. `show` enters `Visible`; the phase then
/// decays to `Fading` and `Hidden` purely as a function of the show instant,
/// so no timer task is needed to keep it honest. A newer `show` supersedes
/// the previous message and restarts the clock.
#[derive(Debug, Clone)]
pub struct Toast {
    timings: ToastTimings,
    message: String,
    shown_at: Option<Instant>,
}

impl Toast {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            timings,
            message: String::new(),
            shown_at: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.shown_at = Some(now);
    }

    pub fn phase_at(&self, now: Instant) -> ToastPhase {
        let Some(shown_at) = self.shown_at else {
            return ToastPhase::Hidden;
        };

        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed < self.timings.visible {
            ToastPhase::Visible
        } else if elapsed < self.timings.visible + self.timings.fade {
            ToastPhase::Fading
        } else {
            ToastPhase::Hidden
        }
    }

    /// The message, while it is still on screen.
    pub fn visible_message(&self, now: Instant) -> Option<&str> {
        match self.phase_at(now) {
            ToastPhase::Hidden => None,
            ToastPhase::Visible | ToastPhase::Fading => Some(self.message.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_first_show() {
        let toast = Toast::new(ToastTimings::default());
        assert_eq!(toast.phase_at(Instant::now()), ToastPhase::Hidden);
        assert_eq!(toast.visible_message(Instant::now()), None);
    }

    #[test]
    fn test_phase_decay() {
        let mut toast = Toast::new(ToastTimings::default());
        let shown = Instant::now();
        toast.show("saved", shown);

        assert_eq!(toast.phase_at(shown), ToastPhase::Visible);
        assert_eq!(
            toast.phase_at(shown + Duration::from_millis(2199)),
            ToastPhase::Visible
        );
        assert_eq!(
            toast.phase_at(shown + Duration::from_millis(2200)),
            ToastPhase::Fading
        );
        assert_eq!(
            toast.phase_at(shown + Duration::from_millis(2499)),
            ToastPhase::Fading
        );
        assert_eq!(
            toast.phase_at(shown + Duration::from_millis(2500)),
            ToastPhase::Hidden
        );

        assert_eq!(
            toast.visible_message(shown + Duration::from_millis(100)),
            Some("saved")
        );
        assert_eq!(
            toast.visible_message(shown + Duration::from_millis(2500)),
            None
        );
    }

    #[test]
    fn test_new_message_supersedes_and_restarts() {
        let mut toast = Toast::new(ToastTimings::default());
        let first = Instant::now();
        toast.show("first", first);

        let second = first + Duration::from_millis(2000);
        toast.show("second", second);

        let later = first + Duration::from_millis(2300);
        assert_eq!(toast.phase_at(later), ToastPhase::Visible);
        assert_eq!(toast.visible_message(later), Some("second"));
    }
}
