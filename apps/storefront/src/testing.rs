//! Test support: recording implementations of the page collaborators.
//!
//! A [`PageLog`] is a shared journal of everything the session asked the
//! page to do. Each fake holds a clone of the log handle, so a test can
//! build a session, drive commands, and then assert on the exact sequence
//! of presentation effects.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::state::{ConfirmationPrompt, Session};
use crate::surface::{CheckoutAck, DisplaySurface, NotificationSink};
use crate::view::CartView;

/// One presentation effect requested by the session.
#[derive(Debug, Clone)]
pub enum PageEvent {
    CartShown(CartView),
    DrawerSet(bool),
    Pulsed(Duration),
    ConfirmationShown(ConfirmationPrompt),
    ConfirmationHidden,
    Notified(String),
    Acknowledged(String),
}

/// Shared journal of page events, cloneable across the three fakes.
#[derive(Clone, Default)]
pub struct PageLog {
    events: Rc<RefCell<Vec<PageEvent>>>,
}

impl PageLog {
    /// Builds a session wired to recording fakes sharing this log.
    pub fn session(&self) -> Session {
        Session::new(
            Box::new(RecordingSurface(self.clone())),
            Box::new(RecordingToast(self.clone())),
            Box::new(RecordingAck(self.clone())),
        )
    }

    fn push(&self, event: PageEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    /// The most recently shown cart view, if any render happened.
    pub fn last_view(&self) -> Option<CartView> {
        self.events().into_iter().rev().find_map(|e| match e {
            PageEvent::CartShown(view) => Some(view),
            _ => None,
        })
    }

    /// How many full renders the surface received.
    pub fn view_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, PageEvent::CartShown(_)))
            .count()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PageEvent::Notified(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn acknowledgments(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PageEvent::Acknowledged(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// The most recently opened confirmation prompt.
    pub fn last_prompt(&self) -> Option<ConfirmationPrompt> {
        self.events().into_iter().rev().find_map(|e| match e {
            PageEvent::ConfirmationShown(prompt) => Some(prompt),
            _ => None,
        })
    }

    pub fn prompt_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, PageEvent::ConfirmationShown(_)))
            .count()
    }
}

struct RecordingSurface(PageLog);

impl DisplaySurface for RecordingSurface {
    fn show_cart(&mut self, view: &CartView) {
        self.0.push(PageEvent::CartShown(view.clone()));
    }

    fn set_drawer_open(&mut self, open: bool) {
        self.0.push(PageEvent::DrawerSet(open));
    }

    fn pulse(&mut self, duration: Duration) {
        self.0.push(PageEvent::Pulsed(duration));
    }

    fn show_confirmation(&mut self, prompt: &ConfirmationPrompt) {
        self.0.push(PageEvent::ConfirmationShown(prompt.clone()));
    }

    fn hide_confirmation(&mut self) {
        self.0.push(PageEvent::ConfirmationHidden);
    }
}

struct RecordingToast(PageLog);

impl NotificationSink for RecordingToast {
    fn notify(&mut self, message: &str) {
        self.0.push(PageEvent::Notified(message.to_string()));
    }
}

struct RecordingAck(PageLog);

impl CheckoutAck for RecordingAck {
    fn acknowledge(&mut self, message: &str) {
        self.0.push(PageEvent::Acknowledged(message.to_string()));
    }
}
