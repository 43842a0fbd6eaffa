//! Glint Page Core
//!
//! Lead-capture page state for a single-page site: the modal host with its
//! scroll lock, the contact and two-step partner signup forms, the guarded
//! chat-widget hook, and cosmetic theme/dark-mode selectors — composed with
//! the motion engine into one `step(dt, inputs)` frame loop.

pub mod chat;
pub mod forms;
pub mod modal;

use serde::{Deserialize, Serialize};

use glint_motion_core::{
    Config as MotionConfig, Engine as MotionEngine, Inputs as MotionInputs,
    Outputs as MotionOutputs, Theme,
};

pub use crate::chat::{open_chat, ChatLauncher};
pub use crate::forms::{
    ContactField, ContactFields, ContactForm, FormError, PartnerField, PartnerFields, PartnerForm,
    PartnerStep, SUBMIT_CONFIRMATION_SECS,
};
pub use crate::modal::{CloseVia, ModalHost, ModalKind, ScrollLock};

/// UI interactions applied before stepping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    OpenModal { kind: ModalKind },
    CloseModal { via: CloseVia },
    ContactField { field: ContactField, value: String },
    SubmitContact,
    PartnerField { field: PartnerField, value: String },
    PartnerConsent { granted: bool },
    PartnerNext,
    PartnerBack,
    SubmitPartner,
    OpenChat,
    SetTheme { theme: Theme },
    SetDarkMode { enabled: bool },
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PageInputs {
    #[serde(default)]
    pub motion: MotionInputs,
    #[serde(default)]
    pub ui: Vec<UiEvent>,
}

/// Discrete page-level signals for this frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum PageEvent {
    ModalOpened { kind: ModalKind },
    ModalClosed { kind: ModalKind, via: CloseVia },
    ScrollLockChanged { locked: bool },
    ContactSubmitted,
    ContactConfirmationExpired,
    PartnerStepChanged { step: PartnerStep },
    PartnerSubmitted,
    FormRejected { reason: String },
    ChatOpened,
    ChatUnavailable,
    ThemeChanged { theme: Theme },
    DarkModeChanged { enabled: bool },
}

/// One stepped frame: motion changes plus page events.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageFrame {
    pub epoch: u64,
    pub dt: f32,
    pub motion: MotionOutputs,
    pub events: Vec<PageEvent>,
}

/// Page state composed over the motion engine.
#[derive(Debug)]
pub struct PageEngine {
    pub motion: MotionEngine,
    modal: ModalHost,
    contact: ContactForm,
    partner: PartnerForm,
    theme: Theme,
    dark_mode: bool,
    epoch: u64,
}

impl PageEngine {
    pub fn new(cfg: MotionConfig) -> Self {
        Self {
            motion: MotionEngine::new(cfg),
            modal: ModalHost::new(),
            contact: ContactForm::default(),
            partner: PartnerForm::default(),
            theme: Theme::default(),
            dark_mode: true,
            epoch: 0,
        }
    }

    #[inline]
    pub fn active_modal(&self) -> Option<ModalKind> {
        self.modal.active()
    }

    #[inline]
    pub fn is_scroll_locked(&self) -> bool {
        self.modal.is_scroll_locked()
    }

    #[inline]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    #[inline]
    pub fn partner(&self) -> &PartnerForm {
        &self.partner
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[inline]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Advance the page by dt seconds: UI events first, then the motion
    /// engine and the contact confirmation window.
    pub fn step(
        &mut self,
        dt: f32,
        inputs: PageInputs,
        mut chat: Option<&mut (dyn ChatLauncher + '_)>,
    ) -> PageFrame {
        self.epoch = self.epoch.wrapping_add(1);
        let mut events = Vec::new();

        for event in inputs.ui {
            self.apply_ui_event(event, &mut events, chat.as_deref_mut());
        }

        let motion = self.motion.update(dt, inputs.motion).clone();

        if self.contact.tick(dt) {
            events.push(PageEvent::ContactConfirmationExpired);
        }

        PageFrame {
            epoch: self.epoch,
            dt,
            motion,
            events,
        }
    }

    fn apply_ui_event(
        &mut self,
        event: UiEvent,
        events: &mut Vec<PageEvent>,
        chat: Option<&mut (dyn ChatLauncher + '_)>,
    ) {
        match event {
            UiEvent::OpenModal { kind } => {
                // A fresh lead-capture modal always starts from a blank form
                // on step one.
                if matches!(kind, ModalKind::TrialSignup | ModalKind::PartnerSignup) {
                    self.partner.reset();
                }
                let t = self.modal.open(kind);
                events.push(PageEvent::ModalOpened { kind });
                if t.lock_changed {
                    events.push(PageEvent::ScrollLockChanged { locked: true });
                }
            }
            UiEvent::CloseModal { via } => self.close_modal(via, events),
            UiEvent::ContactField { field, value } => {
                self.contact.set_field(field, &value);
            }
            UiEvent::SubmitContact => {
                self.contact.submit();
                events.push(PageEvent::ContactSubmitted);
            }
            UiEvent::PartnerField { field, value } => {
                self.partner.set_field(field, &value);
            }
            UiEvent::PartnerConsent { granted } => {
                self.partner.set_email_consent(granted);
            }
            UiEvent::PartnerNext => match self.partner.next() {
                Ok(step) => events.push(PageEvent::PartnerStepChanged { step }),
                Err(e) => events.push(PageEvent::FormRejected {
                    reason: e.to_string(),
                }),
            },
            UiEvent::PartnerBack => {
                let step = self.partner.back();
                events.push(PageEvent::PartnerStepChanged { step });
            }
            UiEvent::SubmitPartner => match self.partner.submit() {
                Ok(()) => {
                    events.push(PageEvent::PartnerSubmitted);
                    self.close_modal(CloseVia::Submit, events);
                }
                Err(e) => events.push(PageEvent::FormRejected {
                    reason: e.to_string(),
                }),
            },
            UiEvent::OpenChat => {
                if open_chat(chat) {
                    events.push(PageEvent::ChatOpened);
                } else {
                    events.push(PageEvent::ChatUnavailable);
                }
            }
            UiEvent::SetTheme { theme } => {
                if self.theme != theme {
                    self.theme = theme;
                    events.push(PageEvent::ThemeChanged { theme });
                }
            }
            UiEvent::SetDarkMode { enabled } => {
                if self.dark_mode != enabled {
                    self.dark_mode = enabled;
                    events.push(PageEvent::DarkModeChanged { enabled });
                }
            }
        }
    }

    fn close_modal(&mut self, via: CloseVia, events: &mut Vec<PageEvent>) {
        if let Some(t) = self.modal.close(via) {
            events.push(PageEvent::ModalClosed { kind: t.kind, via });
            if t.lock_changed {
                events.push(PageEvent::ScrollLockChanged { locked: false });
            }
        }
    }
}
