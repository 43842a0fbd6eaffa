//! Lead-capture form state.
//!
//! Submission never leaves the page: the contact form flips a local
//! confirmation flag for a fixed window, the partner form walks two steps and
//! reports completion so the owning modal can close. No network anywhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the contact confirmation stays visible after submit.
pub const SUBMIT_CONFIRMATION_SECS: f32 = 3.0;

/// Validation failures surfaced to the UI; all recoverable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("submit is only available on the contact-info step")]
    NotOnFinalStep,
}

/// Contact-section field values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

/// The inline contact form. Submission always succeeds locally and shows a
/// confirmation for SUBMIT_CONFIRMATION_SECS.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    confirmation_remaining: Option<f32>,
}

impl ContactForm {
    pub fn set_field(&mut self, field: ContactField, value: &str) {
        let slot = match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Company => &mut self.fields.company,
            ContactField::Phone => &mut self.fields.phone,
            ContactField::Message => &mut self.fields.message,
        };
        *slot = value.to_string();
    }

    /// Flip the confirmation window open (restarting it on repeat submits).
    pub fn submit(&mut self) {
        self.confirmation_remaining = Some(SUBMIT_CONFIRMATION_SECS);
    }

    #[inline]
    pub fn is_submitted(&self) -> bool {
        self.confirmation_remaining.is_some()
    }

    /// Advance the confirmation window; returns true when it just expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        if let Some(remaining) = self.confirmation_remaining {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.confirmation_remaining = None;
                return true;
            }
            self.confirmation_remaining = Some(remaining);
        }
        false
    }
}

/// Partner/trial signup field values across both steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerFields {
    // Step 1 - company info
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub partner_status: String,
    // Step 2 - contact info
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub business_email: String,
    #[serde(default)]
    pub business_phone: String,
    #[serde(default)]
    pub additional_info: String,
    #[serde(default)]
    pub email_consent: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerField {
    Company,
    CompanySize,
    Country,
    PartnerStatus,
    FirstName,
    LastName,
    BusinessEmail,
    BusinessPhone,
    AdditionalInfo,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStep {
    #[default]
    CompanyInfo,
    ContactInfo,
}

/// The two-step signup form shared by the trial and partner modals.
#[derive(Clone, Debug, Default)]
pub struct PartnerForm {
    pub fields: PartnerFields,
    step: PartnerStep,
}

impl PartnerForm {
    #[inline]
    pub fn step(&self) -> PartnerStep {
        self.step
    }

    /// Fresh state for a newly opened modal.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_field(&mut self, field: PartnerField, value: &str) {
        let slot = match field {
            PartnerField::Company => &mut self.fields.company,
            PartnerField::CompanySize => &mut self.fields.company_size,
            PartnerField::Country => &mut self.fields.country,
            PartnerField::PartnerStatus => &mut self.fields.partner_status,
            PartnerField::FirstName => &mut self.fields.first_name,
            PartnerField::LastName => &mut self.fields.last_name,
            PartnerField::BusinessEmail => &mut self.fields.business_email,
            PartnerField::BusinessPhone => &mut self.fields.business_phone,
            PartnerField::AdditionalInfo => &mut self.fields.additional_info,
        };
        *slot = value.to_string();
    }

    pub fn set_email_consent(&mut self, granted: bool) {
        self.fields.email_consent = granted;
    }

    /// Advance to the contact-info step once company info is complete.
    pub fn next(&mut self) -> Result<PartnerStep, FormError> {
        self.validate_company_info()?;
        self.step = PartnerStep::ContactInfo;
        Ok(self.step)
    }

    /// Return to the company-info step; nothing to validate going back.
    pub fn back(&mut self) -> PartnerStep {
        self.step = PartnerStep::CompanyInfo;
        self.step
    }

    /// Validate the final step and report completion. The caller closes the
    /// owning modal; the form itself keeps its values until the next open.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.step != PartnerStep::ContactInfo {
            return Err(FormError::NotOnFinalStep);
        }
        self.validate_contact_info()
    }

    fn validate_company_info(&self) -> Result<(), FormError> {
        required(&self.fields.company, "company")?;
        required(&self.fields.company_size, "company_size")?;
        required(&self.fields.country, "country")?;
        required(&self.fields.partner_status, "partner_status")
    }

    fn validate_contact_info(&self) -> Result<(), FormError> {
        required(&self.fields.first_name, "first_name")?;
        required(&self.fields.last_name, "last_name")?;
        required(&self.fields.business_email, "business_email")?;
        required(&self.fields.business_phone, "business_phone")
    }
}

fn required(value: &str, name: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(name))
    } else {
        Ok(())
    }
}
