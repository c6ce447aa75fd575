//! Event creation form state
//!
//! Holds what an administrator has typed so far. The form is only cleared
//! by a successful submission; a failed one leaves every field as it was.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::models::event::{CreateEventRequest, EventCategory};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::{is_http_url, parse_calendar_date};

/// Named fields of the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Date,
    Category,
    Image,
    Description,
    Location,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Date,
        FormField::Category,
        FormField::Location,
        FormField::Image,
        FormField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Date => "date",
            FormField::Category => "category",
            FormField::Image => "image",
            FormField::Description => "description",
            FormField::Location => "location",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Event Title",
            FormField::Date => "Date",
            FormField::Category => "Category",
            FormField::Image => "Image URL",
            FormField::Description => "Description",
            FormField::Location => "Location",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| CampusError::InvalidInput(format!("Unknown form field '{}'", s.trim())))
    }
}

/// Values currently entered in the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub location: String,
}

impl EventForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Date => &self.date,
            FormField::Category => &self.category,
            FormField::Image => &self.image,
            FormField::Description => &self.description,
            FormField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Date => self.date = value,
            FormField::Category => self.category = value,
            FormField::Image => self.image = value,
            FormField::Description => self.description = value,
            FormField::Location => self.location = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Fields that still need a value
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Validate and build the creation request without touching the form
    pub fn to_request(&self) -> Result<CreateEventRequest> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
            return Err(CampusError::InvalidInput(format!(
                "Missing required fields: {}",
                names.join(", ")
            )));
        }

        if parse_calendar_date(&self.date).is_none() {
            return Err(CampusError::InvalidInput(format!(
                "Date '{}' must look like YYYY-MM-DD",
                self.date
            )));
        }

        if !is_http_url(self.image.trim()) {
            return Err(CampusError::InvalidInput(format!(
                "Image '{}' must be an http(s) URL",
                self.image
            )));
        }

        let category: EventCategory = self.category.parse()?;

        Ok(CreateEventRequest {
            title: self.title.trim().to_string(),
            date: self.date.trim().to_string(),
            category,
            image: self.image.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}
