// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form inputs for the dashboard pages.
//!
//! Every field is kept as submitted text so an invalid submission can be
//! rendered back unchanged. Submissions are validated but never persisted.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{
    ClassStatus, Currency, DayOfWeek, PaymentMethod, PaymentStatus, StaffMember, StaffRole,
    StaffStatus,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct SignInForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Enter your password"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "passwords_match", skip_on_field_errors = false))]
pub struct SetPasswordForm {
    #[validate(length(min = 8, message = "Use at least 8 characters"))]
    pub password: String,
    pub confirm: String,
}

fn passwords_match(form: &SetPasswordForm) -> Result<(), ValidationError> {
    if form.password == form.confirm {
        Ok(())
    } else {
        Err(ValidationError::new("confirm").with_message("Passwords do not match".into()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct MemberForm {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct ClassForm {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(custom(function = "valid_day"))]
    pub day: String,
    #[validate(custom(function = "valid_clock"))]
    pub time: String,
    #[validate(custom(function = "valid_class_status"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct PaymentForm {
    #[validate(length(min = 1))]
    pub member_id: String,
    #[validate(custom(function = "valid_amount"))]
    pub amount: String,
    #[validate(custom(function = "valid_currency"))]
    pub currency: String,
    #[validate(custom(function = "valid_method"))]
    pub method: String,
    #[validate(custom(function = "valid_payment_status"))]
    pub status: String,
    #[validate(custom(function = "valid_date"))]
    pub date: String,
    #[validate(length(max = 500))]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct StaffForm {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 5, max = 32))]
    pub phone: String,
    #[validate(custom(function = "valid_staff_role"))]
    pub role: String,
    #[validate(custom(function = "valid_staff_status"))]
    pub status: String,
}

impl StaffForm {
    /// Form prefilled from an existing staff member; every field is empty
    /// when there is none.
    pub fn for_staff(staff: Option<&StaffMember>) -> Self {
        staff.map(Self::from).unwrap_or_default()
    }
}

impl From<&StaffMember> for StaffForm {
    fn from(staff: &StaffMember) -> Self {
        Self {
            name: staff.name.clone(),
            email: staff.email.clone(),
            phone: staff.phone.clone(),
            role: staff.role.as_str().to_string(),
            status: staff.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct WodForm {
    #[validate(custom(function = "valid_date"))]
    pub date: String,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub notes: String,
}

/// Names of the invalid fields, sorted, for display next to the form.
pub fn invalid_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    fields
}

/// First human-readable message among the errors, if any was given.
pub fn first_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
}

fn invalid(code: &'static str) -> ValidationError {
    ValidationError::new(code)
}

fn valid_day(value: &str) -> Result<(), ValidationError> {
    DayOfWeek::parse(value).map(|_| ()).ok_or_else(|| invalid("day"))
}

fn valid_clock(value: &str) -> Result<(), ValidationError> {
    chrono::NaiveTime::parse_from_str(value, "%H:%M")
        .map(|_| ())
        .map_err(|_| invalid("time"))
}

fn valid_date(value: &str) -> Result<(), ValidationError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| invalid("date"))
}

fn valid_amount(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(()),
        _ => Err(invalid("amount")),
    }
}

fn valid_class_status(value: &str) -> Result<(), ValidationError> {
    ClassStatus::parse(value).map(|_| ()).ok_or_else(|| invalid("status"))
}

fn valid_currency(value: &str) -> Result<(), ValidationError> {
    Currency::parse(value).map(|_| ()).ok_or_else(|| invalid("currency"))
}

fn valid_method(value: &str) -> Result<(), ValidationError> {
    PaymentMethod::parse(value).map(|_| ()).ok_or_else(|| invalid("method"))
}

fn valid_payment_status(value: &str) -> Result<(), ValidationError> {
    PaymentStatus::parse(value).map(|_| ()).ok_or_else(|| invalid("status"))
}

fn valid_staff_role(value: &str) -> Result<(), ValidationError> {
    StaffRole::parse(value).map(|_| ()).ok_or_else(|| invalid("role"))
}

fn valid_staff_status(value: &str) -> Result<(), ValidationError> {
    StaffStatus::parse(value).map(|_| ()).ok_or_else(|| invalid("status"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_staff_form_for_missing_staff_is_empty() {
        let form = StaffForm::for_staff(fixtures::find_staff("does-not-exist"));

        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.phone, "");
        assert_eq!(form.role, "");
        assert_eq!(form.status, "");
    }

    #[test]
    fn test_staff_form_prefills_existing_staff() {
        let form = StaffForm::for_staff(fixtures::find_staff("s1"));

        assert_eq!(form.name, "Carla Méndez");
        assert_eq!(form.role, "Owner");
        assert_eq!(form.status, "Active");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_staff_form_rejects_unknown_role() {
        let mut form = StaffForm::for_staff(fixtures::find_staff("s2"));
        form.role = "Janitor".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(invalid_fields(&errors), vec!["role".to_string()]);
    }

    #[test]
    fn test_payment_form_validation() {
        let form = PaymentForm {
            member_id: "m1".to_string(),
            amount: "65.00".to_string(),
            currency: "EUR".to_string(),
            method: "card".to_string(),
            status: "paid".to_string(),
            date: "2025-02-01".to_string(),
            notes: String::new(),
        };
        assert!(form.validate().is_ok());

        let bad = PaymentForm {
            amount: "-3".to_string(),
            date: "01/02/2025".to_string(),
            ..form
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(
            invalid_fields(&errors),
            vec!["amount".to_string(), "date".to_string()]
        );
    }

    #[test]
    fn test_set_password_mismatch() {
        let form = SetPasswordForm {
            password: "longenough".to_string(),
            confirm: "different1".to_string(),
        };
        assert!(form.validate().is_err());

        let ok = SetPasswordForm {
            password: "longenough".to_string(),
            confirm: "longenough".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let form: PaymentForm = serde_json::from_str(r#"{"member_id": "m1"}"#).unwrap();

        assert_eq!(form.member_id, "m1");
        assert_eq!(form.notes, "");
        let errors = form.validate().unwrap_err();
        assert_eq!(
            invalid_fields(&errors),
            vec!["amount", "currency", "date", "method", "status"]
        );
    }

    #[test]
    fn test_sign_in_form_messages() {
        let form = SignInForm {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors).as_deref(),
            Some("Enter a valid email address")
        );
    }
}
