//! Signup command
//!
//! The form is a typed nested structure: every editable field is named by a
//! [`SignupField`] and written through [`SignupCommand::set`], which creates the
//! role-specific sub-structure on first use.

use crate::domain::{Address, DomainError, EmergencyContact, PatientInfo, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Doctor-specific profile section (`doctorInfo` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoctorInfo {
    pub specialty: String,
    pub hospital: String,
}

/// Every editable field of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    FirstName,
    LastName,
    PhoneNumber,
    DateOfBirth,
    Email,
    Password,
    PasswordConfirm,
    AddressStreet,
    AddressCity,
    AddressState,
    AddressZipCode,
    AddressCountry,
    DoctorSpecialty,
    DoctorHospital,
    MedicalHistory,
    EmergencyContactName,
    EmergencyContactPhoneNumber,
    EmergencyContactRelationship,
    EmergencyContactEmail,
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct SignupCommand {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub role: Role,
    pub address: Address,
    pub doctor_info: Option<DoctorInfo>,
    pub patient_info: Option<PatientInfo>,
}

impl SignupCommand {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    /// Builder-style variant of [`SignupCommand::set`]
    pub fn with(mut self, field: SignupField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: SignupField, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match field {
            SignupField::FirstName => self.first_name = value,
            SignupField::LastName => self.last_name = value,
            SignupField::PhoneNumber => self.phone_number = value,
            SignupField::DateOfBirth => self.date_of_birth = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::PasswordConfirm => self.password_confirm = value,
            SignupField::AddressStreet => self.address.street = value,
            SignupField::AddressCity => self.address.city = value,
            SignupField::AddressState => self.address.state = value,
            SignupField::AddressZipCode => self.address.zip_code = value,
            SignupField::AddressCountry => self.address.country = value,
            SignupField::DoctorSpecialty => self.doctor_info_mut().specialty = value,
            SignupField::DoctorHospital => self.doctor_info_mut().hospital = value,
            SignupField::MedicalHistory => self.patient_info_mut().medical_history = Some(value),
            SignupField::EmergencyContactName => self.emergency_contact_mut().name = value,
            SignupField::EmergencyContactPhoneNumber => {
                self.emergency_contact_mut().phone_number = value
            }
            SignupField::EmergencyContactRelationship => {
                self.emergency_contact_mut().relationship = value
            }
            SignupField::EmergencyContactEmail => self.emergency_contact_mut().email = value,
        }
        self
    }

    fn doctor_info_mut(&mut self) -> &mut DoctorInfo {
        self.doctor_info.get_or_insert_with(DoctorInfo::default)
    }

    fn patient_info_mut(&mut self) -> &mut PatientInfo {
        self.patient_info.get_or_insert_with(PatientInfo::default)
    }

    fn emergency_contact_mut(&mut self) -> &mut EmergencyContact {
        self.patient_info_mut()
            .emergency_contact
            .get_or_insert_with(EmergencyContact::default)
    }

    /// Client-side checks run before anything is sent
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email.trim().is_empty() {
            return Err(DomainError::Validation("email is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(DomainError::Validation("password is required".to_string()));
        }
        if self.password != self.password_confirm {
            return Err(DomainError::Validation("passwords do not match".to_string()));
        }

        if self.role == Role::Doctor {
            let complete = self.doctor_info.as_ref().is_some_and(|info| {
                !info.specialty.trim().is_empty() && !info.hospital.trim().is_empty()
            });
            if !complete {
                return Err(DomainError::Validation(
                    "doctor signup requires specialty and hospital".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Wire body for the signup endpoint, stamped with `created_at`.
    ///
    /// Only the sub-structure matching the role is sent. A patient without a
    /// history or emergency contact sends `""` and `{}`.
    pub fn to_payload(&self, created_at: DateTime<Utc>) -> SignupPayload {
        let doctor_info = match self.role {
            Role::Doctor => Some(self.doctor_info.clone().unwrap_or_default()),
            Role::Patient => None,
        };

        let patient_info = match self.role {
            Role::Patient => {
                let info = self.patient_info.clone().unwrap_or_default();
                let emergency_contact = info
                    .emergency_contact
                    .and_then(|c| serde_json::to_value(c).ok())
                    .unwrap_or_else(|| serde_json::Value::Object(Default::default()));
                Some(PatientInfoPayload {
                    medical_history: info.medical_history.unwrap_or_default(),
                    emergency_contact,
                })
            }
            Role::Doctor => None,
        };

        SignupPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            date_of_birth: self.date_of_birth.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
            role: self.role,
            created_at,
            doctor_info,
            patient_info,
        }
    }
}

impl fmt::Debug for SignupCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCommand")
            .field("email", &self.email)
            .field("role", &self.role)
            .field("doctor_info", &self.doctor_info)
            .field("patient_info", &self.patient_info)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfoPayload {
    pub medical_history: String,
    pub emergency_contact: serde_json::Value,
}

/// Body sent to the signup endpoint
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub address: Address,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_info: Option<DoctorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_info: Option<PatientInfoPayload>,
}

impl fmt::Debug for SignupPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupPayload")
            .field("email", &self.email)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn base(role: Role) -> SignupCommand {
        SignupCommand::new(role)
            .with(SignupField::FirstName, "Ada")
            .with(SignupField::LastName, "Obi")
            .with(SignupField::Email, "ada@example.com")
            .with(SignupField::Password, "s3cret")
            .with(SignupField::PasswordConfirm, "s3cret")
            .with(SignupField::AddressCity, "Lagos")
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_nested_setters() {
        let cmd = base(Role::Patient)
            .with(SignupField::AddressZipCode, "100001")
            .with(SignupField::EmergencyContactName, "Chidi")
            .with(SignupField::EmergencyContactRelationship, "Brother");

        assert_eq!(cmd.address.city, "Lagos");
        assert_eq!(cmd.address.zip_code, "100001");
        let contact = cmd.patient_info.unwrap().emergency_contact.unwrap();
        assert_eq!(contact.name, "Chidi");
        assert_eq!(contact.relationship, "Brother");
    }

    #[test]
    fn test_doctor_requires_specialty_and_hospital() {
        let cmd = base(Role::Doctor);
        assert!(matches!(cmd.validate(), Err(DomainError::Validation(_))));

        let cmd = cmd.with(SignupField::DoctorSpecialty, "Cardiology");
        assert!(matches!(cmd.validate(), Err(DomainError::Validation(_))));

        let cmd = cmd.with(SignupField::DoctorHospital, "LUTH");
        assert!(cmd.validate().is_ok());
    }

    #[test]
    fn test_patient_info_is_optional() {
        assert!(base(Role::Patient).validate().is_ok());
    }

    #[test]
    fn test_password_mismatch() {
        let cmd = base(Role::Patient).with(SignupField::PasswordConfirm, "other");
        assert_eq!(
            cmd.validate(),
            Err(DomainError::Validation("passwords do not match".to_string()))
        );
    }

    #[test]
    fn test_patient_payload_defaults() {
        let body = serde_json::to_value(base(Role::Patient).to_payload(stamp())).unwrap();

        assert_eq!(body["role"], "patient");
        assert_eq!(body["createdAt"], "2025-06-14T09:00:00Z");
        assert_eq!(body["passwordConfirm"], "s3cret");
        assert_eq!(body["address"]["city"], "Lagos");
        assert_eq!(
            body["patientInfo"],
            json!({"medicalHistory": "", "emergencyContact": {}})
        );
        assert!(body.get("doctorInfo").is_none());
    }

    #[test]
    fn test_doctor_payload_omits_patient_info() {
        let cmd = base(Role::Doctor)
            .with(SignupField::DoctorSpecialty, "Cardiology")
            .with(SignupField::DoctorHospital, "LUTH")
            .with(SignupField::MedicalHistory, "ignored for doctors");
        let body = serde_json::to_value(cmd.to_payload(stamp())).unwrap();

        assert_eq!(
            body["doctorInfo"],
            json!({"specialty": "Cardiology", "hospital": "LUTH"})
        );
        assert!(body.get("patientInfo").is_none());
    }

    #[test]
    fn test_debug_hides_passwords() {
        let cmd = base(Role::Patient);
        assert!(!format!("{:?}", cmd).contains("s3cret"));
        assert!(!format!("{:?}", cmd.to_payload(stamp())).contains("s3cret"));
    }
}
