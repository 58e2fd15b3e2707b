use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::package::Package;
use crate::error::ValidationError;
use crate::utils::datetime::{parse_input, to_input_value};

/// Editable fields of the update form, in display order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum FormField {
    LastKnownLocation,
    EstimatedDeliveryTime,
    ProcessingDateTime,
    PickedUpDataTime,
    DepartedDateTime,
    DeliveredDateTime,
    CancelledDateTime,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::LastKnownLocation,
        FormField::EstimatedDeliveryTime,
        FormField::ProcessingDateTime,
        FormField::PickedUpDataTime,
        FormField::DepartedDateTime,
        FormField::DeliveredDateTime,
        FormField::CancelledDateTime,
    ];

    /// JSON key, also used as the input name/id
    pub fn key(&self) -> &'static str {
        match self {
            FormField::LastKnownLocation => "lastKnownLocation",
            FormField::EstimatedDeliveryTime => "estimatedDeliveryTime",
            FormField::ProcessingDateTime => "processingDateTime",
            FormField::PickedUpDataTime => "pickedUpDataTime",
            FormField::DepartedDateTime => "departedDateTime",
            FormField::DeliveredDateTime => "deliveredDateTime",
            FormField::CancelledDateTime => "cancelledDateTime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::LastKnownLocation => "Last Known Location",
            FormField::EstimatedDeliveryTime => "Estimated Delivery Time",
            FormField::ProcessingDateTime => "Processing Date Time",
            FormField::PickedUpDataTime => "Picked Up Date Time",
            FormField::DepartedDateTime => "Departed Date Time",
            FormField::DeliveredDateTime => "Delivered Date Time",
            FormField::CancelledDateTime => "Cancelled Date Time",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FormField::LastKnownLocation => "fas fa-map-marker-alt",
            FormField::EstimatedDeliveryTime => "fas fa-clock",
            FormField::ProcessingDateTime => "fas fa-cog",
            FormField::PickedUpDataTime => "fas fa-hand-paper",
            FormField::DepartedDateTime => "fas fa-truck",
            FormField::DeliveredDateTime => "fas fa-box-open",
            FormField::CancelledDateTime => "fas fa-ban",
        }
    }

    pub fn is_datetime(&self) -> bool {
        !matches!(self, FormField::LastKnownLocation)
    }

    pub fn input_type(&self) -> &'static str {
        if self.is_datetime() {
            "datetime-local"
        } else {
            "text"
        }
    }
}

/// Body of `PUT /update-package/:id`; datetimes are `datetime-local` strings
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PackageUpdateForm {
    pub last_known_location: String,
    pub estimated_delivery_time: String,
    pub processing_date_time: String,
    pub picked_up_data_time: String,
    pub departed_date_time: String,
    pub delivered_date_time: String,
    pub cancelled_date_time: String,
}

impl PackageUpdateForm {
    /// Pre-fills the form, converting backend timestamps to local input values
    pub fn from_package(package: &Package) -> Self {
        Self::from_package_with(package, to_input_value)
    }

    pub fn from_package_with<F>(package: &Package, to_input: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let datetime = |value: &Option<String>| value.as_deref().map(&to_input).unwrap_or_default();
        Self {
            last_known_location: package.last_known_location.clone().unwrap_or_default(),
            estimated_delivery_time: datetime(&package.estimated_delivery_time),
            processing_date_time: datetime(&package.processing_date_time),
            picked_up_data_time: datetime(&package.picked_up_data_time),
            departed_date_time: datetime(&package.departed_date_time),
            delivered_date_time: datetime(&package.delivered_date_time),
            cancelled_date_time: datetime(&package.cancelled_date_time),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::LastKnownLocation => &self.last_known_location,
            FormField::EstimatedDeliveryTime => &self.estimated_delivery_time,
            FormField::ProcessingDateTime => &self.processing_date_time,
            FormField::PickedUpDataTime => &self.picked_up_data_time,
            FormField::DepartedDateTime => &self.departed_date_time,
            FormField::DeliveredDateTime => &self.delivered_date_time,
            FormField::CancelledDateTime => &self.cancelled_date_time,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::LastKnownLocation => &mut self.last_known_location,
            FormField::EstimatedDeliveryTime => &mut self.estimated_delivery_time,
            FormField::ProcessingDateTime => &mut self.processing_date_time,
            FormField::PickedUpDataTime => &mut self.picked_up_data_time,
            FormField::DepartedDateTime => &mut self.departed_date_time,
            FormField::DeliveredDateTime => &mut self.delivered_date_time,
            FormField::CancelledDateTime => &mut self.cancelled_date_time,
        };
        *slot = value;
    }

    fn is_set(&self, field: FormField) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Runs the field checks in display order and returns the first failure.
    /// Empty fields are never checked.
    pub fn validate(&self, now: NaiveDateTime) -> Result<(), ValidationError> {
        for field in FormField::ALL {
            if self.is_set(field) && !self.check(field, now) {
                return Err(ValidationError::invalid(field));
            }
        }
        Ok(())
    }

    fn check(&self, field: FormField, now: NaiveDateTime) -> bool {
        use FormField::*;

        let value = self.get(field);
        match field {
            LastKnownLocation => true,
            EstimatedDeliveryTime => parse_input(value).map_or(false, |at| at > now),
            ProcessingDateTime => !self.is_set(DepartedDateTime) || before(value, self.get(DepartedDateTime)),
            PickedUpDataTime => !self.is_set(ProcessingDateTime) || before(self.get(ProcessingDateTime), value),
            DepartedDateTime => !self.is_set(DeliveredDateTime) || before(value, self.get(DeliveredDateTime)),
            DeliveredDateTime => !self.is_set(CancelledDateTime),
            CancelledDateTime => !self.is_set(DeliveredDateTime),
        }
    }
}

/// `a < b`; false when either side does not parse
fn before(a: &str, b: &str) -> bool {
    matches!((parse_input(a), parse_input(b)), (Some(a), Some(b)) if a < b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datetime::to_input_value_in;
    use chrono::Utc;

    fn now() -> NaiveDateTime {
        parse_input("2025-06-01T12:00").unwrap()
    }

    fn form() -> PackageUpdateForm {
        PackageUpdateForm {
            last_known_location: "Depot 4".into(),
            estimated_delivery_time: "2025-06-10T09:00".into(),
            processing_date_time: "2025-05-30T08:00".into(),
            picked_up_data_time: "2025-05-30T10:00".into(),
            departed_date_time: "2025-05-31T07:00".into(),
            ..Default::default()
        }
    }

    #[test]
    fn ordered_timeline_is_valid() {
        assert_eq!(form().validate(now()), Ok(()));
    }

    #[test]
    fn empty_form_is_valid() {
        assert_eq!(PackageUpdateForm::default().validate(now()), Ok(()));
    }

    #[test]
    fn rejects_estimated_delivery_in_the_past() {
        let mut f = form();
        f.set(FormField::EstimatedDeliveryTime, "2025-05-01T09:00".into());
        let err = f.validate(now()).unwrap_err();
        assert_eq!(err.field, FormField::EstimatedDeliveryTime);
        assert_eq!(err.message, "Estimated Delivery Time is invalid");
    }

    #[test]
    fn rejects_delivered_and_cancelled_together() {
        let mut f = form();
        f.set(FormField::DeliveredDateTime, "2025-06-02T09:00".into());
        f.set(FormField::CancelledDateTime, "2025-06-02T10:00".into());
        let err = f.validate(now()).unwrap_err();
        assert_eq!(err.field, FormField::DeliveredDateTime);
    }

    #[test]
    fn cancelled_alone_is_fine() {
        let mut f = form();
        f.set(FormField::CancelledDateTime, "2025-06-02T10:00".into());
        assert!(f.validate(now()).is_ok());
    }

    #[test]
    fn processing_must_precede_departed() {
        let mut f = form();
        f.set(FormField::ProcessingDateTime, "2025-05-31T08:00".into());
        assert_eq!(f.validate(now()).unwrap_err().field, FormField::ProcessingDateTime);
    }

    #[test]
    fn picked_up_must_follow_processing() {
        let mut f = form();
        f.set(FormField::PickedUpDataTime, "2025-05-30T08:00".into());
        assert_eq!(f.validate(now()).unwrap_err().field, FormField::PickedUpDataTime);
    }

    #[test]
    fn departed_must_precede_delivered() {
        let mut f = form();
        f.set(FormField::DeliveredDateTime, "2025-05-31T06:00".into());
        assert_eq!(f.validate(now()).unwrap_err().field, FormField::DepartedDateTime);
    }

    #[test]
    fn first_failure_in_field_order_wins() {
        let mut f = form();
        f.set(FormField::EstimatedDeliveryTime, "2020-01-01T00:00".into());
        f.set(FormField::DeliveredDateTime, "2025-06-02T09:00".into());
        f.set(FormField::CancelledDateTime, "2025-06-02T10:00".into());
        assert_eq!(f.validate(now()).unwrap_err().field, FormField::EstimatedDeliveryTime);
    }

    #[test]
    fn unparseable_datetime_fails_its_check() {
        let mut f = PackageUpdateForm::default();
        f.set(FormField::EstimatedDeliveryTime, "next week".into());
        assert!(f.validate(now()).is_err());
    }

    #[test]
    fn prefills_from_package() {
        let pkg = Package {
            id: "p".into(),
            last_known_location: Some("Hub".into()),
            processing_date_time: Some("2025-05-30T08:00:00.000Z".into()),
            delivered_date_time: Some("garbage".into()),
            ..Default::default()
        };
        let f = PackageUpdateForm::from_package_with(&pkg, |v| to_input_value_in(v, &Utc));
        assert_eq!(f.last_known_location, "Hub");
        assert_eq!(f.processing_date_time, "2025-05-30T08:00");
        assert_eq!(f.delivered_date_time, "");
        assert_eq!(f.estimated_delivery_time, "");
    }

    #[test]
    fn serializes_all_seven_keys() {
        let value = serde_json::to_value(form()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        for field in FormField::ALL {
            assert!(obj.contains_key(field.key()), "missing {}", field.key());
        }
        assert_eq!(obj["cancelledDateTime"], "");
    }
}
