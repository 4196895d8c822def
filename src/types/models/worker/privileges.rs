use serde::{Deserialize, Serialize};

/// Named capability flags delegated to a worker by its owner. Stored as-is on
/// the worker document; the template below is the baseline a new worker gets
/// before any per-worker overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPrivileges {
    pub can_view_properties: bool,
    pub can_add_properties: bool,
    pub can_edit_properties: bool,
    pub can_delete_properties: bool,
    pub can_view_cars: bool,
    pub can_edit_cars: bool,
    pub can_view_fuel_logs: bool,
    pub can_add_fuel_logs: bool,
    pub can_view_bookings: bool,
    pub can_edit_bookings: bool,
    pub can_confirm_bookings: bool,
    pub can_cancel_bookings: bool,
    pub can_view_workers: bool,
    pub can_manage_workers: bool,
    pub can_view_reports: bool,
    pub can_process_payments: bool,
    pub can_respond_tickets: bool,
    pub can_manage_commissions: bool,
}

impl Default for WorkerPrivileges {
    fn default() -> Self {
        Self {
            can_view_properties: true,
            can_add_properties: false,
            can_edit_properties: false,
            can_delete_properties: false,
            can_view_cars: true,
            can_edit_cars: false,
            can_view_fuel_logs: true,
            can_add_fuel_logs: false,
            can_view_bookings: true,
            can_edit_bookings: false,
            can_confirm_bookings: false,
            can_cancel_bookings: false,
            can_view_workers: false,
            can_manage_workers: false,
            can_view_reports: false,
            can_process_payments: false,
            can_respond_tickets: false,
            can_manage_commissions: false,
        }
    }
}

/// Partial overlay: a supplied key overrides the stored flag, an absent key
/// keeps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegesPatch {
    pub can_view_properties: Option<bool>,
    pub can_add_properties: Option<bool>,
    pub can_edit_properties: Option<bool>,
    pub can_delete_properties: Option<bool>,
    pub can_view_cars: Option<bool>,
    pub can_edit_cars: Option<bool>,
    pub can_view_fuel_logs: Option<bool>,
    pub can_add_fuel_logs: Option<bool>,
    pub can_view_bookings: Option<bool>,
    pub can_edit_bookings: Option<bool>,
    pub can_confirm_bookings: Option<bool>,
    pub can_cancel_bookings: Option<bool>,
    pub can_view_workers: Option<bool>,
    pub can_manage_workers: Option<bool>,
    pub can_view_reports: Option<bool>,
    pub can_process_payments: Option<bool>,
    pub can_respond_tickets: Option<bool>,
    pub can_manage_commissions: Option<bool>,
}

impl WorkerPrivileges {
    pub fn apply(&self, patch: &PrivilegesPatch) -> WorkerPrivileges {
        WorkerPrivileges {
            can_view_properties: patch.can_view_properties.unwrap_or(self.can_view_properties),
            can_add_properties: patch.can_add_properties.unwrap_or(self.can_add_properties),
            can_edit_properties: patch.can_edit_properties.unwrap_or(self.can_edit_properties),
            can_delete_properties: patch
                .can_delete_properties
                .unwrap_or(self.can_delete_properties),
            can_view_cars: patch.can_view_cars.unwrap_or(self.can_view_cars),
            can_edit_cars: patch.can_edit_cars.unwrap_or(self.can_edit_cars),
            can_view_fuel_logs: patch.can_view_fuel_logs.unwrap_or(self.can_view_fuel_logs),
            can_add_fuel_logs: patch.can_add_fuel_logs.unwrap_or(self.can_add_fuel_logs),
            can_view_bookings: patch.can_view_bookings.unwrap_or(self.can_view_bookings),
            can_edit_bookings: patch.can_edit_bookings.unwrap_or(self.can_edit_bookings),
            can_confirm_bookings: patch
                .can_confirm_bookings
                .unwrap_or(self.can_confirm_bookings),
            can_cancel_bookings: patch.can_cancel_bookings.unwrap_or(self.can_cancel_bookings),
            can_view_workers: patch.can_view_workers.unwrap_or(self.can_view_workers),
            can_manage_workers: patch.can_manage_workers.unwrap_or(self.can_manage_workers),
            can_view_reports: patch.can_view_reports.unwrap_or(self.can_view_reports),
            can_process_payments: patch
                .can_process_payments
                .unwrap_or(self.can_process_payments),
            can_respond_tickets: patch.can_respond_tickets.unwrap_or(self.can_respond_tickets),
            can_manage_commissions: patch
                .can_manage_commissions
                .unwrap_or(self.can_manage_commissions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_grants_view_only() {
        let p = WorkerPrivileges::default();
        assert!(p.can_view_properties);
        assert!(p.can_view_cars);
        assert!(p.can_view_fuel_logs);
        assert!(p.can_view_bookings);
        assert!(!p.can_edit_properties);
        assert!(!p.can_delete_properties);
        assert!(!p.can_process_payments);
        assert!(!p.can_manage_workers);
    }

    #[test]
    fn patch_overrides_only_supplied_keys() {
        let base = WorkerPrivileges::default();
        let patch = PrivilegesPatch {
            can_edit_properties: Some(true),
            ..PrivilegesPatch::default()
        };

        let merged = base.apply(&patch);

        assert!(merged.can_edit_properties);
        let expected = WorkerPrivileges {
            can_edit_properties: true,
            ..base
        };
        assert_eq!(merged, expected);
    }

    #[test]
    fn patch_can_revoke_a_flag() {
        let base = WorkerPrivileges::default();
        let patch = PrivilegesPatch {
            can_view_properties: Some(false),
            ..PrivilegesPatch::default()
        };

        assert!(!base.apply(&patch).can_view_properties);
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = WorkerPrivileges::default();
        assert_eq!(base.apply(&PrivilegesPatch::default()), base);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(WorkerPrivileges::default()).unwrap();
        assert_eq!(json["canViewProperties"], serde_json::json!(true));
        assert_eq!(json["canEditProperties"], serde_json::json!(false));
        assert_eq!(json.as_object().unwrap().len(), 18);
    }
}
