//! Vehicle registered by a user

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::merge::{merge, merge_id};

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    /// License plate
    pub number: String,
    pub vehicle_type: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub number: String,
    pub vehicle_type: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub name: Option<String>,
    pub number: Option<String>,
    pub vehicle_type: Option<String>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub user_id: Option<Uuid>,
    pub vehicle_type: Option<String>,
}

impl Vehicle {
    pub fn new(req: NewVehicle) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            number: req.number,
            vehicle_type: req.vehicle_type,
            user_id: req.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: VehiclePatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.number, patch.number);
        merge(&mut self.vehicle_type, patch.vehicle_type);
        merge_id(&mut self.user_id, patch.user_id);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_replaces_plate() {
        let user = Uuid::new_v4();
        let mut v = Vehicle::new(NewVehicle {
            name: "Wave".into(),
            number: "59X1-12345".into(),
            vehicle_type: "motorbike".into(),
            user_id: user,
        });
        v.apply_patch(VehiclePatch {
            number: Some("59X1-54321".into()),
            user_id: Some(Uuid::nil()),
            ..Default::default()
        });
        assert_eq!(v.number, "59X1-54321");
        assert_eq!(v.name, "Wave");
        assert_eq!(v.user_id, user);
    }
}
