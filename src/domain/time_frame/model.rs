use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};
use crate::shared::merge::{merge, merge_id};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeFrame {
    pub id: Uuid,
    /// Minutes
    pub duration: i32,
    pub cost: f64,
    pub parking_lot_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTimeFrame {
    pub duration: i32,
    pub cost: f64,
    pub parking_lot_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct TimeFramePatch {
    pub duration: Option<i32>,
    pub cost: Option<f64>,
    pub parking_lot_id: Option<Uuid>,
}

impl TimeFrame {
    pub fn new(req: NewTimeFrame) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            duration: req.duration,
            cost: req.cost,
            parking_lot_id: req.parking_lot_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: TimeFramePatch) {
        merge(&mut self.duration, patch.duration);
        merge(&mut self.cost, patch.cost);
        merge_id(&mut self.parking_lot_id, patch.parking_lot_id);
        self.updated_at = Utc::now();
    }
}

/// All frames of a batch must target the same parking lot; returns it.
pub fn common_parking_lot(frames: &[NewTimeFrame]) -> DomainResult<Uuid> {
    let Some(first) = frames.first() else {
        return Err(DomainError::Validation("time frame list is empty".into()));
    };
    if frames.iter().any(|f| f.parking_lot_id != first.parking_lot_id) {
        return Err(DomainError::Validation(
            "time frames must belong to one parking lot".into(),
        ));
    }
    Ok(first.parking_lot_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(lot: Uuid, duration: i32) -> NewTimeFrame {
        NewTimeFrame {
            duration,
            cost: duration as f64 * 100.0,
            parking_lot_id: lot,
        }
    }

    #[test]
    fn batch_must_share_a_lot() {
        let lot = Uuid::new_v4();
        assert_eq!(common_parking_lot(&[frame(lot, 30), frame(lot, 60)]).unwrap(), lot);
        assert!(common_parking_lot(&[frame(lot, 30), frame(Uuid::new_v4(), 60)]).is_err());
        assert!(common_parking_lot(&[]).is_err());
    }

    #[test]
    fn patch_changes_cost_only() {
        let lot = Uuid::new_v4();
        let mut tf = TimeFrame::new(frame(lot, 60));
        tf.apply_patch(TimeFramePatch {
            cost: Some(1.5),
            ..Default::default()
        });
        assert_eq!(tf.cost, 1.5);
        assert_eq!(tf.duration, 60);
        assert_eq!(tf.parking_lot_id, lot);
    }
}
