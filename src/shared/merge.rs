//! Partial-update helpers used by each entity's `apply_patch`.
//!
//! `None` leaves the target untouched. Identifiers additionally refuse the
//! nil UUID so an unset id coming over the wire never clears a reference.

use uuid::Uuid;

pub fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

pub fn merge_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if let Some(v) = value {
        *target = Some(v);
    }
}

pub fn merge_id(target: &mut Uuid, value: Option<Uuid>) {
    if let Some(id) = value.filter(|id| !id.is_nil()) {
        *target = id;
    }
}

pub fn merge_opt_id(target: &mut Option<Uuid>, value: Option<Uuid>) {
    if let Some(id) = value.filter(|id| !id.is_nil()) {
        *target = Some(id);
    }
}
