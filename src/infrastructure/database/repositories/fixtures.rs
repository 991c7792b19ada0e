//! Row seeding for repository tests

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::infrastructure::database::entities::{
    block, company, parking_lot, parking_slot, ticket, time_frame, user, vehicle,
};

pub(crate) async fn seed_company(db: &DatabaseConnection) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    company::ActiveModel {
        id: Set(id),
        name: Set("Acme Parking".into()),
        phone_number: Set("0900000000".into()),
        email: Set(format!("{}@acme.test", id)),
        password_hash: Set("x".into()),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

pub(crate) async fn seed_lot_for(db: &DatabaseConnection, company_id: Uuid) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    parking_lot::ActiveModel {
        id: Set(id),
        name: Set("Central".into()),
        description: Set(String::new()),
        address: Set("1 Main St".into()),
        start_time: Set(None),
        end_time: Set(None),
        lat: Set(10.77),
        long: Set(106.70),
        company_id: Set(company_id),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

pub(crate) async fn seed_lot(db: &DatabaseConnection) -> Uuid {
    let company = seed_company(db).await;
    seed_lot_for(db, company).await
}

pub(crate) async fn seed_block(db: &DatabaseConnection, lot: Uuid, code: &str) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    block::ActiveModel {
        id: Set(id),
        code: Set(code.into()),
        description: Set(String::new()),
        slot: Set(10),
        parking_lot_id: Set(lot),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

pub(crate) async fn seed_slot(db: &DatabaseConnection, block: Uuid, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    parking_slot::ActiveModel {
        id: Set(id),
        name: Set(name.into()),
        description: Set(String::new()),
        block_id: Set(block),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

pub(crate) async fn seed_user(db: &DatabaseConnection, phone: &str) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    user::ActiveModel {
        id: Set(id),
        display_name: Set("Rider".into()),
        phone_number: Set(phone.into()),
        email: Set(String::new()),
        image_url: Set(String::new()),
        social_id: Set(String::new()),
        password_hash: Set("x".into()),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

pub(crate) async fn seed_vehicle(db: &DatabaseConnection, user: Uuid) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    vehicle::ActiveModel {
        id: Set(id),
        name: Set("Scooter".into()),
        number: Set("59A-12345".into()),
        vehicle_type: Set("motorbike".into()),
        user_id: Set(user),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

pub(crate) async fn seed_time_frame(db: &DatabaseConnection, lot: Uuid, duration: i32) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    time_frame::ActiveModel {
        id: Set(id),
        duration: Set(duration),
        cost: Set(duration as f64 * 100.0),
        parking_lot_id: Set(lot),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

/// Insert a ticket row directly, bypassing the lifecycle rules.
pub(crate) async fn seed_ticket(
    db: &DatabaseConnection,
    lot: Uuid,
    slot: Uuid,
    state: ticket::TicketState,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    ticket::ActiveModel {
        id: Set(id),
        user_id: Set(Uuid::new_v4()),
        vehicle_id: Set(Uuid::new_v4()),
        parking_lot_id: Set(lot),
        parking_slot_id: Set(slot),
        time_frame_id: Set(Uuid::new_v4()),
        start_time: Set(start),
        end_time: Set(end),
        entry_time: Set(None),
        exit_time: Set(None),
        total: Set(0.0),
        state: Set(state),
        is_extend: Set(false),
        long_term_ticket_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}
