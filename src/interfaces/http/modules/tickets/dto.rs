//! Ticket DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::application::{CreateTicket, Extension};
use crate::domain::ticket::{
    CancelOutcome, ExtendTicket, LongTermKind, MerchantTicketFilter, NewTicket, ProcedureAction,
    Ticket, TicketDetail, TicketExtend, TicketState, TicketWithExtensions,
};
use crate::domain::{DomainError, DomainResult};
use crate::interfaces::http::modules::blocks::BlockDto;
use crate::interfaces::http::modules::parking_lots::ParkingLotDto;
use crate::interfaces::http::modules::parking_slots::ParkingSlotDto;
use crate::interfaces::http::modules::time_frames::TimeFrameDto;
use crate::interfaces::http::modules::vehicles::VehicleDto;

fn parse_state(raw: Option<&str>) -> DomainResult<Option<TicketState>> {
    raw.map(|s| {
        TicketState::parse(s)
            .ok_or_else(|| DomainError::Validation(format!("unknown ticket state '{}'", s)))
    })
    .transpose()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_lot_id: Uuid,
    pub parking_slot_id: Uuid,
    pub time_frame_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub entry_time: Option<DateTime<Utc>>,
    pub exit_time: Option<DateTime<Utc>>,
    pub total: f64,
    /// `new`, `ongoing`, `completed`, `cancel` or `extend`
    pub state: String,
    pub is_extend: bool,
    pub long_term_ticket_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            vehicle_id: t.vehicle_id,
            parking_lot_id: t.parking_lot_id,
            parking_slot_id: t.parking_slot_id,
            time_frame_id: t.time_frame_id,
            start_time: t.start_time,
            end_time: t.end_time,
            entry_time: t.entry_time,
            exit_time: t.exit_time,
            total: t.total,
            state: t.state.as_str().to_string(),
            is_extend: t.is_extend,
            long_term_ticket_id: t.long_term_ticket_id,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Origin ticket with the tickets extending it, earliest first
#[derive(Debug, Serialize, ToSchema)]
pub struct TicketWithExtendDto {
    #[serde(flatten)]
    pub ticket: TicketDto,
    pub ticket_extend: Vec<TicketDto>,
}

impl From<TicketWithExtensions> for TicketWithExtendDto {
    fn from(t: TicketWithExtensions) -> Self {
        Self {
            ticket: t.ticket.into(),
            ticket_extend: t.extensions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketDetailDto {
    #[serde(flatten)]
    pub ticket: TicketDto,
    pub vehicle: Option<VehicleDto>,
    pub parking_lot: Option<ParkingLotDto>,
    pub parking_slot: Option<ParkingSlotDto>,
    pub block: Option<BlockDto>,
    pub time_frame: Option<TimeFrameDto>,
}

impl From<TicketDetail> for TicketDetailDto {
    fn from(d: TicketDetail) -> Self {
        Self {
            ticket: d.ticket.into(),
            vehicle: d.vehicle.map(Into::into),
            parking_lot: d.parking_lot.map(Into::into),
            parking_slot: d.parking_slot.map(Into::into),
            block: d.block.map(Into::into),
            time_frame: d.time_frame.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTicketRequest {
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_lot_id: Uuid,
    pub parking_slot_id: Uuid,
    pub time_frame_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub is_long_term: bool,
    /// Long-term kind: `DAILY`, `CYCLE` or `CUSTOM` (default)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl TryFrom<CreateTicketRequest> for CreateTicket {
    type Error = DomainError;

    fn try_from(r: CreateTicketRequest) -> DomainResult<Self> {
        let long_term_kind = r
            .kind
            .as_deref()
            .map(|k| {
                LongTermKind::parse(k)
                    .ok_or_else(|| DomainError::Validation(format!("unknown long-term type '{}'", k)))
            })
            .transpose()?;

        Ok(Self {
            ticket: NewTicket {
                user_id: r.user_id,
                vehicle_id: r.vehicle_id,
                parking_lot_id: r.parking_lot_id,
                parking_slot_id: r.parking_slot_id,
                time_frame_id: r.time_frame_id,
                start_time: r.start_time,
                end_time: r.end_time,
                total: r.total,
            },
            is_long_term: r.is_long_term,
            long_term_kind,
        })
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CancelTicketsRequest {
    #[serde(default)]
    pub list_ticket_id: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CancelResultDto {
    pub ticket_id: Uuid,
    /// `true` when the ticket was already cancelled
    pub already_cancelled: bool,
}

impl CancelResultDto {
    pub fn new(ticket_id: Uuid, outcome: CancelOutcome) -> Self {
        Self {
            ticket_id,
            already_cancelled: outcome == CancelOutcome::AlreadyCancelled,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExtendTicketRequest {
    pub ticket_origin_id: Uuid,
    pub time_frame_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub total: f64,
}

impl From<ExtendTicketRequest> for ExtendTicket {
    fn from(r: ExtendTicketRequest) -> Self {
        Self {
            origin_id: r.ticket_origin_id,
            time_frame_id: r.time_frame_id,
            start_time: r.start_time,
            end_time: r.end_time,
            total: r.total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketExtendDto {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub ticket_extend_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<TicketExtend> for TicketExtendDto {
    fn from(l: TicketExtend) -> Self {
        Self {
            id: l.id,
            ticket_id: l.ticket_id,
            ticket_extend_id: l.ticket_extend_id,
            created_at: l.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExtensionDto {
    pub ticket_extend: TicketExtendDto,
    pub ticket: TicketDto,
}

impl From<Extension> for ExtensionDto {
    fn from(e: Extension) -> Self {
        Self {
            ticket_extend: e.link.into(),
            ticket: e.ticket.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProcedureRequest {
    pub ticket_id: Uuid,
    /// `check_in` or `check_out`
    #[serde(rename = "type")]
    pub action: String,
}

impl ProcedureRequest {
    pub fn action(&self) -> DomainResult<ProcedureAction> {
        ProcedureAction::parse(&self.action).ok_or_else(|| {
            DomainError::Validation(format!("unknown procedure type '{}'", self.action))
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct UserTicketQuery {
    pub state: Option<String>,
}

impl UserTicketQuery {
    pub fn state(&self) -> DomainResult<Option<TicketState>> {
        parse_state(self.state.as_deref())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MerchantTicketQuery {
    pub parking_lot_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub state: Option<String>,
}

impl TryFrom<MerchantTicketQuery> for MerchantTicketFilter {
    type Error = DomainError;

    fn try_from(q: MerchantTicketQuery) -> DomainResult<Self> {
        if q.parking_lot_id.is_none() && q.company_id.is_none() {
            return Err(DomainError::Validation(
                "parking_lot_id or company_id is required".into(),
            ));
        }
        Ok(Self {
            parking_lot_id: q.parking_lot_id,
            company_id: q.company_id,
            state: parse_state(q.state.as_deref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(kind: Option<&str>) -> CreateTicketRequest {
        CreateTicketRequest {
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            parking_lot_id: Uuid::new_v4(),
            parking_slot_id: Uuid::new_v4(),
            time_frame_id: Uuid::new_v4(),
            start_time: Utc::now(),
            end_time: Utc::now(),
            total: 0.0,
            is_long_term: true,
            kind: kind.map(String::from),
        }
    }

    #[test]
    fn long_term_type_is_case_insensitive() {
        let req = CreateTicket::try_from(create_request(Some("daily"))).unwrap();
        assert_eq!(req.long_term_kind, Some(LongTermKind::Daily));
        assert!(CreateTicket::try_from(create_request(None))
            .unwrap()
            .long_term_kind
            .is_none());
    }

    #[test]
    fn unknown_long_term_type_is_rejected() {
        let err = CreateTicket::try_from(create_request(Some("weekly"))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn merchant_query_needs_lot_or_company() {
        assert!(MerchantTicketFilter::try_from(MerchantTicketQuery::default()).is_err());
        let filter = MerchantTicketFilter::try_from(MerchantTicketQuery {
            company_id: Some(Uuid::new_v4()),
            state: Some("ongoing".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter.state, Some(TicketState::Ongoing));
    }

    #[test]
    fn user_query_rejects_unknown_state() {
        let q = UserTicketQuery {
            state: Some("parked".into()),
        };
        assert!(q.state().is_err());
        assert_eq!(UserTicketQuery::default().state().unwrap(), None);
    }

    #[test]
    fn procedure_type_is_read_from_type_field() {
        let json = serde_json::json!({"type": "check_out", "ticket_id": Uuid::nil()});
        let req: ProcedureRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.action().unwrap(), ProcedureAction::CheckOut);
    }
}
