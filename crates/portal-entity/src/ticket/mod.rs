//! Support request ticket entities.

pub mod model;
pub mod status;

pub use model::{CreateRequestTicket, RequestTicket, TicketEvent};
pub use status::{TicketPriority, TicketStatus};
