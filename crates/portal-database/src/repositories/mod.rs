//! Repository implementations, one per aggregate.

pub mod account;
pub mod audit;
pub mod document;
pub mod message;
pub mod organization;
pub mod session;
pub mod ticket;

pub use account::AccountRepository;
pub use audit::AuditLogRepository;
pub use document::DocumentRepository;
pub use message::MessageRepository;
pub use organization::OrganizationRepository;
pub use session::SessionRepository;
pub use ticket::TicketRepository;
