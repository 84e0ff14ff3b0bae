//! sea-orm entities for the listings service.

pub mod admin_sessions;
pub mod codes;
pub mod submissions;
