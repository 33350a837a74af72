/// UI module
///
/// One submodule per screen plus the shared chrome:
/// - Landing search and destination carousel (landing.rs)
/// - Map dashboard with filters and drill-in (dashboard.rs)
/// - Mock map canvas (map.rs)
/// - Itinerary panel and drag state (itinerary.rs)
/// - Profile & settings (profile.rs)
/// - Shared top bar (header.rs)

pub mod dashboard;
pub mod header;
pub mod itinerary;
pub mod landing;
pub mod map;
pub mod profile;
