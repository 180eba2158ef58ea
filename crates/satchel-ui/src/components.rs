mod event_card;
mod nav_rail;

pub use event_card::EventCard;
pub use nav_rail::NavRail;
