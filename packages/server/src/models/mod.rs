pub mod asset;
pub mod attendee;
pub mod booking;
pub mod event;
pub mod resource;
pub mod shared;
pub mod venue;
