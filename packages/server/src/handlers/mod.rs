pub mod assets;
pub mod attendees;
pub mod bookings;
pub mod crud;
pub mod events;
pub mod health;
pub mod posters;
pub mod venue_photos;
pub mod venues;
pub mod videos;
