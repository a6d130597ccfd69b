use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{
    assets, attendees, bookings, events, posters, venue_photos, venues, videos,
};
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(asset_routes())
        .merge(event_routes())
        .merge(attendee_routes())
        .merge(venue_routes())
        .merge(booking_routes())
}

fn asset_routes() -> OpenApiRouter<AppState> {
    let upload = OpenApiRouter::new()
        .routes(routes!(posters::upload_event_poster))
        .routes(routes!(videos::upload_promotional_video))
        .routes(routes!(venue_photos::upload_venue_photo))
        .layer(assets::upload_body_limit());

    let read = OpenApiRouter::new()
        .routes(routes!(posters::get_event_poster_metadata))
        .routes(routes!(posters::get_event_poster_file))
        .routes(routes!(videos::get_promotional_video_metadata))
        .routes(routes!(videos::get_promotional_video_file))
        .routes(routes!(venue_photos::list_venue_photos))
        .routes(routes!(venue_photos::get_venue_photo_file));

    upload.merge(read)
}

fn event_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(events::list_events, events::create_event))
        .routes(routes!(
            events::get_event,
            events::update_event,
            events::delete_event
        ))
}

fn attendee_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(attendees::list_attendees, attendees::create_attendee))
        .routes(routes!(
            attendees::get_attendee,
            attendees::update_attendee,
            attendees::delete_attendee
        ))
}

fn venue_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(venues::list_venues, venues::create_venue))
        .routes(routes!(
            venues::get_venue,
            venues::update_venue,
            venues::delete_venue
        ))
}

fn booking_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(bookings::list_bookings, bookings::create_booking))
        .routes(routes!(
            bookings::get_booking,
            bookings::update_booking,
            bookings::delete_booking
        ))
}
