//! External collaborators: the reservation backend and the OS notification
//! service

pub mod api;
pub mod notifications;

pub use api::{ApiClient, BookingApi, BookingsResponse, LoginResponse, RestaurantApi};
pub use notifications::{NotificationGateway, NotificationPayload};
