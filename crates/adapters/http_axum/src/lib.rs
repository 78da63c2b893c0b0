//! # devicenanny-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **checkout board** at `/`: a server-side-rendered HTML table of
//!   every lab device, colour-coded by type, manufacturer, availability and
//!   location
//! - Serve the **renew lookup** at `/renew`: resolves the user id typed in
//!   either board input and redirects to the external renewal page
//! - Serve the stylesheet and other static assets from a configured directory
//! - Map application results into HTML responses
//!
//! ## No-JS board approach
//! - The board is rendered server-side as complete HTML.
//! - The two "User ID" inputs belong to one `GET` form (HTML `form` attribute),
//!   so the server picks whichever is filled and answers with a redirect.
//! - The page reloads itself with `<meta http-equiv="refresh">` at a
//!   configurable interval (15 seconds by default).
//!
//! ## Dependency rule
//! Depends on `devicenanny-app` (for port traits and services) and
//! `devicenanny-domain` (for the styled rows rendered by the template). Never
//! leaks axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
