//! Client pour la découverte de randonnées dans le Parc National des Cévennes.
//!
//! The crate models the whole front-end core of the trail-discovery client:
//! typed data model, conversational API client, chat-transcript controller,
//! headless map scene with hover synchronization, and the result-list /
//! detail view-models, wired together by a single page-root state owner.

// Interdiction stricte de pratiques dangereuses ou non idiomatiques
#![deny(unsafe_code)] // Le code unsafe est interdit
#![deny(missing_docs)] // Tout élément public doit être documenté
#![deny(non_camel_case_types)]
#![deny(unused_must_use)] // Oblige à gérer explicitement les Result et Option
#![deny(non_snake_case)]
#![deny(non_upper_case_globals)]
#![deny(nonstandard_style)]
#![forbid(unsafe_op_in_unsafe_fn)]
// Clippy pour stricte discipline
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)] // Interdit unwrap() hors tests
#![deny(clippy::expect_used)] // Interdit expect() hors tests
#![deny(clippy::panic)]
#![deny(clippy::print_stdout)] // println!() réservé à l'interface terminal
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

/// HTTP client and wire types for the remote search backend.
pub mod api;
/// Page-root application state tying map, list and chat together.
pub mod app;
/// Conversation transcript, message shapes and payload normalization.
pub mod chat;
/// Application configuration (endpoints, timeouts, map defaults).
pub mod config;
/// Presentational view-model for the hike detail panel.
pub mod detail;
/// Shared hover state observed by the map and the result list.
pub mod hover;
/// Result list and hike card view-models with scroll-into-view logic.
pub mod list;
/// Headless map scene: projection, layers, tooltip, hover hit-testing.
pub mod map;
/// Bootstrap helpers for the terminal client binary.
#[allow(clippy::print_stdout)]
pub mod startup;
/// Text cleaning and formatting helpers.
pub mod text;
