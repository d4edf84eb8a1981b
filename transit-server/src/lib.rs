//! Transit catalogue server.
//!
//! Keeps a catalogue of bus stops and bus lines, answers statistics queries
//! about them, renders the network as an SVG map, and finds the fastest
//! itinerary between two stops.

pub mod cache;
pub mod catalogue;
pub mod domain;
pub mod render;
pub mod requests;
pub mod router;
pub mod web;
