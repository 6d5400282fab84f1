//! Intermediate Representation (IR) shared by the parser and the renderers.
//!
//! The parser never builds a document tree. Each classified line becomes one or more
//! [`events::Event`]s that are handed, in order, to an [`events::EventSink`]. Renderers
//! are sinks; so is a plain `Vec<Event>`, which is what the inspect formats and the tests
//! use.

pub mod events;
