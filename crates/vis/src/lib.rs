//! benchviz's visualization library.
//!
//! Turns date-keyed benchmark series into line charts and writes the HTML
//! pages that draw them with Plotly.

#![warn(missing_docs)]

pub(crate) mod template;

pub mod chart;
pub mod error;
pub mod layout;
pub mod page;
pub mod registry;
