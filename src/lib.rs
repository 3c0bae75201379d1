// SPDX-License-Identifier: MPL-2.0
//! `midway_mews` is a desktop storefront for the Midway Mews hair salon,
//! built with the Iced GUI framework.
//!
//! It presents the salon's service menu, a filterable portfolio gallery,
//! and contact details, and demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/midway_mews/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
