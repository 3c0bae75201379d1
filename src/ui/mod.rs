// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`home`] - Hero spread with the salon's welcome copy
//! - [`services`] - Curated treatment menu rendered as a card grid
//! - [`gallery`] - Filterable portfolio gallery
//! - [`contact`] - Boutique details and the inquiry form
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Section navigation with active-item highlighting
//! - [`footer`] - Brand footer with a section directory
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod contact;
pub mod design_tokens;
pub mod footer;
pub mod gallery;
pub mod home;
pub mod navbar;
pub mod services;
pub mod styles;
pub mod theming;
