// SPDX-License-Identifier: MPL-2.0
//! Pure domain types and logic, free of UI and I/O concerns.

pub mod catalog;
